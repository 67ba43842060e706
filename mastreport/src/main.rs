//! # mastreport
//!
//! A CLI tool for reporting on leased mobile phone mast sites.
//!
//! ## Overview
//!
//! mastreport is built on top of mastreportlib. It loads a mast site CSV
//! export once and prints one table per requested query.
//!
//! ## Features
//!
//! - **Rent ranking**: `--top-rents N`, cheapest first (or `--descending`)
//! - **Lease-years matching**: `--lease-years Y`, with a total rent table
//! - **Tenant census**: `--tenants`
//! - **Lease window matching**: `--lease-starting-range START END`
//! - **Multiple output formats**: Table (default), JSON
//!
//! ## Usage
//!
//! ```bash
//! # Five cheapest sites
//! mastreport masts.csv --top-rents 5
//!
//! # Sites on 25-year leases and their total rent
//! mastreport masts.csv --lease-years 25
//!
//! # Several queries at once, as JSON
//! mastreport masts.csv --tenants --lease-starting-range 1999-06-01 2007-08-31 --output json
//! ```

mod logging;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use mastreportlib::{check_file_exists, load_dataset, LeaseWindow, OrderDirection, ReportOptions};
use tracing::{info, warn};

use crate::logging::init_logging;
use crate::render::{render_json, render_text, OutputMode};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("mastreport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Analysis of leased mobile phone mast sites from a CSV export")
        .arg(
            Arg::new("csv_file")
                .help("Path of the mast site CSV file")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("top-rents")
                .short('r')
                .long("top-rents")
                .visible_alias("top_rents")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Show the N sites with the lowest current rent, in ascending order"),
        )
        .arg(
            Arg::new("descending")
                .short('d')
                .long("descending")
                .action(ArgAction::SetTrue)
                .requires("top-rents")
                .help("Rank --top-rents by highest rent first"),
        )
        .arg(
            Arg::new("lease-years")
                .short('l')
                .long("lease-years")
                .visible_alias("lease_years")
                .value_name("YEARS")
                .value_parser(value_parser!(i64))
                .help("Show sites with exactly YEARS of lease, and their total rent"),
        )
        .arg(
            Arg::new("tenants")
                .short('t')
                .long("tenants")
                .action(ArgAction::SetTrue)
                .help("Show tenants and their number of masts"),
        )
        .arg(
            Arg::new("lease-starting-range")
                .short('s')
                .long("lease-starting-range")
                .visible_alias("lease_starting_range")
                .num_args(2)
                .value_names(["START", "END"])
                .help("Show sites whose lease started between two dates, inclusive (YYYY-MM-DD)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v debug, -vv trace)"),
        )
}

/// Build report options from matches
fn build_options(matches: &ArgMatches) -> anyhow::Result<ReportOptions> {
    let mut options = ReportOptions::new().tenants(matches.get_flag("tenants"));

    if let Some(&count) = matches.get_one::<usize>("top-rents") {
        let direction = if matches.get_flag("descending") {
            OrderDirection::Descending
        } else {
            OrderDirection::Ascending
        };
        options = options.top_rents(count).rent_direction(direction);
    }

    if let Some(&years) = matches.get_one::<i64>("lease-years") {
        options = options.lease_years(years);
    }

    if let Some(range) = matches.get_many::<String>("lease-starting-range") {
        let bounds: Vec<&String> = range.collect();
        let window = LeaseWindow::parse(bounds[0], bounds[1])
            .context("invalid --lease-starting-range")?;
        options = options.lease_window(window);
    }

    Ok(options)
}

/// Extract output mode from matches
fn extract_output_mode(matches: &ArgMatches) -> OutputMode {
    matches
        .get_one::<String>("output")
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    info!("starting");

    let path = matches
        .get_one::<PathBuf>("csv_file")
        .context("missing CSV file argument")?;
    check_file_exists(path)?;

    let options = build_options(matches)?;
    if options.is_empty() {
        warn!("No query options were selected!");
        return Ok(());
    }

    let dataset = load_dataset(path)?;
    info!("read {} sites from {}", dataset.len(), path.display());

    match extract_output_mode(matches) {
        OutputMode::Table => {
            for query in options.queries() {
                info!("{} ...", query.title());
                let section = query.run(&dataset)?;
                print!("{}", render_text(&section));
            }
        }
        OutputMode::Json => {
            let sections = options.run(&dataset)?;
            println!("{}", render_json(&sections)?);
        }
    }

    info!("end");
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
