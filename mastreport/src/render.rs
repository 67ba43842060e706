//! Rendering of report sections for the terminal or as JSON

use console::Style;
use mastreportlib::{ReportSection, TableLayout};
use std::str::FromStr;

/// How report sections are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Aligned plain-text tables
    #[default]
    Table,
    /// One JSON array of sections
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputMode::Table),
            "json" => Ok(OutputMode::Json),
            _ => Err(format!("Unknown output mode: {}", s)),
        }
    }
}

/// Style for header lines; plain when stdout is not a terminal
fn header_style() -> Style {
    Style::new().bold()
}

/// Render one section as text: each table framed by blank lines
pub fn render_text(section: &ReportSection) -> String {
    let style = header_style();
    let mut output = String::new();

    for table in &section.tables {
        let layout = TableLayout::from_result(table);
        output.push('\n');
        output.push_str(&style.apply_to(&layout.header).to_string());
        output.push('\n');
        for line in layout.lines().skip(1) {
            output.push_str(line);
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

/// Render all sections as pretty-printed JSON
pub fn render_json(sections: &[ReportSection]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(sections)
}
