//! The in-memory dataset shared by all queries.

use serde::{Deserialize, Serialize};

use super::site::MastSite;

/// All mast sites from one input file, in file order.
///
/// Built once by the loader and only read afterwards. No field is unique:
/// repeated tenants and properties are expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Header row, in file order
    pub headers: Vec<String>,
    /// One entry per data row, in file order
    pub sites: Vec<MastSite>,
}

impl Dataset {
    /// Create a dataset from its header row and sites.
    pub fn new(headers: Vec<String>, sites: Vec<MastSite>) -> Self {
        Self { headers, sites }
    }

    /// Number of sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Whether the dataset has no sites.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Iterate over sites in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, MastSite> {
        self.sites.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a MastSite;
    type IntoIter = std::slice::Iter<'a, MastSite>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.iter()
    }
}
