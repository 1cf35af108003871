use std::collections::HashMap;

use crate::constants::SPACER;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Antibiotic name to marker sequence; names are case-sensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkerTable {
    markers: HashMap<String, Vec<u8>>,
}

impl MarkerTable {
    pub fn new() -> MarkerTable {
        MarkerTable {
            markers: HashMap::new(),
        }
    }

    /// Insert a marker, replacing any previous sequence for `name`; the
    /// sequence is stored in upper-case.
    pub fn insert<S: Into<String>>(&mut self, name: S, sequence: &[u8]) {
        self.markers
            .insert(name.into(), sequence.to_ascii_uppercase());
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.markers.get(name).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl<S: Into<String>, V: AsRef<[u8]>> std::iter::FromIterator<(S, V)> for MarkerTable {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> MarkerTable {
        let mut table = MarkerTable::new();
        for (name, sequence) in iter {
            table.insert(name, sequence.as_ref());
        }

        table
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerBlock {
    pub name: String,
    pub spacer: &'static [u8],
    pub marker: Vec<u8>,
}

/// Resolve `antibiotics` against `table`, producing one spacer + marker block
/// per resolved name, in input order.
pub fn insert_markers<S: AsRef<str>>(
    antibiotics: &[S],
    table: &MarkerTable,
    diagnostics: &mut Diagnostics,
) -> Vec<MarkerBlock> {
    let mut blocks = Vec::new();
    for name in antibiotics {
        let name = name.as_ref();
        match table.get(name) {
            Some(marker) => blocks.push(MarkerBlock {
                name: name.to_owned(),
                spacer: SPACER,
                marker: marker.to_owned(),
            }),
            None => diagnostics.push(DiagnosticKind::UnknownAntibiotic, name),
        }
    }

    blocks
}
