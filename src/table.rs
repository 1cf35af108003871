use std::collections::HashMap;
use std::io::prelude::*;
use std::path::Path;

use crate::constants::{MARKER_NAME_COLUMN, MARKER_SEQUENCE_COLUMN};
use crate::diagnostics::{DiagnosticKind, Diagnostics, WithDiagnostics};
use crate::errors::*;
use crate::marker::MarkerTable;

/// Load a tab-separated marker table with `antibiotic_name` and `sequence`
/// columns (in any position) named in the header.
pub fn load_markers<R: BufRead>(reader: R) -> Result<WithDiagnostics<MarkerTable>> {
    let mut table = MarkerTable::new();
    let mut diagnostics = Diagnostics::new();
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line.chain_err(|| "error reading marker table header")?,
        None => String::new(),
    };

    let header = header.trim();
    if header.is_empty() {
        diagnostics.push(DiagnosticKind::EmptyMarkerTable, "");
        return Ok(WithDiagnostics::new(table, diagnostics));
    }

    let columns: HashMap<&str, usize> = header
        .split('\t')
        .enumerate()
        .map(|(idx, name)| (name, idx))
        .collect();
    let ncolumns = header.split('\t').count();

    let (name_idx, seq_idx) = match (
        columns.get(MARKER_NAME_COLUMN),
        columns.get(MARKER_SEQUENCE_COLUMN),
    ) {
        (Some(&name_idx), Some(&seq_idx)) => (name_idx, seq_idx),
        _ => {
            diagnostics.push(DiagnosticKind::MissingMarkerColumns, header);
            return Ok(WithDiagnostics::new(table, diagnostics));
        }
    };

    for line in lines {
        let line = line.chain_err(|| "error reading line from marker table")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < ncolumns {
            diagnostics.push(DiagnosticKind::MalformedMarkerRow, line);
            continue;
        }

        let name = fields[name_idx].trim();
        let sequence = fields[seq_idx].trim();
        if !name.is_empty() && !sequence.is_empty() {
            table.insert(name, sequence.as_bytes());
        }
    }

    Ok(WithDiagnostics::new(table, diagnostics))
}

pub fn read<P: AsRef<Path>>(path: P) -> Result<WithDiagnostics<MarkerTable>> {
    let path = path.as_ref();
    let reader = crate::common::open_file(path)?;

    load_markers(reader).chain_err(|| format!("failed to read marker table {:?}", path))
}
