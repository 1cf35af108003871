use std::io::BufRead;
use std::path::Path;

use crate::constants::{DESIGN_MARKER_KEY, DESIGN_MCS_KEY};
use crate::diagnostics::{DiagnosticKind, Diagnostics, WithDiagnostics};
use crate::errors::*;

/// Ordered enzyme names (for the MCS) and antibiotic names (for markers).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlasmidDesign {
    pub enzymes: Vec<String>,
    pub antibiotics: Vec<String>,
}

impl PlasmidDesign {
    pub fn new(enzymes: Vec<String>, antibiotics: Vec<String>) -> PlasmidDesign {
        PlasmidDesign {
            enzymes,
            antibiotics,
        }
    }
}

/// Parse `Key, Value` directives, one per line.
///
/// Keys starting with `Multiple_Cloning_Site` add an enzyme to the MCS, while
/// keys starting with `Antibiotic_marker` add a marker. Blank lines and lines
/// starting with `#` are ignored.
pub fn parse_design<R: BufRead>(reader: R) -> Result<WithDiagnostics<PlasmidDesign>> {
    let mut design = PlasmidDesign::default();
    let mut diagnostics = Diagnostics::new();

    for line in reader.lines() {
        let line = line.chain_err(|| "error reading line from design file")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.splitn(2, ',').map(str::trim);
        let (key, value) = match (fields.next(), fields.next()) {
            (Some(key), Some(value)) => (key, value),
            _ => {
                diagnostics.push(DiagnosticKind::MalformedDesignLine, line);
                continue;
            }
        };

        if key.starts_with(DESIGN_MCS_KEY) {
            design.enzymes.push(value.to_owned());
        } else if key.starts_with(DESIGN_MARKER_KEY) {
            design.antibiotics.push(value.to_owned());
        } else {
            diagnostics.push(DiagnosticKind::UnknownDirective, key);
        }
    }

    Ok(WithDiagnostics::new(design, diagnostics))
}

pub fn read<P: AsRef<Path>>(path: P) -> Result<WithDiagnostics<PlasmidDesign>> {
    let path = path.as_ref();
    let reader = crate::common::open_file(path)?;

    parse_design(reader).chain_err(|| format!("failed to read design file {:?}", path))
}

/// Sites removed from the assembled plasmid when none are requested explicitly:
/// EcoRI for pUC19 donors, unless EcoRI is part of the MCS.
pub fn infer_sites_to_remove(input_path: &str, design: &PlasmidDesign) -> Vec<String> {
    let mut sites = Vec::new();
    if input_path.to_lowercase().contains("puc19") && !design.enzymes.iter().any(|e| e == "EcoRI")
    {
        sites.push("EcoRI".to_owned());
    }

    sites
}
