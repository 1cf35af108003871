use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::enzyme::Enzyme;

/// Concatenate the recognition sites of `enzymes` in order, without spacers.
///
/// Names not found in the catalog are skipped and recorded in `diagnostics`.
pub fn build_mcs<S: AsRef<str>>(enzymes: &[S], diagnostics: &mut Diagnostics) -> Vec<u8> {
    let mut mcs = Vec::new();
    for name in enzymes {
        let name = name.as_ref();
        match Enzyme::get(name) {
            Some(enzyme) => mcs.extend_from_slice(enzyme.site),
            None => diagnostics.push(DiagnosticKind::UnknownEnzyme, name),
        }
    }

    mcs
}
