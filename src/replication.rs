use crate::constants::*;

/// Synthetic replication ORF: a start codon, a run of adenines and a stop codon.
///
/// This is a fixed placeholder, not a functional replication origin.
pub fn build_replication_core() -> Vec<u8> {
    let mut core = Vec::with_capacity(START_CODON.len() + REPLICATION_CORE_FILL + STOP_CODON.len());
    core.extend_from_slice(START_CODON);
    core.extend(std::iter::repeat(b'A').take(REPLICATION_CORE_FILL));
    core.extend_from_slice(STOP_CODON);

    core
}
