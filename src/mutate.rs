/// Returns true if `motif` occurs anywhere in `sequence`.
pub fn contains_motif(sequence: &[u8], motif: &[u8]) -> bool {
    !motif.is_empty() && sequence.windows(motif.len()).any(|window| window == motif)
}

/// Substitution applied to a matched base: A becomes C, anything else becomes A.
pub fn substitute(nuc: u8) -> u8 {
    if nuc == b'A' {
        b'C'
    } else {
        b'A'
    }
}

/// Destroy each non-overlapping occurrence of `motif`, scanning left to right.
///
/// The second base of every match is substituted, after which the scan resumes
/// immediately past the match. Single-base motifs have no second base; for
/// those the matched base itself is substituted instead of the base at `i + 1`.
pub fn mutate_motif(sequence: &[u8], motif: &[u8]) -> Vec<u8> {
    let mut result = sequence.to_owned();
    let motif_len = motif.len();
    if motif_len == 0 || motif_len > result.len() {
        return result;
    }

    let offset = usize::min(1, motif_len - 1);
    let mut idx = 0;
    while idx + motif_len <= result.len() {
        if &result[idx..idx + motif_len] == motif {
            let nuc = &mut result[idx + offset];
            *nuc = substitute(*nuc);
            idx += motif_len;
        } else {
            idx += 1;
        }
    }

    result
}
