extern crate plasmidr;

use plasmidr::enzyme::Enzyme;
use plasmidr::mutate::*;

#[test]
fn test_substitution_rule() {
    assert_eq!(substitute(b'A'), b'C');
    assert_eq!(substitute(b'C'), b'A');
    assert_eq!(substitute(b'G'), b'A');
    assert_eq!(substitute(b'T'), b'A');
}

#[test]
fn test_mutates_second_base_of_match() {
    assert_eq!(mutate_motif(b"GAATTC", b"GAATTC"), b"GCATTC".to_vec());
    assert_eq!(mutate_motif(b"TCTAGA", b"TCTAGA"), b"TATAGA".to_vec());
    assert_eq!(mutate_motif(b"CCCGGG", b"CCCGGG"), b"CACGGG".to_vec());
}

#[test]
fn test_mutates_every_occurrence() {
    assert_eq!(
        mutate_motif(b"TTGAATTCGGGAATTCAA", b"GAATTC"),
        b"TTGCATTCGGGCATTCAA".to_vec()
    );
}

#[test]
fn test_skips_past_each_match() {
    assert_eq!(mutate_motif(b"AAAA", b"AA"), b"ACAC".to_vec());
}

#[test]
fn test_overlapping_occurrence_is_skipped() {
    // The second GCATGC starts inside the first match and is not scanned
    assert_eq!(
        mutate_motif(b"GCATGCATGC", b"GCATGC"),
        b"GAATGCATGC".to_vec()
    );
}

#[test]
fn test_no_match_is_unchanged() {
    assert_eq!(mutate_motif(b"ACGTACGT", b"GAATTC"), b"ACGTACGT".to_vec());
}

#[test]
fn test_degenerate_motifs() {
    assert_eq!(mutate_motif(b"ACGT", b""), b"ACGT".to_vec());
    assert_eq!(mutate_motif(b"ACG", b"ACGT"), b"ACG".to_vec());
    assert_eq!(mutate_motif(b"", b"ACGT"), b"".to_vec());
}

#[test]
fn test_single_base_motif() {
    assert_eq!(mutate_motif(b"AGGT", b"G"), b"AAAT".to_vec());
}

#[test]
fn test_contains_motif() {
    assert!(contains_motif(b"TTGAATTCTT", b"GAATTC"));
    assert!(contains_motif(b"GAATTC", b"GAATTC"));
    assert!(!contains_motif(b"GAATT", b"GAATTC"));
    assert!(!contains_motif(b"ACGT", b""));
}

fn all_sites() -> Vec<u8> {
    let mut seq = Vec::new();
    for enzyme in Enzyme::all() {
        seq.extend_from_slice(enzyme.site);
        seq.extend_from_slice(b"TT");
    }

    seq.extend_from_slice(b"GAATTCGAATTC");
    seq
}

#[test]
fn test_catalog_sites_are_removed() {
    let seq = all_sites();

    for enzyme in Enzyme::all() {
        assert!(contains_motif(&seq, enzyme.site), "{}", enzyme.name);
        let mutated = mutate_motif(&seq, enzyme.site);

        assert!(!contains_motif(&mutated, enzyme.site), "{}", enzyme.name);
        assert_eq!(mutated.len(), seq.len());
    }
}

#[test]
fn test_catalog_sites_idempotent() {
    let seq = all_sites();

    for enzyme in Enzyme::all() {
        let once = mutate_motif(&seq, enzyme.site);
        let twice = mutate_motif(&once, enzyme.site);

        assert_eq!(once, twice, "{}", enzyme.name);
    }
}

#[test]
fn test_only_targeted_site_is_mutated() {
    let seq = all_sites();
    let mutated = mutate_motif(&seq, b"GGATCC");
    for enzyme in Enzyme::all() {
        if enzyme.name != "BamHI" {
            assert!(contains_motif(&mutated, enzyme.site), "{}", enzyme.name);
        }
    }
}
