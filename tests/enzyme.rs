extern crate plasmidr;
use plasmidr::enzyme::Enzyme;

#[test]
fn test_enzyme_ecori() {
    let enzyme = Enzyme::get("EcoRI").unwrap();

    assert_eq!(enzyme.name, "EcoRI");
    assert_eq!(enzyme.site, b"GAATTC");
    assert_eq!(enzyme.site_str(), "GAATTC");
}

#[test]
fn test_enzyme_catalog_sites() {
    assert_eq!(Enzyme::get("SacI").map(|v| v.site), Some(&b"GAGCTC"[..]));
    assert_eq!(Enzyme::get("KpnI").map(|v| v.site), Some(&b"GGTACC"[..]));
    assert_eq!(Enzyme::get("SmaI").map(|v| v.site), Some(&b"CCCGGG"[..]));
    assert_eq!(Enzyme::get("BamHI").map(|v| v.site), Some(&b"GGATCC"[..]));
    assert_eq!(Enzyme::get("XbaI").map(|v| v.site), Some(&b"TCTAGA"[..]));
    assert_eq!(Enzyme::get("SalI").map(|v| v.site), Some(&b"GTCGAC"[..]));
    assert_eq!(Enzyme::get("PstI").map(|v| v.site), Some(&b"CTGCAG"[..]));
    assert_eq!(Enzyme::get("SphI").map(|v| v.site), Some(&b"GCATGC"[..]));
    assert_eq!(Enzyme::get("HindIII").map(|v| v.site), Some(&b"AAGCTT"[..]));
}

#[test]
fn test_enzyme_names_are_case_sensitive() {
    assert_eq!(Enzyme::get("ecori"), None);
    assert_eq!(Enzyme::get("ECORI"), None);
    assert_eq!(Enzyme::get("bamhi"), None);
}

#[test]
fn test_enzyme_unknown() {
    assert_eq!(Enzyme::get(""), None);
    assert_eq!(Enzyme::get("NotI"), None);
    assert_eq!(Enzyme::get("Foo"), None);
}

#[test]
fn test_enzyme_all_in_catalog_order() {
    let names: Vec<_> = Enzyme::all().iter().map(|e| e.name).collect();

    assert_eq!(
        names,
        vec!["EcoRI", "SacI", "KpnI", "SmaI", "BamHI", "XbaI", "SalI", "PstI", "SphI", "HindIII"]
    );
}

#[test]
fn test_enzyme_all_resolvable() {
    for enzyme in Enzyme::all() {
        assert_eq!(Enzyme::get(enzyme.name), Some(enzyme));
    }
}
