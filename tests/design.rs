extern crate plasmidr;

use std::io::Cursor;

use plasmidr::design::*;
use plasmidr::diagnostics::DiagnosticKind;

const DESIGN: &str = "# pUC19 derived design

Multiple_Cloning_Site1, EcoRI
Multiple_Cloning_Site2,BamHI
  Antibiotic_marker1 ,  Amp  
Origin, pMB1
no comma here
Antibiotic_marker2, Kan
";

#[test]
fn test_parse_design() {
    let result = parse_design(Cursor::new(DESIGN)).unwrap();
    let design = result.value;

    assert_eq!(design.enzymes, vec!["EcoRI", "BamHI"]);
    assert_eq!(design.antibiotics, vec!["Amp", "Kan"]);
}

#[test]
fn test_parse_design_diagnostics() {
    let result = parse_design(Cursor::new(DESIGN)).unwrap();
    let identifiers: Vec<_> = result
        .diagnostics
        .iter()
        .map(|d| d.identifier.as_str())
        .collect();

    assert_eq!(
        result.diagnostics.kinds(),
        vec![
            DiagnosticKind::UnknownDirective,
            DiagnosticKind::MalformedDesignLine
        ]
    );
    assert_eq!(identifiers, vec!["Origin", "no comma here"]);
}

#[test]
fn test_parse_design_splits_on_first_comma() {
    let result = parse_design(Cursor::new("Multiple_Cloning_Site, EcoRI, BamHI\n")).unwrap();

    assert_eq!(result.value.enzymes, vec!["EcoRI, BamHI"]);
}

#[test]
fn test_parse_empty_design() {
    let result = parse_design(Cursor::new("")).unwrap();

    assert_eq!(result.value, PlasmidDesign::default());
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_infer_sites_for_puc19() {
    let design = PlasmidDesign::new(vec!["BamHI".into()], vec![]);

    assert_eq!(infer_sites_to_remove("data/pUC19.fa", &design), vec!["EcoRI"]);
    assert_eq!(infer_sites_to_remove("PUC19_copy.fasta", &design), vec!["EcoRI"]);
}

#[test]
fn test_no_inferred_sites_when_ecori_in_mcs() {
    let design = PlasmidDesign::new(vec!["EcoRI".into()], vec![]);

    assert!(infer_sites_to_remove("data/pUC19.fa", &design).is_empty());
}

#[test]
fn test_no_inferred_sites_for_other_donors() {
    let design = PlasmidDesign::default();

    assert!(infer_sites_to_remove("pBR322.fa", &design).is_empty());
}
