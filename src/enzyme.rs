use std::collections::HashMap;

// Common pUC19 MCS sites, in catalog order
const SITES: [(&str, &[u8]); 10] = [
    ("EcoRI", b"GAATTC"),
    ("SacI", b"GAGCTC"),
    ("KpnI", b"GGTACC"),
    ("SmaI", b"CCCGGG"),
    ("BamHI", b"GGATCC"),
    ("XbaI", b"TCTAGA"),
    ("SalI", b"GTCGAC"),
    ("PstI", b"CTGCAG"),
    ("SphI", b"GCATGC"),
    ("HindIII", b"AAGCTT"),
];

lazy_static! {
    static ref CATALOG: HashMap<&'static str, Enzyme> = SITES
        .iter()
        .map(|&(name, site)| (name, Enzyme { name, site }))
        .collect();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enzyme {
    pub name: &'static str,
    pub site: &'static [u8],
}

impl Enzyme {
    /// Look up an enzyme by its exact (case-sensitive) name.
    pub fn get(name: &str) -> Option<Enzyme> {
        CATALOG.get(name).copied()
    }

    /// All catalog entries in a stable order.
    pub fn all() -> Vec<Enzyme> {
        SITES
            .iter()
            .map(|&(name, site)| Enzyme { name, site })
            .collect()
    }

    pub fn site_str(&self) -> &'static str {
        // Catalog sites are ASCII literals
        std::str::from_utf8(self.site).unwrap_or("")
    }
}
