use std::fmt;
use std::slice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnknownEnzyme,
    UnknownAntibiotic,
    UnknownRemovalSite,
    MalformedDesignLine,
    UnknownDirective,
    MalformedMarkerRow,
    MissingMarkerColumns,
    EmptyMarkerTable,
}

/// Advisory record of something skipped or ignored; never affects control flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub identifier: String,
}

impl Diagnostic {
    pub fn new<S: Into<String>>(kind: DiagnosticKind, identifier: S) -> Diagnostic {
        Diagnostic {
            kind,
            identifier: identifier.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let id = &self.identifier;
        match self.kind {
            DiagnosticKind::UnknownEnzyme => {
                write!(f, "Unknown restriction enzyme {:?}, skipping", id)
            }
            DiagnosticKind::UnknownAntibiotic => {
                write!(f, "Antibiotic {:?} not in marker table, skipping", id)
            }
            DiagnosticKind::UnknownRemovalSite => {
                write!(f, "Cannot remove site for unknown enzyme {:?}", id)
            }
            DiagnosticKind::MalformedDesignLine => {
                write!(f, "Could not parse line in design file: {:?}", id)
            }
            DiagnosticKind::UnknownDirective => {
                write!(f, "Unknown design directive {:?}, skipping", id)
            }
            DiagnosticKind::MalformedMarkerRow => {
                write!(f, "Skipping malformed marker table row: {:?}", id)
            }
            DiagnosticKind::MissingMarkerColumns => write!(
                f,
                "Marker table missing required columns; expected 'antibiotic_name' \
                 and 'sequence', found {:?}",
                id
            ),
            DiagnosticKind::EmptyMarkerTable => write!(f, "Marker table is empty"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Diagnostics {
        Diagnostics(Vec::new())
    }

    pub fn push<S: Into<String>>(&mut self, kind: DiagnosticKind, identifier: S) {
        self.0.push(Diagnostic::new(kind, identifier));
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<Diagnostic> {
        self.0.iter()
    }

    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.0.iter().map(|d| d.kind).collect()
    }

    /// Print each diagnostic to STDERR as a warning
    pub fn report(&self) {
        for diagnostic in &self.0 {
            eprintln!("WARNING: {}", diagnostic);
        }
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A computed value along with the diagnostics collected while computing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithDiagnostics<T> {
    pub value: T,
    pub diagnostics: Diagnostics,
}

impl<T> WithDiagnostics<T> {
    pub fn new(value: T, diagnostics: Diagnostics) -> WithDiagnostics<T> {
        WithDiagnostics { value, diagnostics }
    }
}
