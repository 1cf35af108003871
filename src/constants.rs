// Default ORI scan parameters
pub const ORI_WINDOW: usize = 800;
pub const ORI_STEP: usize = 100;

// Separator placed before each marker and before the MCS
pub const SPACER: &[u8] = b"AAAA";

pub const START_CODON: &[u8] = b"ATG";
pub const STOP_CODON: &[u8] = b"TAA";
pub const REPLICATION_CORE_FILL: usize = 100;

pub const FASTA_WIDTH: usize = 60;
pub const OUTPUT_ID: &str = "designed_plasmid";

// Column names required in the marker table header
pub const MARKER_NAME_COLUMN: &str = "antibiotic_name";
pub const MARKER_SEQUENCE_COLUMN: &str = "sequence";

pub const DESIGN_MCS_KEY: &str = "Multiple_Cloning_Site";
pub const DESIGN_MARKER_KEY: &str = "Antibiotic_marker";
