use std::fs::File;
use std::io;
use std::io::{BufReader, Write};
use std::path::Path;

use bio::alphabets::Alphabet;

use crate::errors::*;

lazy_static! {
    static ref NUCLEOTIDES: Alphabet = Alphabet::new(b"ACGT");
}

/// Upper-case a raw sequence.
pub fn normalize_sequence(seq: &[u8]) -> Vec<u8> {
    seq.to_ascii_uppercase()
}

/// True if `seq` consists only of (upper-case) A, C, G and T.
pub fn is_valid_sequence(seq: &[u8]) -> bool {
    NUCLEOTIDES.is_word(seq)
}

pub fn open_file<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
    let path = path.as_ref();
    let handle = File::open(path).chain_err(|| format!("could not open file {:?}", path))?;

    Ok(BufReader::new(handle))
}

pub fn open_file_or_stdout(file: &Option<String>) -> Result<Box<dyn Write>> {
    if let Some(path) = file {
        let handle =
            File::create(path).chain_err(|| format!("could not create output file {:?}", path))?;
        let writer = io::BufWriter::new(handle);

        Ok(Box::new(writer))
    } else {
        Ok(Box::new(io::stdout()))
    }
}
