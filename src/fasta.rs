use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use bio::io::fasta;

use crate::common::{is_valid_sequence, normalize_sequence, open_file};
use crate::errors::*;

pub const DEFAULT_NAME: &str = "sequence";

fn parse_records(text: &[u8]) -> Result<(Option<String>, Vec<u8>)> {
    let reader = fasta::Reader::new(text);

    let mut name = None;
    let mut sequence = Vec::new();
    for record in reader.records() {
        let record = record.chain_err(|| "failed to read FASTA sequence")?;
        record.check().map_err(|v| ErrorKind::Msg(v.into()))?;

        if name.is_none() {
            name = Some(record.id().to_owned());
        }

        sequence.extend(normalize_sequence(record.seq()));
    }

    Ok((name, sequence))
}

/// Read all records in a FASTA file as a single sequence.
///
/// The name of the first record is returned along with the upper-cased
/// concatenation of every record's sequence. Blank lines are ignored, and input
/// that does not start with a `>` header is read as a bare sequence named
/// `sequence`. Sequences containing anything other than A, C, G and T are
/// rejected.
pub fn parse_fasta<R: Read>(reader: R) -> Result<(String, Vec<u8>)> {
    let mut lines = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line.chain_err(|| "error reading line from FASTA file")?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_owned());
        }
    }

    let (name, sequence) = match lines.first() {
        Some(line) if line.starts_with('>') => parse_records(lines.join("\n").as_bytes())?,
        _ => {
            let sequence: Vec<u8> = lines
                .iter()
                .filter(|line| !line.starts_with('>'))
                .flat_map(|line| normalize_sequence(line.as_bytes()))
                .collect();

            (None, sequence)
        }
    };

    if !is_valid_sequence(&sequence) {
        return Err("sequence contains characters other than A, C, G and T".into());
    }

    Ok((name.unwrap_or_else(|| DEFAULT_NAME.to_owned()), sequence))
}

pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<(String, Vec<u8>)> {
    let path = path.as_ref();
    let reader = open_file(path)?;

    parse_fasta(reader).chain_err(|| format!("failed to read FASTA file {:?}", path))
}

/// Write a single FASTA record, wrapping the sequence every `width` bases.
pub fn write_fasta<W: Write + ?Sized>(
    out: &mut W,
    name: &str,
    seq: &[u8],
    width: usize,
) -> Result<()> {
    writeln!(out, ">{}", name).chain_err(|| "failed to write FASTA header")?;
    for line in seq.chunks(usize::max(width, 1)) {
        out.write_all(line)
            .and_then(|_| out.write_all(b"\n"))
            .chain_err(|| "failed to write FASTA sequence")?;
    }

    out.flush().chain_err(|| "failed to flush FASTA output")
}
