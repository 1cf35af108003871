use crate::args::BuildArgs;
use crate::assembler::{build_plasmid_with, Plasmid};
use crate::common::open_file_or_stdout;
use crate::constants::FASTA_WIDTH;
use crate::design;
use crate::diagnostics::Diagnostics;
use crate::errors::*;
use crate::fasta::{read_fasta, write_fasta};
use crate::table;

fn summarize(plasmid: &Plasmid) {
    eprintln!(
        "  ori window: {}-{} ({} bp)",
        plasmid.ori.start + 1,
        plasmid.ori.end,
        plasmid.ori.len()
    );

    let mut offset = 0;
    for block in &plasmid.blocks {
        let len = block.sequence.len();
        eprintln!("  {:>7}-{:<7} {}", offset + 1, offset + len, block.kind.label());
        offset += len;
    }

    for name in &plasmid.removed_sites {
        eprintln!("  removed {} sites", name);
    }

    let mutated = plasmid
        .assembled()
        .iter()
        .zip(plasmid.sequence.iter())
        .filter(|(before, after)| before != after)
        .count();
    if mutated > 0 {
        eprintln!("  mutated {} bases", mutated);
    }

    eprintln!("  total length: {} bp", plasmid.sequence.len());
}

pub fn main(args: &BuildArgs) -> Result<()> {
    ::rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .chain_err(|| "failed to build thread pool")?;

    eprintln!("Reading donor sequence from {:?}", args.fasta);
    let (name, donor) = read_fasta(&args.fasta)?;
    eprintln!("  read {} bp from {:?}", donor.len(), name);

    eprintln!("Reading design from {:?}", args.design);
    let mut warnings = Diagnostics::new();
    let design = design::read(&args.design)?;
    design.diagnostics.report();
    warnings.extend(design.diagnostics);
    let design = design.value;
    eprintln!(
        "  read {} enzymes and {} markers",
        design.enzymes.len(),
        design.antibiotics.len()
    );

    eprintln!("Reading markers from {:?}", args.markers);
    let markers = table::read(&args.markers)?;
    markers.diagnostics.report();
    warnings.extend(markers.diagnostics);
    let markers = markers.value;
    eprintln!("  read {} marker sequences", markers.len());

    let remove = match &args.remove {
        Some(sites) => sites.clone(),
        None => design::infer_sites_to_remove(&args.fasta, &design),
    };

    eprintln!("Assembling plasmid");
    let plasmid = build_plasmid_with(&donor, &design, &markers, &remove, args.ori);
    plasmid.diagnostics.report();
    warnings.extend(plasmid.diagnostics);
    let plasmid = plasmid.value;
    summarize(&plasmid);

    if !warnings.is_empty() {
        eprintln!("  {} warnings while building plasmid", warnings.len());
    }

    let mut out = open_file_or_stdout(&args.output)?;
    write_fasta(&mut out, &args.id, &plasmid.sequence, FASTA_WIDTH)?;

    if let Some(output) = &args.output {
        eprintln!("Wrote designed plasmid to {:?}", output);
    }

    Ok(())
}
