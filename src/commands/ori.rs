use crate::args::OriArgs;
use crate::errors::*;
use crate::fasta::read_fasta;
use crate::ori::{at_fraction, find_ori_with};

pub fn main(args: &OriArgs) -> Result<()> {
    ::rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .chain_err(|| "failed to build thread pool")?;

    eprintln!("Reading donor sequence from {:?}", args.fasta);
    let (name, sequence) = read_fasta(&args.fasta)?;

    let ori = find_ori_with(&sequence, args.ori);

    println!("Name\tStart\tEnd\tLength\tATFraction");
    println!(
        "{}\t{}\t{}\t{}\t{:.4}",
        name,
        ori.start,
        ori.end,
        ori.len(),
        at_fraction(ori.slice(&sequence))
    );

    Ok(())
}
