use clap::{App, Arg, ArgMatches, SubCommand};

use crate::constants::*;
use crate::errors::*;
use crate::ori::OriParams;

#[derive(Debug)]
pub struct BuildArgs {
    pub fasta: String,
    pub design: String,
    pub markers: String,
    pub output: Option<String>,
    pub remove: Option<Vec<String>>,
    pub id: String,
    pub ori: OriParams,
    pub threads: usize,
}

#[derive(Debug)]
pub struct OriArgs {
    pub fasta: String,
    pub ori: OriParams,
    pub threads: usize,
}

pub enum Args {
    Build(BuildArgs),
    Ori(OriArgs),
    Sites,
    None,
}

fn threads_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("threads")
        .long("threads")
        .takes_value(true)
        .allow_hyphen_values(true)
        .number_of_values(1)
        .default_value("0")
        .help("Number of threads used for computation (0 for automatic).")
}

fn window_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("window")
        .long("window")
        .takes_value(true)
        .default_value("800")
        .help("Length of windows scanned for AT-rich origin of replication.")
}

fn step_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("step")
        .long("step")
        .takes_value(true)
        .default_value("100")
        .help("Distance between the starts of scanned windows.")
}

fn build_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("build")
        .about("Assemble plasmid from donor sequence, design and marker table")
        .arg(
            Arg::with_name("fasta")
                .help("FASTA file containing the donor sequence.")
                .required(true),
        )
        .arg(
            Arg::with_name("design")
                .help("Design file listing MCS enzymes and antibiotic markers.")
                .required(true),
        )
        .arg(
            Arg::with_name("markers")
                .help("Tab-separated table of antibiotic marker sequences.")
                .required(true),
        )
        .arg(Arg::with_name("output").help("Output FASTA file; defaults to STDOUT."))
        .arg(
            Arg::with_name("remove")
                .long("remove")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help(
                    "Restriction site to remove from the assembled plasmid; may be \
                     given multiple times. Overrides the sites inferred from the input.",
                ),
        )
        .arg(
            Arg::with_name("id")
                .long("id")
                .takes_value(true)
                .default_value(OUTPUT_ID)
                .help("Name of the output FASTA record."),
        )
        .arg(window_arg())
        .arg(step_arg())
        .arg(threads_arg())
}

fn ori_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("ori")
        .about("Report the AT-rich window selected as origin of replication")
        .arg(
            Arg::with_name("fasta")
                .help("FASTA file containing the donor sequence.")
                .required(true),
        )
        .arg(window_arg())
        .arg(step_arg())
        .arg(threads_arg())
}

fn sites_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("sites").about("Print table of known restriction sites")
}

fn get_str<'a>(matches: &'a ArgMatches, key: &str) -> Result<&'a str> {
    match matches.value_of(key) {
        Some(value) => Ok(value),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_string(matches: &ArgMatches, key: &str) -> Result<String> {
    get_str(matches, key).map(|v| v.into())
}

fn parse_usize(matches: &ArgMatches, key: &str) -> Result<usize> {
    let s = get_str(matches, key)?;

    match usize::from_str_radix(s, 10) {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Invalid --{} ({:?}) value: {}", key, s, err).into()),
    }
}

fn parse_ori(matches: &ArgMatches) -> Result<OriParams> {
    let window = parse_usize(matches, "window")?;
    let step = parse_usize(matches, "step")?;
    if step == 0 {
        return Err("--step must be greater than zero".into());
    }

    Ok(OriParams { window, step })
}

pub fn parse_args() -> Result<Args> {
    let matches = App::new("PlasmidR")
        .version("0.1.0")
        .subcommand(build_command())
        .subcommand(ori_command())
        .subcommand(sites_command())
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("build") {
        Ok(Args::Build(BuildArgs {
            fasta: get_string(matches, "fasta")?,
            design: get_string(matches, "design")?,
            markers: get_string(matches, "markers")?,
            output: matches.value_of("output").map(|s| s.to_string()),
            remove: matches
                .values_of("remove")
                .map(|values| values.map(|s| s.to_string()).collect()),
            id: get_string(matches, "id")?,
            ori: parse_ori(matches)?,
            threads: parse_usize(matches, "threads")?,
        }))
    } else if let Some(matches) = matches.subcommand_matches("ori") {
        Ok(Args::Ori(OriArgs {
            fasta: get_string(matches, "fasta")?,
            ori: parse_ori(matches)?,
            threads: parse_usize(matches, "threads")?,
        }))
    } else if matches.subcommand_matches("sites").is_some() {
        Ok(Args::Sites)
    } else {
        eprintln!("{}", matches.usage());

        Ok(Args::None)
    }
}
