use clap::*;
use std::io::Write;

use cnp::libs::cnv;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("matrix")
        .about("Pairwise distance matrix from a profile file")
        .after_help(
            r###"
Reads named profiles from a FASTA-like file (a `>name` header followed by one
or more comma-separated integer lines) and computes the rearrangement distance
for every pair.

Notes:
* Each pair is evaluated in both directions with zero pruning allowed; the
  symmetric value is the maximum of the two.
* Pairs are computed in parallel.
* Output is a lower-triangular matrix in the fixed-width layout consumed by
  downstream neighbor-joining tools.

Examples:
1. Matrix from a profile file:
   cnp matrix profiles.fa -o dists.txt

2. Pipe profiles in:
   cat profiles.fa | cnp matrix stdin

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input profile file. [stdin] for standard input"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = cnp::writer(args.get_one::<String>("outfile").unwrap());

    let reader = cnp::reader(args.get_one::<String>("infile").unwrap());
    let records = cnv::io::read_profiles(reader)?;
    if records.is_empty() {
        anyhow::bail!("no profiles found in input");
    }
    log::info!("{} profiles loaded", records.len());

    let matrix = cnv::matrix::pairwise(&records)?;
    let out = cnv::matrix::format_lower_triangular(&records, &matrix);

    writer.write_all(out.as_bytes())?;

    Ok(())
}
