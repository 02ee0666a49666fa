use clap::*;
use std::io::Write;

use cnp::libs::cnv;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("dist")
        .about("Distance between two copy-number profiles")
        .after_help(
            r###"
Computes the rearrangement distance between two equal-length copy-number
profiles, given as comma-separated integer lists.

Notes:
* Zero positions in the first profile are rejected unless --prune-zeros is
  given, which removes those positions from both profiles first.
* The metric is directional once zeros are involved; compare both directions
  and take the maximum for a symmetric value.

Examples:
1. Distance between two profiles:
   cnp dist 4,4,4 4,0,4

2. Allow zeros in the first profile:
   cnp dist 0,4 4,4 --prune-zeros

"###,
        )
        .arg(
            Arg::new("cnv1")
                .required(true)
                .index(1)
                .help("First (base) profile, comma-separated copy counts"),
        )
        .arg(
            Arg::new("cnv2")
                .required(true)
                .index(2)
                .help("Second (target) profile, comma-separated copy counts"),
        )
        .arg(
            Arg::new("prune_zeros")
                .long("prune-zeros")
                .action(ArgAction::SetTrue)
                .help("Remove zero positions of the first profile from both profiles"),
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

    let base = cnv::io::parse_profile(args.get_one::<String>("cnv1").unwrap())?;
    let target = cnv::io::parse_profile(args.get_one::<String>("cnv2").unwrap())?;

    let dist = cnv::distance(&base, &target, args.get_flag("prune_zeros"))?;

    writer.write_fmt(format_args!("{}\n", dist))?;

    Ok(())
}
