extern crate clap;
use clap::*;

mod cmd_cnp;

fn main() -> anyhow::Result<()> {
    let app = Command::new("cnp")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`cnp` - Copy Number Profile toolkit")
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase verbosity (-v info, -vv debug traces)"),
        )
        .subcommand(cmd_cnp::dist::make_subcommand())
        .subcommand(cmd_cnp::matrix::make_subcommand())
        .subcommand(cmd_cnp::simulate::make_subcommand())
        .after_help(
            r###"Subcommands:

* dist     - Distance between two copy-number profiles
* matrix   - Pairwise distance matrix from a profile file
* simulate - Random tree with evolved copy-number profiles

"###,
        );

    let matches = app.get_matches();

    env_logger::Builder::new()
        .filter_level(match matches.get_count("verbose") {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Check which subcomamnd the user ran...
    match matches.subcommand() {
        Some(("dist", sub_matches)) => cmd_cnp::dist::execute(sub_matches),
        Some(("matrix", sub_matches)) => cmd_cnp::matrix::execute(sub_matches),
        Some(("simulate", sub_matches)) => cmd_cnp::simulate::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
