use clap::*;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

use cnp::libs::cnv::sim::{self, EventModel};
use cnp::libs::phylo::{build, Node, Tree};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("simulate")
        .about("Random tree with evolved copy-number profiles")
        .after_help(
            r###"
Draws a random rooted binary tree, assigns the root a random profile, and
evolves it along every branch with random amplification/deletion events over
random segment ranges. Positions at zero stay at zero.

Output sections:
* <TREE>      - Newick with leaf labels only
* <TREE_FULL> - Newick with full labels (leaf name + profile, or profile)
* <CLADES>    - leaf set of every node, preorder
* <LEAVES>    - leaf profiles in FASTA-like form, ready for `cnp matrix`

Examples:
1. Default simulation:
   cnp simulate

2. Reproducible run with a bigger tree:
   cnp simulate --leaves 20 --length 50 --seed 42 -o sim.txt

"###,
        )
        .arg(
            Arg::new("length")
                .long("length")
                .num_args(1)
                .default_value("10")
                .value_parser(value_parser!(usize))
                .help("Number of segments per profile"),
        )
        .arg(
            Arg::new("leaves")
                .long("leaves")
                .num_args(1)
                .default_value("5")
                .value_parser(value_parser!(u32).range(2..))
                .help("Number of leaves in the tree"),
        )
        .arg(
            Arg::new("max_events")
                .long("max-events")
                .num_args(1)
                .default_value("5")
                .value_parser(value_parser!(u32))
                .help("Maximum number of events per branch"),
        )
        .arg(
            Arg::new("prob_deletion")
                .long("prob-deletion")
                .num_args(1)
                .default_value("0.5")
                .value_parser(value_parser!(f64))
                .help("Probability that an event is a deletion"),
        )
        .arg(
            Arg::new("root_value")
                .long("root-value")
                .num_args(1)
                .default_value("4")
                .value_parser(value_parser!(i32))
                .help("Copy count the root profile starts from"),
        )
        .arg(
            Arg::new("root_delta")
                .long("root-delta")
                .num_args(1)
                .default_value("2")
                .value_parser(value_parser!(i32))
                .help("Maximum +/- deviation of root positions from the start value"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .num_args(1)
                .value_parser(value_parser!(u64))
                .help("RNG seed for reproducible runs"),
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

    let length = *args.get_one::<usize>("length").unwrap();
    let leaves = *args.get_one::<u32>("leaves").unwrap() as usize;
    let model = EventModel {
        max_events: *args.get_one::<u32>("max_events").unwrap(),
        prob_deletion: *args.get_one::<f64>("prob_deletion").unwrap(),
    };
    let root_value = *args.get_one::<i32>("root_value").unwrap();
    let root_delta = *args.get_one::<i32>("root_delta").unwrap();

    let mut rng = match args.get_one::<u64>("seed") {
        Some(&seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut tree = build::random_binary_tree(leaves, "L", &mut rng)?;
    let root = tree.get_root().unwrap();
    let root_profile = sim::random_root_profile(length, root_value, root_delta, &mut rng);
    log::info!(
        "simulating {} leaves, root profile {}",
        leaves,
        root_profile.iter().join(",")
    );

    // Evolve profiles root-down; preorder guarantees parents come first
    let mut profiles: Vec<Vec<i32>> = vec![Vec::new(); tree.len()];
    for id in tree.preorder(root) {
        let profile = match tree.get_node(id).unwrap().parent {
            None => root_profile.clone(),
            Some(parent) => sim::evolve(&profiles[parent], &model, &mut rng),
        };

        let profile_label = profile.iter().join("-");
        let node = tree.get_node_mut(id).unwrap();
        let label = match node.name.take() {
            Some(name) => format!("{}__{}", name, profile_label),
            None => profile_label,
        };
        node.name = Some(label);

        profiles[id] = profile;
    }

    writer.write_all(render(&tree, &profiles).as_bytes())?;

    Ok(())
}

/// Leaf name without the attached profile
fn display_name(node: &Node) -> String {
    node.name
        .as_deref()
        .unwrap_or("")
        .split("__")
        .next()
        .unwrap_or("")
        .to_string()
}

fn render(tree: &Tree, profiles: &[Vec<i32>]) -> String {
    let root = tree.get_root().unwrap();
    let mut out = String::new();

    out.push_str("<TREE>\n");
    out.push_str(&tree.to_newick_with(|n| {
        if n.is_leaf() {
            Some(display_name(n))
        } else {
            None
        }
    }));
    out.push_str("\n</TREE>\n");

    out.push_str("<TREE_FULL>\n");
    out.push_str(&tree.to_newick());
    out.push_str("\n</TREE_FULL>\n");

    out.push_str("<CLADES>\n");
    for id in tree.preorder(root) {
        let clade = tree
            .leaves(id)
            .iter()
            .map(|&leaf| display_name(tree.get_node(leaf).unwrap()))
            .join(",");
        out.push_str(&clade);
        out.push('\n');
    }
    out.push_str("</CLADES>\n");

    out.push_str("<LEAVES>\n");
    for &leaf in &tree.leaves(root) {
        out.push_str(&format!(
            ">{}\n{}\n",
            display_name(tree.get_node(leaf).unwrap()),
            profiles[leaf].iter().join(",")
        ));
    }
    out.push_str("</LEAVES>\n");

    out
}
