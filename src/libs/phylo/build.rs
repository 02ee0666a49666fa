use anyhow::Result;
use rand::Rng;

use super::tree::Tree;

/// Build a random rooted binary tree over `nb_leaves` labeled leaves.
///
/// Starts from a star over all leaves, then repeatedly joins two random
/// children of the root under a fresh internal node until the root is
/// binary. Leaves are labeled `L1..Ln` for the default prefix.
pub fn random_binary_tree(
    nb_leaves: usize,
    label_prefix: &str,
    rng: &mut impl Rng,
) -> Result<Tree> {
    let mut tree = Tree::new();
    let root = tree.add_node();
    tree.set_root(root);

    for i in 0..nb_leaves {
        let leaf = tree.add_node();
        tree.get_node_mut(leaf)
            .unwrap()
            .set_name(format!("{}{}", label_prefix, i + 1));
        tree.add_child(root, leaf).map_err(|e| anyhow::anyhow!(e))?;
    }

    while tree.get_node(root).unwrap().children.len() > 2 {
        let k = tree.get_node(root).unwrap().children.len();

        // Two distinct child slots, r1 < r2
        let mut r1 = rng.gen_range(0..k);
        let mut r2 = rng.gen_range(0..k - 1);
        if r2 >= r1 {
            r2 += 1;
        } else {
            std::mem::swap(&mut r1, &mut r2);
        }

        let root_node = tree.get_node_mut(root).unwrap();
        let n2 = root_node.children.remove(r2);
        let n1 = root_node.children.remove(r1);

        let joined = tree.add_node();
        tree.add_child(joined, n1).map_err(|e| anyhow::anyhow!(e))?;
        tree.add_child(joined, n2).map_err(|e| anyhow::anyhow!(e))?;
        tree.add_child(root, joined).map_err(|e| anyhow::anyhow!(e))?;
    }

    Ok(tree)
}
