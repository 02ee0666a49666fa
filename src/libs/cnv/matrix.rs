//! Pairwise distance matrices over named profiles.

use anyhow::Context;
use rayon::prelude::*;

use super::distance::distance;

/// Compute the symmetric pairwise distance matrix.
///
/// The underlying metric is directional, so each unordered pair is evaluated
/// in both directions with base pruning allowed and the maximum is kept. The
/// pairs are independent and are fanned out over the rayon thread pool.
///
/// Returns a full `s x s` matrix with zero diagonal.
pub fn pairwise(records: &[(String, Vec<i32>)]) -> anyhow::Result<Vec<Vec<i32>>> {
    let s = records.len();

    let pairs: Vec<(usize, usize)> = (0..s)
        .flat_map(|i| ((i + 1)..s).map(move |j| (i, j)))
        .collect();

    let computed: Vec<(usize, usize, i32)> = pairs
        .into_par_iter()
        .map(|(i, j)| {
            let (name_i, prof_i) = &records[i];
            let (name_j, prof_j) = &records[j];

            let d1 = distance(prof_i, prof_j, true)
                .with_context(|| format!("distance [{}] -> [{}]", name_i, name_j))?;
            let d2 = distance(prof_j, prof_i, true)
                .with_context(|| format!("distance [{}] -> [{}]", name_j, name_i))?;

            Ok((i, j, d1.max(d2)))
        })
        .collect::<anyhow::Result<_>>()?;

    let mut matrix = vec![vec![0; s]; s];
    for (i, j, d) in computed {
        matrix[i][j] = d;
        matrix[j][i] = d;
    }

    Ok(matrix)
}

/// Render the matrix in the fixed-width lower-triangular layout consumed by
/// downstream neighbor-joining tools: a leading taxon count, then one row per
/// name in reverse input order, names left-justified to 10 columns, each
/// distance wrapped in single spaces.
pub fn format_lower_triangular(records: &[(String, Vec<i32>)], matrix: &[Vec<i32>]) -> String {
    let s = records.len();
    let mut out = format!("{}\n", s);

    for i in (0..s).rev() {
        out.push_str(&format!("{:<10}", records[i].0));
        for j in ((i + 1)..s).rev() {
            out.push_str(&format!(" {} ", matrix[i][j]));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<(String, Vec<i32>)> {
        vec![
            ("A".to_string(), vec![4, 4, 4, 4]),
            ("B".to_string(), vec![4, 0, 0, 4]),
            ("C".to_string(), vec![5, 5, 5, 5]),
        ]
    }

    #[test]
    fn test_pairwise() {
        let matrix = pairwise(&sample()).unwrap();
        assert_eq!(matrix[0][1], 4);
        assert_eq!(matrix[0][2], 1);
        assert_eq!(matrix[1][2], 5);
        // Symmetric with zero diagonal
        for i in 0..3 {
            assert_eq!(matrix[i][i], 0);
            for j in 0..3 {
                assert_eq!(matrix[i][j], matrix[j][i]);
            }
        }
    }

    #[test]
    fn test_pairwise_length_mismatch() {
        let records = vec![
            ("A".to_string(), vec![1, 2]),
            ("B".to_string(), vec![1, 2, 3]),
        ];
        assert!(pairwise(&records).is_err());
    }

    #[test]
    fn test_format_lower_triangular() {
        let records = sample();
        let matrix = pairwise(&records).unwrap();
        let out = format_lower_triangular(&records, &matrix);
        assert_eq!(out, "3\nC         \nB          5 \nA          1  4 \n");
    }
}
