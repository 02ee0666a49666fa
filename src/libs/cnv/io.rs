//! Reading copy-number profiles.
//!
//! Profiles travel either as a bare comma-separated list on the command line
//! or in a FASTA-like file: a `>name` header line followed by one or more
//! comma-separated integer lines (continuation lines are concatenated).

use std::io::BufRead;

use anyhow::Context;

/// Parse a comma-separated list of copy counts, e.g. `4,0,3`.
pub fn parse_profile(s: &str) -> anyhow::Result<Vec<i32>> {
    s.split(',')
        .map(|field| {
            field
                .trim()
                .parse::<i32>()
                .with_context(|| format!("invalid copy number [{}]", field))
        })
        .collect()
}

/// Read named profiles from a FASTA-like stream.
///
/// Records keep their input order; duplicate names are not merged.
pub fn read_profiles(reader: impl BufRead) -> anyhow::Result<Vec<(String, Vec<i32>)>> {
    let mut records: Vec<(String, String)> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix('>') {
            records.push((name.to_string(), String::new()));
        } else if let Some((_, body)) = records.last_mut() {
            body.push_str(line);
        }
        // Lines before the first header are ignored
    }

    records
        .into_iter()
        .map(|(name, body)| {
            let profile = parse_profile(&body)
                .with_context(|| format!("while reading profile [{}]", name))?;
            Ok((name, profile))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        assert_eq!(parse_profile("4,0,3").unwrap(), vec![4, 0, 3]);
        assert_eq!(parse_profile(" 1 , 2 ").unwrap(), vec![1, 2]);
        assert_eq!(parse_profile("7").unwrap(), vec![7]);
        assert!(parse_profile("1,x,3").is_err());
        assert!(parse_profile("").is_err());
    }

    #[test]
    fn test_read_profiles() {
        let input = ">A\n4,4,4,4\n>B\n4,0,\n0,4\n>C\n5,5,5,5\n";
        let records = read_profiles(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], ("A".to_string(), vec![4, 4, 4, 4]));
        // Continuation lines are concatenated
        assert_eq!(records[1], ("B".to_string(), vec![4, 0, 0, 4]));
        assert_eq!(records[2].0, "C");
    }

    #[test]
    fn test_read_profiles_bad_value() {
        let input = ">A\n4,four,4\n";
        assert!(read_profiles(input.as_bytes()).is_err());
    }
}
