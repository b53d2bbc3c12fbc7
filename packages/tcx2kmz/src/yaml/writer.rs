//! YAML writer for parsed TCX documents.

use crate::error::Result;
use crate::tcx::TrainingCenterDatabase;

/// Nest sequence items under their parent key.
///
/// serde_yaml_ng writes `- ` at the same column as the key that owns the
/// sequence. Every line is shifted right by two columns for each sequence it
/// sits in, which gives `laps:` / `  - calories: 120` / `    tracks: []`.
fn nest_sequences(yaml: &str) -> String {
    // Columns of the `- ` markers of the enclosing sequences, innermost last
    let mut open: Vec<usize> = Vec::new();

    yaml.lines()
        .map(|line| {
            let content = line.trim_start();
            if content.is_empty() {
                return String::new();
            }
            let column = line.len() - content.len();
            let item = content == "-" || content.starts_with("- ");

            open.retain(|&marker| marker < column || (marker == column && item));
            if item && open.last() != Some(&column) {
                open.push(column);
            }
            format!("{:width$}{content}", "", width = column + 2 * open.len())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate a YAML document from a parsed TCX database.
///
/// Absent fields are omitted. The output starts with a `---` marker and has
/// no trailing whitespace.
pub fn generate_yaml(database: &TrainingCenterDatabase) -> Result<String> {
    let yaml_string = serde_yaml_ng::to_string(database)?;
    let yaml_string = nest_sequences(&yaml_string);

    let lines: Vec<&str> = yaml_string.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tcx::{Activity, Lap};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_yaml() {
        let database = TrainingCenterDatabase {
            activities: vec![Activity {
                sport: Some("Running".to_string()),
                laps: vec![Lap {
                    calories: Some(120),
                    ..Lap::default()
                }],
                ..Activity::default()
            }],
        };
        let yaml = generate_yaml(&database).unwrap();

        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("sport: Running"));
        assert!(yaml.contains("calories: 120"));
        assert!(!yaml.contains("creator"));
        assert!(!yaml.contains("distance_meters"));
        assert!(yaml.lines().all(|l| l == l.trim_end()));
    }

    #[test]
    fn test_generate_yaml_empty() {
        let yaml = generate_yaml(&TrainingCenterDatabase::default()).unwrap();
        assert_eq!(yaml, "---\nactivities: []\n");
    }

    #[test]
    fn test_nest_sequences() {
        let input = "activities:\n- sport: Running\n  laps:\n  - calories: 1\n  - calories: 2\nother: x";
        let expected = "activities:\n  - sport: Running\n    laps:\n      - calories: 1\n      - calories: 2\nother: x";
        assert_eq!(nest_sequences(input), expected);
    }
}
