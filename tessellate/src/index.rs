//! Reads a simplified `.ndx`-style index file and filters a trajectory down
//! to the selected atoms, mirroring `ndx_get_indx`/`filter_vecs` at the
//! contract level: optional `[ group ]` headers are ignored, the remaining
//! whitespace-separated integers are 1-based atom indices.

use glam::DVec3;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to read index file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {content:?} is not a valid 1-based atom index")]
    BadIndex { line: usize, content: String },
}

/// Reads a `.ndx`-style file, returning 0-based atom indices.
pub fn read_indices(path: impl AsRef<Path>) -> Result<Vec<usize>, IndexError> {
    let text = fs::read_to_string(path)?;
    parse_indices(&text)
}

fn parse_indices(text: &str) -> Result<Vec<usize>, IndexError> {
    let mut indices = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
            continue;
        }
        for token in line.split_whitespace() {
            let one_based: usize = token.parse().map_err(|_| IndexError::BadIndex {
                line: i + 1,
                content: token.to_string(),
            })?;
            if one_based == 0 {
                return Err(IndexError::BadIndex {
                    line: i + 1,
                    content: token.to_string(),
                });
            }
            indices.push(one_based - 1);
        }
    }
    Ok(indices)
}

/// Selects `indices` (0-based) out of every frame of `trajectory`.
pub fn filter_traj(trajectory: &[Vec<DVec3>], indices: &[usize]) -> Vec<Vec<DVec3>> {
    trajectory
        .iter()
        .map(|frame| indices.iter().map(|&i| frame[i]).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_indices_ignoring_group_headers() {
        let text = "[ protein ]\n1 2 3\n# comment\n4\n";
        let indices = parse_indices(text).unwrap();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn filter_selects_only_named_atoms() {
        let frame = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
        ];
        let filtered = filter_traj(&[frame], &[0, 2]);
        assert_eq!(filtered[0], vec![DVec3::new(0.0, 0.0, 0.0), DVec3::new(2.0, 0.0, 0.0)]);
    }

    #[test]
    fn rejects_zero_as_non_1_based() {
        assert!(matches!(parse_indices("0\n"), Err(IndexError::BadIndex { .. })));
    }
}
