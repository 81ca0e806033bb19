//! Reads the line-oriented trajectory format this binary accepts in place
//! of a real MD trajectory codec (xtc/trr): one `natoms` header line, then
//! `nframes` blocks of `natoms` lines of `x y z` floats. Blank lines and
//! `#`-prefixed comments are ignored wherever they appear.

use glam::DVec3;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("failed to read trajectory file: {0}")]
    Io(#[from] std::io::Error),
    #[error("trajectory file is empty")]
    Empty,
    #[error("invalid atom count header {0:?}")]
    BadHeader(String),
    #[error("line {line}: expected \"x y z\", got {content:?}")]
    BadVector { line: usize, content: String },
    #[error("{total} coordinate line(s) is not a multiple of natoms ({natoms})")]
    UnevenFrames { total: usize, natoms: usize },
}

fn significant_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
}

/// Reads a trajectory, returning `frames[frame][atom]`.
pub fn read_traj(path: impl AsRef<Path>) -> Result<Vec<Vec<DVec3>>, TrajectoryError> {
    let text = fs::read_to_string(path)?;
    parse_traj(&text)
}

fn parse_traj(text: &str) -> Result<Vec<Vec<DVec3>>, TrajectoryError> {
    let mut lines = significant_lines(text);

    let (header_line, header) = lines.next().ok_or(TrajectoryError::Empty)?;
    let natoms: usize = header
        .parse()
        .map_err(|_| TrajectoryError::BadHeader(format!("line {header_line}: {header:?}")))?;

    let mut coords = Vec::new();
    for (line, content) in lines {
        let parts: Vec<&str> = content.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(TrajectoryError::BadVector {
                line,
                content: content.to_string(),
            });
        }
        let mut v = [0.0f64; 3];
        for (slot, text) in v.iter_mut().zip(parts) {
            *slot = text.parse().map_err(|_| TrajectoryError::BadVector {
                line,
                content: content.to_string(),
            })?;
        }
        coords.push(DVec3::new(v[0], v[1], v[2]));
    }

    if natoms == 0 || coords.len() % natoms != 0 {
        return Err(TrajectoryError::UnevenFrames {
            total: coords.len(),
            natoms,
        });
    }

    Ok(coords.chunks_exact(natoms).map(<[DVec3]>::to_vec).collect())
}
