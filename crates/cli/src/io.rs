//! Instance-file reading and solution-file writing.
//!
//! One instance file holds a declared point count followed by that many
//! whitespace-separated `x y` integer pairs, pre-sorted by x. The reader
//! never fails the batch over a malformed instance: absence and shape
//! problems are outcomes to skip, and only genuinely unexpected I/O errors
//! propagate.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use sepline::{Line, MAX_POINTS};

/// What reading one instance file yielded. Everything but `Points` is
/// skipped by the batch driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// No file at the instance index.
    Missing,
    /// The declared point count was absent or unreadable.
    NoPoints,
    /// The declared count disagrees with the coordinate pairs present.
    WrongCount,
    /// A well-formed instance: the x-sorted coordinate pairs.
    Points(Vec<(i64, i64)>),
}

pub fn instance_name(index: u32) -> String {
    format!("instance{index:02}.txt")
}

pub fn solution_name(index: u32) -> String {
    format!("greedy_solution{index:02}.txt")
}

/// Read and validate one instance file. At most `MAX_POINTS` coordinate
/// pairs are consumed; anything past that fails the count check.
pub fn read_instance(path: &Path) -> Result<ReadOutcome> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ReadOutcome::Missing),
        Err(e) => {
            return Err(e).with_context(|| format!("reading instance {}", path.display()))
        }
    };
    let mut tokens = text.split_whitespace();
    let declared: usize = match tokens.next().and_then(|t| t.parse().ok()) {
        Some(n) => n,
        None => return Ok(ReadOutcome::NoPoints),
    };
    let mut pts: Vec<(i64, i64)> = Vec::new();
    while pts.len() < MAX_POINTS {
        let Some(xt) = tokens.next() else { break };
        let Some(yt) = tokens.next() else {
            // A dangling x with no y cannot complete a pair.
            return Ok(ReadOutcome::WrongCount);
        };
        let (Ok(x), Ok(y)) = (xt.parse::<i64>(), yt.parse::<i64>()) else {
            return Ok(ReadOutcome::WrongCount);
        };
        pts.push((x, y));
    }
    if pts.len() != declared {
        return Ok(ReadOutcome::WrongCount);
    }
    Ok(ReadOutcome::Points(pts))
}

/// Write a solution file: the line count, then one rendered line per
/// committed line in commitment order.
pub fn write_solution(path: &Path, lines: &[Line]) -> Result<()> {
    let mut out = String::new();
    out.push_str(&format!("{}\n", lines.len()));
    for line in lines {
        out.push_str(&format!("{line}\n"));
    }
    write_with_parents(path, &out)
}

/// Write an instance file in the input format (used by `gen`).
pub fn write_instance(path: &Path, pts: &[(i64, i64)]) -> Result<()> {
    let mut out = String::new();
    out.push_str(&format!("{}\n", pts.len()));
    for &(x, y) in pts {
        out.push_str(&format!("{x} {y}\n"));
    }
    write_with_parents(path, &out)
}

fn write_with_parents(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn file_names_are_zero_padded() {
        assert_eq!(instance_name(3), "instance03.txt");
        assert_eq!(solution_name(42), "greedy_solution42.txt");
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let got = read_instance(&dir.path().join("instance01.txt")).unwrap();
        assert_eq!(got, ReadOutcome::Missing);
    }

    #[test]
    fn unreadable_count_is_no_points() {
        let dir = tempdir().unwrap();
        for contents in ["", "points 0 0"] {
            let path = dir.path().join("i.txt");
            fs::write(&path, contents).unwrap();
            assert_eq!(read_instance(&path).unwrap(), ReadOutcome::NoPoints);
        }
    }

    #[test]
    fn count_mismatch_variants() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("i.txt");
        // Fewer pairs than declared.
        fs::write(&path, "3\n0 0\n1 1\n").unwrap();
        assert_eq!(read_instance(&path).unwrap(), ReadOutcome::WrongCount);
        // More pairs than declared.
        fs::write(&path, "1\n0 0\n1 1\n").unwrap();
        assert_eq!(read_instance(&path).unwrap(), ReadOutcome::WrongCount);
        // Dangling x coordinate.
        fs::write(&path, "2\n0 0\n1\n").unwrap();
        assert_eq!(read_instance(&path).unwrap(), ReadOutcome::WrongCount);
        // Malformed coordinate token.
        fs::write(&path, "2\n0 0\none 1\n").unwrap();
        assert_eq!(read_instance(&path).unwrap(), ReadOutcome::WrongCount);
    }

    #[test]
    fn well_formed_instance() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("i.txt");
        fs::write(&path, "3\n0 5\n2 -1\n7 3\n").unwrap();
        assert_eq!(
            read_instance(&path).unwrap(),
            ReadOutcome::Points(vec![(0, 5), (2, -1), (7, 3)])
        );
    }

    #[test]
    fn solution_file_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/greedy_solution01.txt");
        let lines = vec![Line::vertical(5.0), Line::horizontal(2.5)];
        write_solution(&path, &lines).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "2\nv 5.0\nh 2.5\n");
    }

    #[test]
    fn instance_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gen/instance01.txt");
        let pts = vec![(0, 9), (4, -2), (11, 3)];
        write_instance(&path, &pts).unwrap();
        assert_eq!(read_instance(&path).unwrap(), ReadOutcome::Points(pts));
    }
}
