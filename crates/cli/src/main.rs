use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

use sepline::rand::{draw_instance, InstanceCfg, PointCount, ReplayToken};
use sepline::{separate, PointSet, MAX_POINTS};

mod io;
mod report;

use io::ReadOutcome;
use report::{BatchSummary, InstanceReport};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Greedy axis-parallel point separation runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Process instance files over an index range and write solution files
    Batch {
        #[arg(long, default_value = "input")]
        input: PathBuf,
        #[arg(long, default_value = "output_greedy")]
        out: PathBuf,
        /// Exclusive upper bound on instance indices (scan starts at 1)
        #[arg(long, default_value_t = MAX_POINTS as u32)]
        max_index: u32,
    },
    /// Solve a single instance file and print the lines
    Solve {
        #[arg(long)]
        input: PathBuf,
    },
    /// Generate random instance files in the input format
    Gen {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 1)]
        count: u32,
        #[arg(long, default_value_t = 20)]
        points: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Batch {
            input,
            out,
            max_index,
        } => batch(&input, &out, max_index).map(|_| ()),
        Action::Solve { input } => solve(&input),
        Action::Gen {
            out,
            count,
            points,
            seed,
        } => gen(&out, count, points, seed),
    }
}

/// Process every instance index in `1..max_index`; skip conditions never
/// stop the batch. Returns the number of instances processed.
fn batch(input: &Path, out: &Path, max_index: u32) -> Result<u32> {
    let mut summary = BatchSummary::default();
    for index in 1..max_index {
        let path = input.join(io::instance_name(index));
        match io::read_instance(&path)? {
            ReadOutcome::Missing => {
                tracing::info!(index, "no instance file");
            }
            ReadOutcome::NoPoints => {
                tracing::warn!(index, "no points in instance");
            }
            ReadOutcome::WrongCount => {
                tracing::warn!(index, "incorrect number of points");
            }
            ReadOutcome::Points(pts) => {
                let ps = PointSet::from_sorted_by_x(&pts);
                let lines = separate(&ps);
                io::write_solution(&out.join(io::solution_name(index)), &lines)?;
                tracing::info!(index, points = ps.len(), lines = lines.len(), "solved");
                summary.instances.push(InstanceReport {
                    index,
                    points: ps.len(),
                    lines: lines.len(),
                });
                summary.processed += 1;
            }
        }
    }
    let summary_path = report::write_summary(out, &summary)?;
    tracing::info!(
        processed = summary.processed,
        summary = %summary_path.display(),
        "batch done"
    );
    Ok(summary.processed)
}

fn solve(input: &Path) -> Result<()> {
    match io::read_instance(input)? {
        ReadOutcome::Missing => bail!("no instance file at {}", input.display()),
        ReadOutcome::NoPoints => bail!("no points in {}", input.display()),
        ReadOutcome::WrongCount => bail!("incorrect number of points in {}", input.display()),
        ReadOutcome::Points(pts) => {
            let ps = PointSet::from_sorted_by_x(&pts);
            let lines = separate(&ps);
            println!("{}", lines.len());
            for line in &lines {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn gen(out: &Path, count: u32, points: usize, seed: u64) -> Result<()> {
    let cfg = InstanceCfg {
        count: PointCount::Fixed(points),
        ..InstanceCfg::default()
    };
    for index in 1..=count {
        let Some(pts) = draw_instance(
            cfg,
            ReplayToken {
                seed,
                index: index as u64,
            },
        ) else {
            bail!("coordinate range too small for {points} distinct points");
        };
        let path = out.join(io::instance_name(index));
        io::write_instance(&path, &pts)?;
        tracing::info!(index, points, file = %path.display(), "generated");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn batch_skips_and_solves() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input");
        let out = dir.path().join("output_greedy");
        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("instance01.txt"), "2\n0 0\n10 10\n").unwrap();
        // Declared count disagrees: skipped, batch continues.
        fs::write(input.join("instance02.txt"), "5\n0 0\n").unwrap();
        fs::write(input.join("instance04.txt"), "3\n0 0\n5 1\n10 2\n").unwrap();

        let processed = batch(&input, &out, 10).unwrap();
        assert_eq!(processed, 2);
        assert_eq!(
            fs::read_to_string(out.join("greedy_solution01.txt")).unwrap(),
            "1\nv 5.0\n"
        );
        assert_eq!(
            fs::read_to_string(out.join("greedy_solution04.txt")).unwrap(),
            "2\nv 2.5\nv 7.5\n"
        );
        assert!(!out.join("greedy_solution02.txt").exists());
        assert!(out.join("summary.json").exists());
    }

    #[test]
    fn gen_then_batch_roundtrip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input");
        let out = dir.path().join("out");
        gen(&input, 3, 12, 7).unwrap();
        let processed = batch(&input, &out, 10).unwrap();
        assert_eq!(processed, 3);
    }
}
