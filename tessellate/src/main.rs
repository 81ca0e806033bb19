//! Drives both area-estimation engines over a point trajectory: projects
//! each frame to 2-D and triangulates it, and separately folds every frame
//! into a heightmap grid.

mod index;
mod trajectory;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use glam::DVec2;
use grid::{Grid, WeightKernel};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WeightArg {
    Linear,
    Square,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Delaunay,
    Grid,
    Both,
}

/// Computes interface/membrane surface area from a point trajectory.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Trajectory file: a `natoms` header line followed by `x y z` blocks.
    trajectory: PathBuf,

    /// Optional `.ndx`-style atom index filter.
    #[arg(long)]
    index: Option<PathBuf>,

    /// Grid cell width, in the trajectory's length units.
    #[arg(long, default_value_t = 1.0)]
    cell_width: f64,

    /// Weight kernel used by the grid engine.
    #[arg(long, value_enum, default_value_t = WeightArg::Linear)]
    weight: WeightArg,

    /// Which engine(s) to run.
    #[arg(long, value_enum, default_value_t = Mode::Both)]
    mode: Mode,

    /// File stem for diagnostic dumps (writes `<stem>.node`/`.ele` and/or
    /// `<stem>.grid.txt`, depending on `--mode`).
    #[arg(long)]
    dump: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    delaunay::init();

    let cli = Cli::parse();

    let mut trajectory = trajectory::read_traj(&cli.trajectory)
        .with_context(|| format!("reading trajectory {:?}", cli.trajectory))?;

    if let Some(index_path) = &cli.index {
        let indices = index::read_indices(index_path)
            .with_context(|| format!("reading index file {index_path:?}"))?;
        trajectory = index::filter_traj(&trajectory, &indices);
    }

    if matches!(cli.mode, Mode::Delaunay | Mode::Both) {
        run_delaunay(&trajectory, cli.dump.as_deref())?;
    }

    if matches!(cli.mode, Mode::Grid | Mode::Both) {
        run_grid(&trajectory, cli.cell_width, cli.weight, cli.dump.as_deref())?;
    }

    Ok(())
}

fn project_xy(frame: &[glam::DVec3]) -> Vec<DVec2> {
    frame.iter().map(|p| DVec2::new(p.x, p.y)).collect()
}

fn run_delaunay(trajectory: &[Vec<glam::DVec3>], dump: Option<&std::path::Path>) -> anyhow::Result<()> {
    let areas: Vec<f64> = trajectory
        .iter()
        .map(|frame| delaunay::triangulate(project_xy(frame)).surface_area())
        .collect();

    for (frame, area) in areas.iter().enumerate() {
        println!("frame {frame}: delaunay surface area = {area}");
    }

    if let (Some(stem), Some(frame)) = (dump, trajectory.first()) {
        let tri = delaunay::triangulate(project_xy(frame));
        tri.write_node_ele(stem).context("writing delaunay diagnostic dump")?;
    }

    Ok(())
}

fn run_grid(
    trajectory: &[Vec<glam::DVec3>],
    cell_width: f64,
    weight: WeightArg,
    dump: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    let kernel = match weight {
        WeightArg::Linear => WeightKernel::Linear,
        WeightArg::Square => WeightKernel::Square,
    };
    let grid = Grid::compute(trajectory, cell_width, kernel);

    println!("grid surface area = {}", grid.surface_area);
    println!("grid area per particle = {}", grid.area_per_particle);
    println!("empty columns = {}", grid.num_empty);

    if let Some(stem) = dump {
        grid.write_diagnostic(stem.with_extension("grid.txt"))
            .context("writing grid diagnostic dump")?;
    }

    Ok(())
}
