// Warehouse robot push simulation.
// Map tiles: '#' wall, '.' floor, 'O' box, '@' robot; moves: '^' '>' 'v' '<'.
// With --wide every tile is doubled horizontally and boxes become '[]'.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use warehouse_push::console_interface::{read_puzzle, render_warehouse_to_string};
use warehouse_push::core::{BoxWidth, simulate};
use warehouse_push::models::SimulationReport;

#[derive(Debug, Parser)]
#[command(about = "Simulate a robot pushing boxes around a warehouse")]
struct CliArgs {
    /// Puzzle file: map, blank line, move list
    #[arg(default_value = "example.txt")]
    input_path: PathBuf,
    /// Boxes are double wide
    #[arg(long)]
    wide: bool,
    /// Log every move
    #[arg(long)]
    debug: bool,
    /// Print a JSON report instead of the final map
    #[arg(long)]
    json: bool,
    /// Skip printing the final map
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let default_level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let box_width = if args.wide {
        BoxWidth::Double
    } else {
        BoxWidth::Single
    };
    let (mut warehouse, moves) = read_puzzle(&args.input_path, box_width)?;

    let stats = simulate(&mut warehouse, &moves).with_context(|| {
        format!(
            "Simulation of puzzle file({}) hit a broken invariant.",
            args.input_path.display()
        )
    })?;
    let report = SimulationReport::new(&warehouse, stats);

    if args.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    if !args.quiet {
        print!("{}", render_warehouse_to_string(&warehouse));
        println!();
    }
    println!("Sum of boxes' GPS coordinates: {}", report.gps_sum);

    Ok(())
}
