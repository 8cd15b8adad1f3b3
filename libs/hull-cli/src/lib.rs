//! # Kinetic Hull CLI
//!
//! Command definitions and the text front-end of the `kinetic-hull` binary.
//!
//! ## Input Formats
//!
//! - `distance`: `N`, then `N` points `x y z`, then `Q`, then `Q` query
//!   points; prints one distance per query
//! - `voronoi`: pairs `x y` until end of input; prints the mean side count
//!   of the bounded Voronoi cells
//! - `facets`: `N`, then `N` points; prints the facets as a JSON array of
//!   id triples

pub mod error;
pub mod input;

use std::io::Write;

use clap::{Parser, Subcommand};
use config::constants::{
    HullConfig, OUTPUT_PRECISION, ORIENTATION_TOLERANCE, PARALLEL_THRESHOLD, PERTURBATION_ANGLE,
    PERTURBATION_JITTER, PERTURBATION_SEED,
};
use hull_queries::voronoi::cell_statistics;
use hull_queries::NearestFacet;
use kinetic_hull::point::indexed;
use kinetic_hull::ConvexHull;
use log::debug;

pub use error::{CliError, CliResult, InputError};
use input::Tokens;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "kinetic-hull")]
#[command(about = "3D convex hull queries by kinetic divide-and-conquer")]
pub struct Cli {
    /// Query to run
    #[command(subcommand)]
    pub command: Command,

    /// Relative orientation tolerance, at most 1e-3 * jitter²
    #[arg(long, global = true, default_value_t = ORIENTATION_TOLERANCE)]
    pub tolerance: f64,

    /// Perturbation rotation angle in radians
    #[arg(long, global = true, default_value_t = PERTURBATION_ANGLE)]
    pub angle: f64,

    /// Relative perturbation jitter
    #[arg(long, global = true, default_value_t = PERTURBATION_JITTER)]
    pub jitter: f64,

    /// Jitter seed
    #[arg(long, global = true, default_value_t = PERTURBATION_SEED)]
    pub seed: u64,

    /// Smallest point range built on two threads
    #[arg(long, global = true, default_value_t = PARALLEL_THRESHOLD)]
    pub parallel_threshold: usize,

    /// Decimal places of printed numbers
    #[arg(long, global = true, default_value_t = OUTPUT_PRECISION)]
    pub precision: usize,
}

/// Available queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Distance from each query point to the nearest facet plane
    Distance,
    /// Mean number of sides of bounded Voronoi cells
    Voronoi,
    /// Hull facets as JSON
    Facets,
}

impl Cli {
    /// Hull configuration described by the flags.
    pub fn config(&self) -> CliResult<HullConfig> {
        Ok(HullConfig::new(self.tolerance, self.angle, self.jitter)?
            .with_seed(self.seed)
            .with_parallel_threshold(self.parallel_threshold))
    }
}

/// Runs `cli.command` on `input` and writes the result to `out`.
pub fn run(cli: &Cli, input: &str, out: &mut impl Write) -> CliResult<()> {
    let config = cli.config()?;
    let mut tokens = Tokens::new(input);
    let precision = cli.precision;

    match cli.command {
        Command::Distance => {
            let positions = tokens.counted_points("point count")?;
            let nearest = NearestFacet::build(&positions, &config)?;
            let queries = tokens.counted_points("query count")?;
            debug!("{} queries against {} facets", queries.len(), nearest.len());
            for query in queries {
                match nearest.distance(query)? {
                    Some(distance) => writeln!(out, "{distance:.precision$}")?,
                    None => writeln!(out, "inf")?,
                }
            }
        }
        Command::Voronoi => {
            let sites = tokens.sites()?;
            let stats = cell_statistics(&sites, &config)?;
            writeln!(out, "{:.precision$}", stats.mean_sides())?;
        }
        Command::Facets => {
            let positions = tokens.counted_points("point count")?;
            let hull = ConvexHull::build(&indexed(&positions), &config)?;
            serde_json::to_writer(&mut *out, hull.facets())?;
            writeln!(out)?;
        }
    }
    Ok(())
}
