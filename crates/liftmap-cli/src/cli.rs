//! Command-line argument parsing for liftmap

use clap::{Parser, ValueEnum};
use liftmap_export::{DEFAULT_COORDS_NAME, DEFAULT_MAPPING_NAME};
use liftmap_space::TraversalPolicy;
use std::path::PathBuf;

/// Map every cell of a toroidal grid to its nearest elevator
#[derive(Parser, Debug)]
#[command(name = "liftmap")]
#[command(author, version, about = "Map every cell of a toroidal grid to its nearest elevator", long_about = None)]
pub struct Cli {
    /// Elevator list: an `X,Y` header followed by one `x,y` line per elevator
    #[arg(value_name = "ELEVATORS")]
    pub elevators: PathBuf,

    /// Existing simulator configuration to append to
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Grid width
    #[arg(value_name = "X_SIZE", value_parser = clap::value_parser!(u32).range(1..))]
    pub x_size: u32,

    /// Grid height
    #[arg(value_name = "Y_SIZE", value_parser = clap::value_parser!(u32).range(1..))]
    pub y_size: u32,

    /// Order in which equally near elevators are preferred
    #[arg(short, long, value_enum, default_value = "middle-out")]
    pub policy: PolicyArg,

    /// Name of the appended coordinate statement
    #[arg(long, value_name = "NAME", default_value = DEFAULT_COORDS_NAME)]
    pub coords_name: String,

    /// Name of the appended mapping statement
    #[arg(long, value_name = "NAME", default_value = DEFAULT_MAPPING_NAME)]
    pub mapping_name: String,

    /// Do not print the mapping drawing
    #[arg(long)]
    pub no_visualize: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    /// Start at the diagonal of each ring and alternate outwards
    MiddleOut,
    /// Start at the pure +y offset of each ring
    PrioritizeY,
}

impl From<PolicyArg> for TraversalPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::MiddleOut => TraversalPolicy::MiddleOut,
            PolicyArg::PrioritizeY => TraversalPolicy::PrioritizeY,
        }
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    ///
    /// Logs go to stderr; stdout carries only the drawing.
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_arguments() {
        let cli = Cli::parse_from(["liftmap", "lifts.csv", "sim.cfg", "8", "4"]);
        assert_eq!(cli.elevators, PathBuf::from("lifts.csv"));
        assert_eq!(cli.config, PathBuf::from("sim.cfg"));
        assert_eq!((cli.x_size, cli.y_size), (8, 4));
        assert_eq!(cli.policy, PolicyArg::MiddleOut);
        assert_eq!(cli.coords_name, "elevatorcoords");
        assert_eq!(cli.mapping_name, "elevatormapping");
        assert!(!cli.no_visualize);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn parses_options() {
        let cli = Cli::parse_from([
            "liftmap",
            "lifts.csv",
            "sim.cfg",
            "3",
            "5",
            "--policy",
            "prioritize-y",
            "--coords-name",
            "lc",
            "--mapping-name",
            "lm",
            "--no-visualize",
            "-vv",
        ]);
        assert_eq!(cli.policy, PolicyArg::PrioritizeY);
        assert_eq!(TraversalPolicy::from(cli.policy), TraversalPolicy::PrioritizeY);
        assert_eq!(cli.coords_name, "lc");
        assert_eq!(cli.mapping_name, "lm");
        assert!(cli.no_visualize);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_zero_dimension() {
        assert!(Cli::try_parse_from(["liftmap", "a", "b", "0", "3"]).is_err());
        assert!(Cli::try_parse_from(["liftmap", "a", "b", "3", "0"]).is_err());
    }

    #[test]
    fn rejects_non_numeric_dimension() {
        assert!(Cli::try_parse_from(["liftmap", "a", "b", "three", "3"]).is_err());
        assert!(Cli::try_parse_from(["liftmap", "a", "b", "-1", "3"]).is_err());
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["liftmap", "a", "b", "2", "2", "--policy", "random"]).is_err());
    }

    #[test]
    fn requires_all_positionals() {
        assert!(Cli::try_parse_from(["liftmap", "a", "b", "2"]).is_err());
    }

    #[test]
    fn policy_names_match_library() {
        for arg in PolicyArg::value_variants() {
            let name = arg.to_possible_value().unwrap();
            assert_eq!(name.get_name(), TraversalPolicy::from(*arg).name());
        }
    }
}
