// cli.rs - Command-line interface configuration
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::flight::FlightMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "facility-flight")]
#[command(about = "Camera flight controller for the research facility scene", long_about = None)]
pub struct Cli {
    /// Flight tuning file (JSON); defaults are used for missing fields
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fly the camera headless at a fixed frame rate and report where it ends up
    Simulate {
        /// Number of frames to simulate
        #[arg(long, default_value_t = 10_000)]
        frames: u64,

        /// Simulated frame rate
        #[arg(long, default_value_t = 60.0)]
        fps: f32,

        /// Flight pattern: circuit, hover or inspection
        #[arg(long, default_value = "circuit")]
        mode: FlightMode,

        /// Write a per-frame trace as JSON to this file
        #[arg(long)]
        trace: Option<PathBuf>,

        /// Trace every Nth frame
        #[arg(long, default_value_t = 60)]
        sample_every: u64,
    },
    /// Open a window driven by live input; the title shows the HUD
    View,
    /// Print the effective configuration as JSON
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simulate_defaults() {
        let cli = Cli::try_parse_from(["facility-flight", "simulate"]).unwrap();
        match cli.command {
            Command::Simulate {
                frames, fps, mode, trace, ..
            } => {
                assert_eq!(frames, 10_000);
                assert_eq!(fps, 60.0);
                assert_eq!(mode, FlightMode::Circuit);
                assert!(trace.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_mode_and_global_config() {
        let cli = Cli::try_parse_from([
            "facility-flight",
            "simulate",
            "--mode",
            "inspection",
            "--config",
            "flight.json",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("flight.json")));
        assert!(matches!(
            cli.command,
            Command::Simulate {
                mode: FlightMode::Inspection,
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["facility-flight", "simulate", "--mode", "barrel-roll"]).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
