use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use facility_flight::cli::{Cli, Command};
use facility_flight::config::FlightConfig;
use facility_flight::simulate::{self, SimulationOptions};
use facility_flight::viewer;

fn load_config(cli: &Cli) -> Result<FlightConfig> {
    match &cli.config {
        Some(path) => {
            info!("Loading flight config from {}", path.display());
            FlightConfig::load(path)
        }
        None => Ok(FlightConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Command::Simulate {
            frames,
            fps,
            mode,
            trace,
            sample_every,
        } => {
            anyhow::ensure!(fps > 0.0 && fps.is_finite(), "--fps must be a positive number");

            let options = SimulationOptions {
                mode,
                frames,
                fps,
                sample_every: if trace.is_some() { sample_every.max(1) } else { 0 },
                focus: None,
            };
            let report = simulate::run(config, &options);

            println!(
                "{} frames at {} fps in {} mode",
                report.frames, report.fps, report.mode
            );
            println!("  final position: {}", report.telemetry);
            println!("  altitude:       {}", report.telemetry.altitude());
            println!(
                "  orbit radius:   {:.1}",
                report.final_radius(config.facility_center)
            );
            println!(
                "  phase:          {:.3} rad ({:.2} revolutions)",
                report.phase, report.revolutions
            );
            println!("  peak speed:     {:.3}", report.max_speed_seen);

            if let Some(path) = trace {
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize trace")?;
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write trace: {}", path.display()))?;
                info!("Trace written to {}", path.display());
            }
        }
        Command::View => viewer::run(config)?,
        Command::Config => println!("{}", config.to_json()?),
    }

    Ok(())
}
