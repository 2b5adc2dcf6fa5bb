#![deny(unsafe_code)]
//! CLI binary for the phosphor demo suite.
//!
//! Subcommands:
//! - `run <demo>` — drive a demo headless for N ticks, write a PNG of the
//!   final frame
//! - `list` — print available demos and palettes

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use phosphor_core::{Generator, Palette};
use phosphor_demos::DemoKind;
use phosphor_runtime::{FixedStepClock, Scheduler, TickBudget};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "phosphor", about = "Palette-quantized demo suite")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a demo headless and write a PNG of the final frame.
    Run {
        /// Demo name (e.g. "fire").
        demo: String,

        /// Number of simulation ticks.
        #[arg(short, long, default_value_t = 600)]
        ticks: u64,

        /// Milliseconds of simulated time per tick.
        #[arg(long, default_value_t = 16)]
        dt_ms: u64,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Palette name (inferno, phosphor); defaults per demo.
        #[arg(short, long)]
        palette: Option<String>,

        /// Demo parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// List available demos and palettes.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let demos = DemoKind::list_demos();
            let palettes = Palette::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "demos": demos,
                    "palettes": palettes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Demos:");
                for name in demos {
                    println!("  {name}");
                }
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
            }
        }
        Command::Run {
            demo,
            ticks,
            dt_ms,
            seed,
            palette,
            params,
            output,
        } => {
            if ticks == 0 {
                return Err(CliError::Input("ticks must be at least 1".into()));
            }
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let palette = palette
                .map(|name| Palette::from_name(&name))
                .transpose()
                .map_err(|e| CliError::Input(e.to_string()))?;

            log::info!("initialize demo: {demo}");
            let mut kind = DemoKind::from_name(&demo, seed, palette, &params)?;
            let (width, height) = kind.surface_size();
            let mut surface = phosphor_core::BufferSurface::new(width, height)?;

            let mut scheduler = Scheduler::new();
            let mut clock = FixedStepClock::new(dt_ms);
            let mut input = TickBudget::new(ticks);
            scheduler.run(&mut clock, &mut input, &mut kind, &mut surface)?;

            phosphor_demos::snapshot::write_png(&surface, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "demo": demo,
                    "width": width,
                    "height": height,
                    "ticks": scheduler.ticks(),
                    "seed": seed,
                    "params": kind.params(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "ran {demo} ({width}x{height}, {} ticks, seed {seed}) -> {}",
                    scheduler.ticks(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
