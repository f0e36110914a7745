//! zerolith - Resonance Engine CLI
//!
//! Refracts a text prompt through the lattice and prints the core value.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zerolith::{export_cypher_dump, EngineConfig, LatticeSnapshot, ResonanceEngine, NOMINAL_NODE_COUNT};

#[derive(Parser)]
#[command(name = "zerolith")]
#[command(about = "Refract a prompt through the resonance lattice")]
struct Cli {
    /// Prompt to refract
    #[arg(default_value = "The universe breathes through geometry")]
    prompt: String,

    /// Resonance rounds (overrides the config file)
    #[arg(short, long)]
    steps: Option<usize>,

    /// JSON engine configuration file
    #[arg(short, long, env = "ZEROLITH_CONFIG")]
    config: Option<String>,

    /// Dump the final lattice state after the report
    #[arg(long, value_enum)]
    export: Option<ExportFormat>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Cypher,
    Json,
}

fn main() -> Result<()> {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,zerolith=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {path}"))?;
            EngineConfig::from_json(&json)?
        }
        None => EngineConfig::default(),
    };
    if let Some(steps) = cli.steps {
        config.refraction_steps = steps;
    }

    let mut engine = ResonanceEngine::with_config(config)?;
    println!("ZerolithSingularity Engine Initialized");
    println!(
        "Total nodes loaded: {} ({} distinct)",
        NOMINAL_NODE_COUNT,
        engine.lattice().len()
    );

    let report = engine.refract(&cli.prompt);
    print!("{report}");
    println!("\nFinal Refraction Output: {:.6}", report.core);

    match cli.export {
        Some(ExportFormat::Cypher) => {
            println!();
            export_cypher_dump(&engine, &mut std::io::stdout().lock())?;
        }
        Some(ExportFormat::Json) => {
            println!();
            println!("{}", LatticeSnapshot::capture(&engine).to_json()?);
        }
        None => {}
    }

    Ok(())
}
