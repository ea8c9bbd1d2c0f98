//! Workspace tasks: `cargo run -p sortviz-xtask -- <task>`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use sortviz::options::EngineOptions;

#[derive(Parser)]
#[command(name = "xtask", about = "sortviz workspace tasks")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Write the options JSON schema (consumed by settings UIs).
    Schema {
        /// Output path.
        #[arg(long, default_value = "assets/options.schema.json")]
        out: PathBuf,
    },
    /// Write a TOML file containing every option at its default.
    DefaultOptions {
        /// Output path.
        #[arg(long, default_value = "assets/presets/default.toml")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().task {
        Task::Schema { out } => {
            let schema = serde_json::to_string_pretty(
                &EngineOptions::json_schema(),
            )?;
            write(&out, &schema)
        }
        Task::DefaultOptions { out } => EngineOptions::default()
            .save(&out)
            .with_context(|| format!("writing {}", out.display())),
    }
}

fn write(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("writing {}", path.display()))
}
