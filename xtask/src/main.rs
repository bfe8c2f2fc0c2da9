//! Development tasks for typecast.
//!
//! `cargo run -p xtask -- man [--out DIR]` writes `typecast.1`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate the man page
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => {
            fs::create_dir_all(&out)
                .with_context(|| format!("Failed to create {}", out.display()))?;
            let cmd = typecast::cli::Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut buffer = Vec::new();
            man.render(&mut buffer)?;
            let path = out.join("typecast.1");
            fs::write(&path, buffer)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}
