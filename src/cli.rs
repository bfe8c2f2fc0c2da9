//! Command line definitions.
//!
//! Lives in the library so `xtask` can generate the man page from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string with git SHA for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("TYPECAST_BUILD_DATE"),
    ")"
);

/// Version string for official builds.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TYPECAST_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(name = "typecast")]
#[command(about = "Play scripted terminal typing animations")]
#[command(version = VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a page in the terminal
    Play {
        /// Page file (.toml or .json)
        page: PathBuf,
        /// Stream plain text instead of the full-screen player
        #[arg(long)]
        plain: bool,
        /// Leave the player as soon as every terminal finished
        #[arg(long)]
        exit_on_finish: bool,
        /// Playback speed multiplier
        #[arg(long, value_parser = parse_speed)]
        speed: Option<f64>,
        #[command(flatten)]
        timing: TimingArgs,
    },
    /// Print the terminals as they look at a point in time
    Render {
        /// Page file (.toml or .json)
        page: PathBuf,
        /// Virtual time in milliseconds (default: after everything finished)
        #[arg(long, value_name = "MS")]
        at: Option<u64>,
        #[command(flatten)]
        timing: TimingArgs,
    },
    /// Print every animation step with its time
    Timeline {
        /// Page file (.toml or .json)
        page: PathBuf,
        #[command(flatten)]
        timing: TimingArgs,
    },
    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file if none exists
    Init,
}

/// Timing overrides shared by the page commands.
#[derive(Debug, Clone, Default, Args)]
pub struct TimingArgs {
    /// Delay before the first line, in milliseconds
    #[arg(long, value_name = "MS")]
    pub start_delay: Option<u64>,
    /// Delay between typed characters, in milliseconds
    #[arg(long, value_name = "MS")]
    pub char_delay: Option<u64>,
    /// Duration of progress lines, in milliseconds
    #[arg(long, value_name = "MS")]
    pub progress_delay: Option<u64>,
}

/// Parse a playback speed: a finite number greater than zero.
fn parse_speed(s: &str) -> Result<f64, String> {
    let speed: f64 = s.parse().map_err(|_| format!("invalid number: {}", s))?;
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(format!("speed must be a positive number, got {}", s))
    }
}
