//! Defines the command-line interfaces of the hook binaries.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "makeled-app",
    version,
    about = "Application hook that drives the on-board LEDs through the LED-control executable."
)]
pub struct LedCli {
    /// Run level passed by the application service (OnBoot, OnCommand or OnStop).
    #[arg(short, long, value_name = "RUN_LEVEL")]
    pub run: Option<String>,

    /// LED subcommand for OnCommand: on, off, flash or status.
    #[arg(short, long, value_name = "SUBCOMMAND")]
    pub subcommand: Option<String>,

    /// Path to the system configuration file. [default: /home/system/etc/config.json]
    #[arg(short, long, value_name = "CONFIG_PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(
    name = "mission-app",
    version,
    about = "Skeleton mission application hook."
)]
pub struct MissionCli {
    /// Run level passed by the application service (OnBoot, OnCommand or OnStop).
    #[arg(short, long, value_name = "RUN_LEVEL")]
    pub run: Option<String>,

    /// Path to the system configuration file. [default: /home/system/etc/config.json]
    #[arg(short, long, value_name = "CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Arguments forwarded to the OnCommand handler.
    #[arg(value_name = "CMD_ARGS")]
    pub cmd_args: Vec<String>,
}

/// Drops the first standalone `--` after the program name.
///
/// The application service forwards hook arguments behind a `--`; removing it
/// lets them be parsed as regular flags.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if let Some(pos) = args.iter().skip(1).position(|arg| arg == "--") {
        args.remove(pos + 1);
    }
    args
}
