use crate::cli::{normalize_args, LedCli, MissionCli};
use anyhow::Context;
use app_hooks_lib::config::Config;
use app_hooks_lib::hooks::{dispatch, HookInvocation, LedHook, MissionHook};
use app_hooks_lib::{LED_APP_NAME, MISSION_APP_NAME};
use clap::Parser;
use log::{debug, error, info};
use std::ffi::OsString;
use std::process::ExitCode;

pub fn run_led<I, T>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    info!("Entering main LED logic");

    let args = normalize_args(args);
    info!("args are {:?}", display_args(&args));

    let cli = LedCli::parse_from(args);
    debug!("parsed {cli:?}");

    let config = Config::load(LED_APP_NAME, cli.config.as_deref())
        .context("Could not load the LED app configuration")?;
    let invocation = HookInvocation::parse(cli.run.as_deref(), cli.subcommand, Vec::new())?;

    let hook = LedHook::new(config.led_binary());
    dispatch(&hook, &invocation).map_err(|err| {
        if err.is_led_failure() {
            anyhow::Error::new(err).context("Something went wrong in LED blinker")
        } else {
            err.into()
        }
    })
}

pub fn run_mission<I, T>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let cli = MissionCli::parse_from(args);
    debug!("parsed {cli:?}");

    let config = Config::load(MISSION_APP_NAME, cli.config.as_deref())
        .context("Could not load the mission app configuration")?;
    debug!("configuration section: {}", config.raw);

    let invocation = HookInvocation::parse(cli.run.as_deref(), None, cli.cmd_args)?;
    dispatch(&MissionHook, &invocation)?;
    Ok(())
}

/// Logs a failed run and maps it to exit status 1.
pub fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn display_args(args: &[OsString]) -> Vec<String> {
    args.iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
