//! The skeleton mission application hook.

use app_hooks::app;
use app_hooks_lib::{logging, MISSION_APP_NAME};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init(MISSION_APP_NAME);
    app::exit_code(app::run_mission(std::env::args_os()))
}
