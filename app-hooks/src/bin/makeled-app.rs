//! The LED blinker application hook.

use app_hooks::app;
use app_hooks_lib::{logging, LED_APP_NAME};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init(LED_APP_NAME);
    app::exit_code(app::run_led(std::env::args_os()))
}
