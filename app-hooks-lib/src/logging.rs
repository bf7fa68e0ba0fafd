//! Process-wide logger setup.

use env_logger::{Builder, Env};
use std::io::Write;

/// Installs an `env_logger` backend that tags every record with `app_name`.
///
/// Logs at `info` unless `RUST_LOG` says otherwise. Calling this twice keeps
/// the first logger.
pub fn init(app_name: &str) {
    let app_name = app_name.to_string();
    let pid = std::process::id();

    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            writeln!(
                buf,
                "{} {}[{}] {}: {}",
                buf.timestamp(),
                app_name,
                pid,
                record.level(),
                record.args()
            )
        })
        .try_init();
}
