//! Run levels passed to a hook by the application service.

use crate::error::HookError;
use std::fmt;
use std::str::FromStr;

/// The lifecycle event a hook was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunLevel {
    OnBoot,
    OnCommand,
    OnStop,
}

impl RunLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RunLevel::OnBoot => "OnBoot",
            RunLevel::OnCommand => "OnCommand",
            RunLevel::OnStop => "OnStop",
        }
    }
}

impl FromStr for RunLevel {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OnBoot" => Ok(RunLevel::OnBoot),
            "OnCommand" => Ok(RunLevel::OnCommand),
            "OnStop" => Ok(RunLevel::OnStop),
            other => Err(HookError::UnknownRunLevel(other.to_string())),
        }
    }
}

impl fmt::Display for RunLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("OnBoot", RunLevel::OnBoot)]
    #[case("OnCommand", RunLevel::OnCommand)]
    #[case("OnStop", RunLevel::OnStop)]
    fn parses_known_run_levels(#[case] input: &str, #[case] expected: RunLevel) {
        let level: RunLevel = input.parse().unwrap();
        assert_eq!(level, expected);
        assert_eq!(level.to_string(), input);
    }

    #[rstest]
    #[case("onboot")]
    #[case("ONCOMMAND")]
    #[case("")]
    #[case("OnReboot")]
    fn rejects_unknown_run_levels(#[case] input: &str) {
        let err = input.parse::<RunLevel>().unwrap_err();
        assert!(matches!(err, HookError::UnknownRunLevel(ref s) if s == input));
    }
}
