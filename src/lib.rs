pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

use crate::errors::CompareError;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Colorize when stdout is a terminal, honouring `NO_COLOR` and `CLICOLOR_FORCE`
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn apply(self) {
        match self {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => colored::control::unset_override(),
        }
    }
}

/// Parse a depth option value; clap reports the error as a usage error
pub fn parse_depth(value: &str) -> Result<usize, CompareError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|err| CompareError::InvalidArgument {
            name: "depth",
            value: value.to_string(),
            reason: err.to_string(),
        })
}
