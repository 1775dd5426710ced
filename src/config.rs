use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::ArgMatches;

use crate::hilbert::{Dimension, DimensionError};

/// Everything the command line decides, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub path: PathBuf,
    pub dimension: Dimension,
    /// Frames per second; zero draws as fast as the surface allows.
    pub frame_rate: f64,
    /// Window pixels per cell side.
    pub scale: u32,
    /// Samples skipped at the start of the file.
    pub skip: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidValue {
        arg: &'static str,
        value: String,
        expected: &'static str,
    },
    Dimension(DimensionError),
    WindowTooLarge { side: u32, scale: u32 },
}

impl ConfigError {
    /// Errors that mean the invocation itself was malformed, as opposed to a
    /// well-formed request the program cannot honour.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ConfigError::InvalidValue { .. } | ConfigError::Dimension(DimensionError::Zero)
        )
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { arg, value, expected } => {
                write!(f, "invalid value '{}' for {}: expected {}", value, arg, expected)
            }
            ConfigError::Dimension(e) => write!(f, "{}", e),
            ConfigError::WindowTooLarge { side, scale } => write!(
                f,
                "a {} cell grid at scale {} does not fit in a window",
                side, scale
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Dimension(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DimensionError> for ConfigError {
    fn from(e: DimensionError) -> Self {
        ConfigError::Dimension(e)
    }
}

fn parse_arg<T: std::str::FromStr>(
    matches: &ArgMatches,
    arg: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = matches.value_of(arg).unwrap_or(default);
    value.parse().map_err(|_| ConfigError::InvalidValue {
        arg,
        value: value.to_string(),
        expected,
    })
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Config, ConfigError> {
        let path = PathBuf::from(matches.value_of_os("file").unwrap_or_default());
        let side: u32 = parse_arg(matches, "dimension", "", "a positive integer")?;
        let dimension = Dimension::new(side)?;

        let frame_rate: f64 = parse_arg(matches, "gfx-rate", "60", "a frame rate in frames per second")?;
        if !frame_rate.is_finite() || frame_rate < 0.0 {
            return Err(ConfigError::InvalidValue {
                arg: "gfx-rate",
                value: frame_rate.to_string(),
                expected: "a frame rate in frames per second",
            });
        }

        let scale: u32 = parse_arg(matches, "scale", "1", "a positive integer")?;
        if scale == 0 {
            return Err(ConfigError::InvalidValue {
                arg: "scale",
                value: scale.to_string(),
                expected: "a positive integer",
            });
        }
        // SDL window sizes are signed ints.
        match side.checked_mul(scale) {
            Some(px) if px <= i32::MAX as u32 => (),
            _ => return Err(ConfigError::WindowTooLarge { side, scale }),
        }

        let skip: u64 = parse_arg(matches, "skip", "0", "a sample count")?;

        Ok(Config { path, dimension, frame_rate, scale, skip })
    }

    /// Time budget of one frame, `None` when unpaced.
    pub fn frame_period(&self) -> Option<Duration> {
        if self.frame_rate == 0.0 {
            None
        } else {
            Some(Duration::new(1, 0).div_f64(self.frame_rate))
        }
    }
}
