//! Runtime configuration, assembled from command-line flags.

use log::LevelFilter;

use crate::error::{Error, Result};
use crate::input::bounded;

pub const DEFAULT_MAX_FACTORIAL: u32 = 1000;
pub const DEFAULT_MAX_DISKS: u32 = 20;

/// Highest accepted `max_factorial`, bounds the recursion depth of the factorial.
pub const FACTORIAL_LIMIT_CEILING: u32 = 10_000;
/// Highest accepted `max_disks`, the move counter is a `u64`.
pub const DISK_LIMIT_CEILING: u32 = 63;

/// Upper bounds on user-supplied sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_factorial: u32,
    pub max_disks: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_factorial: DEFAULT_MAX_FACTORIAL,
            max_disks: DEFAULT_MAX_DISKS,
        }
    }
}

impl Limits {
    pub fn new(max_factorial: u32, max_disks: u32) -> Result<Self> {
        let limits = Limits {
            max_factorial,
            max_disks,
        };
        limits.validate()?;
        Ok(limits)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_factorial == 0 || self.max_factorial > FACTORIAL_LIMIT_CEILING {
            return Err(Error::config(format!(
                "max factorial must be between 1 and {}, got {}",
                FACTORIAL_LIMIT_CEILING, self.max_factorial
            )));
        }
        if self.max_disks == 0 || self.max_disks > DISK_LIMIT_CEILING {
            return Err(Error::config(format!(
                "max disks must be between 1 and {}, got {}",
                DISK_LIMIT_CEILING, self.max_disks
            )));
        }
        Ok(())
    }

    /// Accepts `n` as a factorial argument if it is within `max_factorial`.
    pub fn check_factorial(&self, n: u32) -> Result<u32> {
        Ok(bounded(n, self.max_factorial)?)
    }

    /// Accepts `disks` as a Hanoi disk count if it is within `max_disks`.
    pub fn check_disks(&self, disks: u32) -> Result<u32> {
        Ok(bounded(disks, self.max_disks)?)
    }
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: LevelFilter,
    pub limits: Limits,
}

impl Config {
    /// Builds a configuration from raw flag values. Unknown log levels fall back to `warn`.
    pub fn from_flags(log_level: &str, max_factorial: u32, max_disks: u32) -> Result<Self> {
        Ok(Config {
            log_level: log_level.parse().unwrap_or(LevelFilter::Warn),
            limits: Limits::new(max_factorial, max_disks)?,
        })
    }
}
