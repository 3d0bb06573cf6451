use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

bitflags! {
    /// Log category mask.
    ///
    /// A relay is configured with one mask and every raw message is tagged with
    /// a requested mask; the message passes only when every requested bit is
    /// enabled on the relay. Unnamed bits are kept as-is.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LogLevel: u32 {
        const ERROR = 0x1;
        const REPLICATION = 0x2;
        const DEBUG = 0x4;
        const ALL = Self::ERROR.bits() | Self::REPLICATION.bits() | Self::DEBUG.bits();

        const _ = !0;
    }
}

impl LogLevel {
    /// Returns `true` when this mask enables every bit of `requested`.
    ///
    /// An empty request is always covered.
    pub fn covers(self, requested: LogLevel) -> bool {
        self.bits() & requested.bits() == requested.bits()
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::ERROR
    }
}

// Masks travel as plain integers, never as flag names.
impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(LogLevel::from_bits_retain(bits))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid log level '{input}'. Valid levels: error, replication, debug, all or a numeric mask")]
pub struct ParseLevelError {
    pub input: String,
}

/// Parses `"error|debug"`, `"all"`, `"0x5"` or `"5"`.
///
/// Names are case-insensitive and may be joined with `|`, `,` or `+`.
impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseLevelError {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        if let Some(hex) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            let bits = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            return Ok(LogLevel::from_bits_retain(bits));
        }

        if let Ok(bits) = trimmed.parse::<u32>() {
            return Ok(LogLevel::from_bits_retain(bits));
        }

        let mut level = LogLevel::empty();
        for part in trimmed.split(['|', ',', '+']) {
            level |= match part.trim().to_lowercase().as_str() {
                "error" => LogLevel::ERROR,
                "replication" => LogLevel::REPLICATION,
                "debug" => LogLevel::DEBUG,
                "all" => LogLevel::ALL,
                _ => return Err(invalid()),
            };
        }
        Ok(level)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }

        let mut names = Vec::with_capacity(4);
        if self.contains(LogLevel::ERROR) {
            names.push("error".to_string());
        }
        if self.contains(LogLevel::REPLICATION) {
            names.push("replication".to_string());
        }
        if self.contains(LogLevel::DEBUG) {
            names.push("debug".to_string());
        }
        let unnamed = self.bits() & !LogLevel::ALL.bits();
        if unnamed != 0 {
            names.push(format!("{unnamed:#x}"));
        }

        f.write_str(&names.join("|"))
    }
}
