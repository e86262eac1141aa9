use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_NAME: &str = "Mr. X";

/// Last hour of the day that still greets with "Good morning".
pub const LAST_MORNING_HOUR: u32 = 12;

pub const MAX_HOUR: u32 = 23;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GreetingError {
    #[error("hour must be between 0 and 23, got {0}")]
    HourOutOfRange(u32),
    #[error("hour is not a number: {0:?}")]
    InvalidHour(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayPeriod {
    Morning,
    Afternoon,
}

impl DayPeriod {
    pub fn for_hour(hour: u32) -> Self {
        if hour <= LAST_MORNING_HOUR {
            DayPeriod::Morning
        } else {
            DayPeriod::Afternoon
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayPeriod::Morning => write!(f, "Good morning"),
            DayPeriod::Afternoon => write!(f, "Good afternoon"),
        }
    }
}

/// Greets `name` (or [`DEFAULT_NAME`]) according to `hour`.
///
/// A missing hour greets with "Good morning". Hours are not range checked
/// here, anything past noon is afternoon.
pub fn greet(name: Option<&str>, hour: Option<u32>) -> String {
    let period = hour.map(DayPeriod::for_hour).unwrap_or(DayPeriod::Morning);
    format!("{}, {}", period, name.unwrap_or(DEFAULT_NAME))
}

/// Who to greet and at what hour.
///
/// Defaults to [`DEFAULT_NAME`] with no hour, which greets in the morning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingInput {
    pub name: String,
    pub hour: Option<u32>,
}

impl Default for GreetingInput {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            hour: None,
        }
    }
}

impl GreetingInput {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_hour(mut self, hour: u32) -> Result<Self, GreetingError> {
        if hour > MAX_HOUR {
            return Err(GreetingError::HourOutOfRange(hour));
        }
        self.hour = Some(hour);
        Ok(self)
    }

    /// Builds an input from raw page parameters. A blank name keeps the default.
    pub fn from_params(name: Option<&str>, hour: Option<&str>) -> Result<Self, GreetingError> {
        let mut input = Self::default();

        if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
            input = input.with_name(name);
        }

        if let Some(raw) = hour.map(str::trim).filter(|h| !h.is_empty()) {
            let hour = raw
                .parse::<u32>()
                .map_err(|_| GreetingError::InvalidHour(raw.to_string()))?;
            input = input.with_hour(hour)?;
        }

        Ok(input)
    }

    pub fn greeting(&self) -> String {
        greet(Some(&self.name), self.hour)
    }
}
