//! Clock and timezone provider
//!
//! The reporter never reads the process clock directly, so reports can be
//! reproduced with a `FixedClock`.

use crate::config::TimezoneMode;
use chrono::{DateTime, FixedOffset, Local, Utc};

/// Source of the current moment and the timezone it is expressed in
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Display name of the timezone (e.g. `UTC`, `Europe/Paris`, `+02:00`)
    fn timezone(&self) -> String;
}

/// Process clock, in UTC or in the local timezone
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    mode: TimezoneMode,
}

impl SystemClock {
    pub fn new(mode: TimezoneMode) -> Self {
        Self { mode }
    }

    pub fn utc() -> Self {
        Self::new(TimezoneMode::Utc)
    }

    pub fn local() -> Self {
        Self::new(TimezoneMode::Local)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.mode {
            TimezoneMode::Utc => Utc::now().fixed_offset(),
            TimezoneMode::Local => Local::now().fixed_offset(),
        }
    }

    fn timezone(&self) -> String {
        match self.mode {
            TimezoneMode::Utc => "UTC".to_string(),
            TimezoneMode::Local => std::env::var("TZ")
                .ok()
                .filter(|tz| !tz.trim().is_empty())
                .unwrap_or_else(|| Local::now().format("%:z").to_string()),
        }
    }
}

/// Clock frozen at a given moment
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
    timezone: String,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>, timezone: impl Into<String>) -> Self {
        Self {
            now,
            timezone: timezone.into(),
        }
    }

    /// Parse an RFC 3339 timestamp and label it `UTC`
    pub fn at(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self::new(DateTime::parse_from_rfc3339(rfc3339)?, "UTC"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    fn timezone(&self) -> String {
        self.timezone.clone()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }

    fn timezone(&self) -> String {
        (**self).timezone()
    }
}
