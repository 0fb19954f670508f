use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};

/// A simple clock abstraction for deterministic time in services and tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    /// Whole seconds elapsed since `since`, clamped at zero.
    #[must_use]
    pub fn elapsed_secs(&self, since: DateTime<Utc>) -> u64 {
        let secs = (self.now() - since).num_seconds();
        u64::try_from(secs).unwrap_or(0)
    }
}

//
// ─── DURATION FORMATTING ──────────────────────────────────────────────────────
//

/// Unit words used by [`seconds_to_hms_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationUnits {
    pub hours: &'static str,
    pub minutes: &'static str,
    pub seconds: &'static str,
}

/// Japanese unit words, e.g. `1時間2分3秒`.
pub const JA_UNITS: DurationUnits = DurationUnits {
    hours: "時間",
    minutes: "分",
    seconds: "秒",
};

/// Compact English unit words, e.g. `1h2m3s`.
pub const EN_UNITS: DurationUnits = DurationUnits {
    hours: "h",
    minutes: "m",
    seconds: "s",
};

impl Default for DurationUnits {
    fn default() -> Self {
        JA_UNITS
    }
}

/// Formats seconds as `H時間M分S秒`, omitting the hour segment below one hour.
#[must_use]
pub fn seconds_to_hms(secs: u64) -> String {
    seconds_to_hms_with(secs, JA_UNITS)
}

/// Formats seconds with the given unit words, omitting hours when zero.
#[must_use]
pub fn seconds_to_hms_with(secs: u64, units: DurationUnits) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{h}{}{m}{}{s}{}", units.hours, units.minutes, units.seconds)
    } else {
        format!("{m}{}{s}{}", units.minutes, units.seconds)
    }
}

//
// ─── JST TIMESTAMPS ───────────────────────────────────────────────────────────
//

const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Japan Standard Time (UTC+9, no daylight saving).
#[must_use]
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// `YYYYMMDD_HHMMSS` in Japan Standard Time, used in export file names.
#[must_use]
pub fn jst_file_stamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&jst()).format("%Y%m%d_%H%M%S").to_string()
}

//
// ─── TEST HELPERS ─────────────────────────────────────────────────────────────
//

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
