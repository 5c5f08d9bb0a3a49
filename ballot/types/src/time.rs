use {
    crate::{StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    serde_with::{serde_as, DisplayFromStr},
    std::{
        fmt,
        ops::{Add, Sub},
    },
};

/// The number of nanoseconds in a second.
const NANOS_PER_SECOND: u128 = 1_000_000_000;
/// The number of seconds in a minute.
const SECONDS_PER_MINUTE: u128 = 60;
/// The number of minutes in an hour.
const MINUTES_PER_HOUR: u128 = 60;
/// The number of hours in a day.
const HOURS_PER_DAY: u128 = 24;

/// A ledger clock reading, in nanosecond precision.
///
/// A timestamp is simply a duration between a point of time and the clock's
/// origin, so here we define timestamp simply as an alias to [`Duration`].
pub type Timestamp = Duration;

/// A span of time, in nanosecond precision.
///
/// We can't use [`std::time::Duration`] because it doesn't implement the Borsh
/// traits. Additionally, it's serialized to JSON as a struct, which isn't
/// desirable. This one serializes as a string of nanoseconds.
#[serde_as]
#[derive(
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
pub struct Duration(#[serde_as(as = "DisplayFromStr")] u128);

impl Duration {
    pub const ZERO: Self = Self(0);

    pub const fn from_nanos(nanos: u128) -> Self {
        Self(nanos)
    }

    pub const fn from_seconds(seconds: u128) -> Self {
        Self::from_nanos(seconds * NANOS_PER_SECOND)
    }

    pub const fn from_minutes(minutes: u128) -> Self {
        Self::from_seconds(minutes * SECONDS_PER_MINUTE)
    }

    pub const fn from_hours(hours: u128) -> Self {
        Self::from_minutes(hours * MINUTES_PER_HOUR)
    }

    pub const fn from_days(days: u128) -> Self {
        Self::from_hours(days * HOURS_PER_DAY)
    }

    pub const fn into_nanos(self) -> u128 {
        self.0
    }

    pub const fn into_seconds(self) -> u128 {
        self.0 / NANOS_PER_SECOND
    }

    pub const fn into_minutes(self) -> u128 {
        self.into_seconds() / SECONDS_PER_MINUTE
    }

    pub const fn into_hours(self) -> u128 {
        self.into_minutes() / MINUTES_PER_HOUR
    }

    pub const fn into_days(self) -> u128 {
        self.into_hours() / HOURS_PER_DAY
    }

    pub fn checked_add(self, rhs: Self) -> StdResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or_else(|| StdError::overflow(self.0, "+", rhs.0))
    }

    pub fn checked_sub(self, rhs: Self) -> StdResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or_else(|| StdError::overflow(self.0, "-", rhs.0))
    }

    /// Subtract, clamping at zero.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Duration({}ns)", self.0)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let seconds = self.0 / NANOS_PER_SECOND;
        let nanos = self.0 % NANOS_PER_SECOND;
        if nanos == 0 {
            write!(f, "{seconds}s")
        } else {
            write!(f, "{seconds}.{nanos:09}s")
        }
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

// ----------------------------------- tests -----------------------------------
