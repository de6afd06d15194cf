//! Fixed-anchor time window for reproducible timestamp synthesis.
//!
//! Every generated timestamp is drawn relative to a fixed anchor instead of
//! the wall clock, so a given seed produces the same dataset no matter when
//! the generator runs.

use rand::Rng;
use time::macros::datetime;
use time::{Date, Duration, OffsetDateTime, Time};

/// Anchor used when no override is supplied.
pub const DEFAULT_ANCHOR: OffsetDateTime = datetime!(2025-06-15 12:00:00 UTC);

/// A closed time window ending at a fixed anchor instant.
///
/// The `datetime_this_*` methods draw a uniformly distributed whole-second
/// timestamp between the start of the anchor's month, year, or decade and the
/// anchor itself (both ends inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisWindow {
    anchor: OffsetDateTime,
}

impl Default for SynthesisWindow {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_ANCHOR,
        }
    }
}

impl SynthesisWindow {
    pub const fn anchored_at(anchor: OffsetDateTime) -> Self {
        Self { anchor }
    }

    /// The instant the window ends at. Promotion activity is evaluated here.
    pub const fn anchor(&self) -> OffsetDateTime {
        self.anchor
    }

    /// Random timestamp between the first midnight of the anchor's month and
    /// the anchor.
    pub fn datetime_this_month(&self, rng: &mut impl Rng) -> OffsetDateTime {
        // Day 1 exists in every month.
        let start = self
            .anchor
            .replace_day(1)
            .unwrap()
            .replace_time(Time::MIDNIGHT);
        self.uniform_between(start, rng)
    }

    /// Random timestamp between January 1st of the anchor's year and the
    /// anchor.
    pub fn datetime_this_year(&self, rng: &mut impl Rng) -> OffsetDateTime {
        let january_first = Date::from_ordinal_date(self.anchor.year(), 1).unwrap();
        let start = self
            .anchor
            .replace_date(january_first)
            .replace_time(Time::MIDNIGHT);
        self.uniform_between(start, rng)
    }

    /// Random timestamp between the start of the anchor's decade and the
    /// anchor.
    pub fn datetime_this_decade(&self, rng: &mut impl Rng) -> OffsetDateTime {
        let year = self.anchor.year();
        let decade_start = Date::from_ordinal_date(year - year.rem_euclid(10), 1).unwrap();
        let start = self
            .anchor
            .replace_date(decade_start)
            .replace_time(Time::MIDNIGHT);
        self.uniform_between(start, rng)
    }

    fn uniform_between(&self, start: OffsetDateTime, rng: &mut impl Rng) -> OffsetDateTime {
        let span = (self.anchor - start).whole_seconds();
        start + Duration::seconds(rng.gen_range(0..=span))
    }
}
