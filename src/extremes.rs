//! Lowest and highest effective value over a time window

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::series::{Series, Window};
use crate::{OPEN_END, SENTINEL};

/// Minimum records a history needs before extremes are reported
const MIN_RECORDS: usize = 2;

/// Lowest and highest effective value in a window, with the time each was
/// first seen. All fields are `-1` when nothing qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extremes {
    pub min_time: i32,
    pub min_value: i32,
    pub max_time: i32,
    pub max_value: i32,
}

impl Extremes {
    pub const NONE: Self = Self {
        min_time: SENTINEL,
        min_value: SENTINEL,
        max_time: SENTINEL,
        max_value: SENTINEL,
    };

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// `[min_time, min_value, max_time, max_value]`
    pub const fn to_array(self) -> [i32; 4] {
        [self.min_time, self.min_value, self.max_time, self.max_value]
    }

    /// `[min_value, max_value]`
    pub const fn lowest_and_highest(self) -> [i32; 2] {
        [self.min_value, self.max_value]
    }
}

impl From<Extremes> for [i32; 4] {
    fn from(extremes: Extremes) -> Self {
        extremes.to_array()
    }
}

/// Running min/max, keeping the earliest time on ties.
#[derive(Debug, Default)]
struct ExtremeTracker {
    min: Option<(i32, i32)>,
    max: Option<(i32, i32)>,
}

impl ExtremeTracker {
    fn offer(&mut self, time: i32, value: i32) {
        if self.min.is_none_or(|(_, min)| value < min) {
            self.min = Some((time, value));
        }
        if self.max.is_none_or(|(_, max)| value > max) {
            self.max = Some((time, value));
        }
    }

    fn finish(self) -> Extremes {
        match (self.min, self.max) {
            (Some((min_time, min_value)), Some((max_time, max_value))) => Extremes {
                min_time,
                min_value,
                max_time,
                max_value,
            },
            _ => Extremes::NONE,
        }
    }
}

impl Series<'_> {
    /// Extremes of the effective value over `[start, end)`.
    ///
    /// `end` may lie past the last record (see [`OPEN_END`]). A start before
    /// the first record is moved up to it. The record already in force when
    /// the window opens is a candidate too, keyed at the window start.
    /// Unavailable records never qualify.
    pub fn extremes(&self, start: i32, end: i32) -> Extremes {
        match Window::new(start, end) {
            Some(window) => self.extremes_in(window),
            None => {
                debug!("Extremes: empty window [{}, {})", start, end);
                Extremes::NONE
            }
        }
    }

    /// Same as [`Series::extremes`] for a prebuilt window.
    pub fn extremes_in(&self, window: Window) -> Extremes {
        if self.len() < MIN_RECORDS {
            debug!("Extremes: {} record(s) is too short a history", self.len());
            return Extremes::NONE;
        }

        let first_time = self.first().time;
        if first_time == SENTINEL || self.last_time() == SENTINEL || first_time > window.end {
            debug!(
                "Extremes: history starting at {} does not cover [{}, {})",
                first_time, window.start, window.end
            );
            return Extremes::NONE;
        }

        let window = window.start_no_earlier_than(first_time);
        trace!("Extremes: scanning [{}, {})", window.start, window.end);

        let mut tracker = ExtremeTracker::default();
        for span in self.spans() {
            if span.time() >= window.end {
                break;
            }
            if span.is_unavailable() {
                continue;
            }

            if span.time() >= window.start {
                tracker.offer(span.time(), span.value());
            } else if span.reaches(window.start) {
                tracker.offer(window.start, span.value());
            }
        }

        tracker.finish()
    }

    /// Extremes over the whole history
    pub fn lowest_and_highest_with_time(&self) -> Extremes {
        self.extremes(0, OPEN_END)
    }

    /// `[lowest, highest]` over the whole history
    pub fn lowest_and_highest(&self) -> [i32; 2] {
        self.lowest_and_highest_with_time().lowest_and_highest()
    }
}

/// See [`Series::extremes`]; [`Extremes::NONE`] for an empty or malformed
/// history
pub fn extremes_in_interval(data: &[i32], start: i32, end: i32, channel: Channel) -> Extremes {
    Series::view(data, channel).map_or(Extremes::NONE, |series| series.extremes(start, end))
}

/// `[lowest, highest]` over the whole history, `[-1, -1]` if insufficient
pub fn lowest_and_highest(data: &[i32], channel: Channel) -> [i32; 2] {
    lowest_and_highest_with_time(data, channel).lowest_and_highest()
}

/// Extremes over the whole history
pub fn lowest_and_highest_with_time(data: &[i32], channel: Channel) -> Extremes {
    extremes_in_interval(data, 0, OPEN_END, channel)
}
