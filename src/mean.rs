//! Duration-weighted mean over a trailing window

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::config::AnalyzerConfig;
use crate::series::Series;
use crate::{MINUTES_PER_DAY, NO_DATA};

/// Common trailing horizons for the weighted mean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    /// 7 days
    Week,
    /// 30 days
    Month,
    /// 90 days
    Quarter,
    /// 180 days
    HalfYear,
    /// 365 days
    Year,
}

impl Horizon {
    /// Get a short label for display
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
            Self::HalfYear => "180d",
            Self::Year => "365d",
        }
    }

    /// Get the length of this horizon in days
    pub const fn days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::HalfYear => 180,
            Self::Year => 365,
        }
    }
}

/// Exact running sum of value x minutes
#[derive(Debug, Default)]
struct WeightedSum {
    sum: i128,
    minutes: i64,
}

impl WeightedSum {
    fn add(&mut self, value: i32, minutes: i64) {
        self.sum += i128::from(value) * i128::from(minutes);
        self.minutes += minutes;
    }

    /// Floor of the weighted mean, `None` without any weight
    fn mean(&self) -> Option<i32> {
        if self.minutes <= 0 {
            return None;
        }
        i32::try_from(self.sum.div_euclid(i128::from(self.minutes))).ok()
    }
}

impl Series<'_> {
    /// Weighted mean of the effective value over the `days` before `now`.
    ///
    /// Uses [`AnalyzerConfig::default`]; see
    /// [`Series::weighted_mean_with_config`].
    pub fn weighted_mean(&self, now: i32, days: u32) -> i32 {
        self.weighted_mean_with_config(now, days, &AnalyzerConfig::default())
    }

    /// Weighted mean over one of the common [`Horizon`]s
    pub fn weighted_mean_over(&self, now: i32, horizon: Horizon) -> i32 {
        self.weighted_mean(now, horizon.days())
    }

    /// Weighted mean of the effective value over `[now - days, now]`.
    ///
    /// Each available record is weighted by the minutes it stays in force
    /// inside the window: until the next record, or until `now` for the last
    /// one, and never before the window start. The record already in force
    /// when the window opens contributes only its in-window part.
    /// Unavailable records carry no weight at all.
    ///
    /// Returns [`NO_DATA`] for fewer than two records, for a history shorter
    /// than `config.min_history_days`, or when nothing carries weight. A
    /// `days` longer than the history is cut down to the whole days it spans.
    pub fn weighted_mean_with_config(&self, now: i32, days: u32, config: &AnalyzerConfig) -> i32 {
        if self.len() < 2 {
            debug!("Weighted mean: {} record(s) is too short a history", self.len());
            return NO_DATA;
        }

        let tracked_hours = (i64::from(self.last_time()) - i64::from(self.first().time)) / 60;
        if tracked_hours < 24 * i64::from(config.min_history_days) {
            debug!(
                "Weighted mean: {}h tracked, need {} days",
                tracked_hours, config.min_history_days
            );
            return NO_DATA;
        }

        let days = i64::from(days).min(tracked_hours / 24);
        if days == 0 {
            debug!("Weighted mean: empty window");
            return NO_DATA;
        }

        let now = i64::from(now);
        let window_start = now - days * MINUTES_PER_DAY;
        trace!("Weighted mean: {} days, window [{}, {}]", days, window_start, now);

        let mut total = WeightedSum::default();
        for span in self.spans() {
            if span.is_unavailable() {
                continue;
            }

            let start = i64::from(span.time()).max(window_start);
            let end = span.until.map_or(now, i64::from).min(now);
            if end > start {
                total.add(span.value(), end - start);
            }
        }

        total.mean().unwrap_or(NO_DATA)
    }
}

/// See [`Series::weighted_mean`]; [`NO_DATA`] for an empty or malformed
/// history
pub fn weighted_mean(data: &[i32], now: i32, days: u32, channel: Channel) -> i32 {
    Series::view(data, channel).map_or(NO_DATA, |series| series.weighted_mean(now, days))
}
