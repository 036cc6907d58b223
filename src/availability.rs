//! Availability of a price channel: was it out of stock, and for how long.

use log::{debug, trace};

use crate::channel::Channel;
use crate::series::{Series, Window};
use crate::{NO_DATA, SENTINEL};

impl Series<'_> {
    /// Whether any record strictly inside `(start, end)` marks the item as
    /// unavailable.
    ///
    /// Only changes inside the window are inspected; the record already in
    /// force at `start` is not. Returns `None` when the history has fewer
    /// than two records or the window is empty.
    pub fn was_unavailable_in(&self, start: i32, end: i32) -> Option<bool> {
        if self.len() < 2 || start >= end {
            debug!(
                "Availability: cannot judge [{}, {}) from {} record(s)",
                start,
                end,
                self.len()
            );
            return None;
        }

        for record in self.records() {
            if record.time <= start {
                continue;
            }
            if record.time >= end {
                break;
            }
            if record.is_unavailable() {
                return Some(true);
            }
        }

        Some(false)
    }

    /// Percentage (0-100) of `[start, end)` during which a price channel was
    /// out of stock. 100 means out of stock for the whole window.
    ///
    /// The window is clamped to `[tracking_since, now)`: nothing is known
    /// before tracking began or after `now`. Time in the window before the
    /// first record counts as out of stock.
    ///
    /// Returns [`NO_DATA`] for non-price channels, an empty window (before or
    /// after clamping), or a history that starts after the window ends.
    pub fn unavailable_percentage(
        &self,
        now: i32,
        start: i32,
        end: i32,
        tracking_since: i32,
    ) -> i32 {
        if !self.channel().is_price {
            debug!("Availability: channel is not a price");
            return NO_DATA;
        }
        let Some(window) = Window::new(start, end) else {
            debug!("Availability: empty window [{}, {})", start, end);
            return NO_DATA;
        };

        let first_time = self.first().time;
        if first_time == SENTINEL
            || self.last_time() == SENTINEL
            || first_time > window.end
            || tracking_since > window.end
        {
            debug!(
                "Availability: history from {} (tracked since {}) does not cover [{}, {})",
                first_time, tracking_since, window.start, window.end
            );
            return NO_DATA;
        }

        let window = window
            .start_no_earlier_than(tracking_since)
            .end_no_later_than(now);
        if window.is_empty() {
            debug!("Availability: nothing known between {} and {}", window.start, now);
            return NO_DATA;
        }
        trace!("Availability: scanning [{}, {})", window.start, window.end);

        // Minutes in stock; the result is its complement.
        let mut available: i64 = 0;
        for span in self.spans() {
            if span.time() >= window.end {
                break;
            }
            if span.is_unavailable() {
                continue;
            }

            if span.time() >= window.start {
                if span.is_first() && span.is_last() {
                    return 0;
                }
                let until = span.end_within(window.end, window.end);
                available += i64::from(until) - i64::from(span.time());
            } else if span.reaches(window.end) {
                // In stock from before the window through its end
                return 0;
            } else if span.reaches(window.start) {
                let until = span.end_within(window.end, window.end);
                available = i64::from(until) - i64::from(window.start);
            }
        }

        let percentage = if available > 0 {
            100 - available * 100 / window.duration()
        } else {
            100
        };
        percentage.clamp(0, 100) as i32
    }
}

/// See [`Series::was_unavailable_in`]; `None` for an empty or malformed
/// history
pub fn was_unavailable_in_interval(
    data: &[i32],
    start: i32,
    end: i32,
    channel: Channel,
) -> Option<bool> {
    Series::view(data, channel).and_then(|series| series.was_unavailable_in(start, end))
}

/// See [`Series::unavailable_percentage`]; [`NO_DATA`] for an empty or
/// malformed history
pub fn unavailable_percentage(
    data: &[i32],
    now: i32,
    start: i32,
    end: i32,
    channel: Channel,
    tracking_since: i32,
) -> i32 {
    Series::view(data, channel).map_or(NO_DATA, |series| {
        series.unavailable_percentage(now, start, end, tracking_since)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In stock at 50, out of stock from 200, back at 80 from 300
    const HISTORY: [i32; 6] = [100, 50, 200, -1, 300, 80];

    #[test]
    fn test_was_unavailable() {
        let series = Series::new(&HISTORY, Channel::PRICE).unwrap();

        assert_eq!(series.was_unavailable_in(0, 400), Some(true));
        assert_eq!(series.was_unavailable_in(100, 300), Some(true));
        assert_eq!(
            series.was_unavailable_in(200, 400),
            Some(false),
            "change exactly at the start is not inside the window"
        );
        assert_eq!(
            series.was_unavailable_in(250, 260),
            Some(false),
            "record in force at the start is not inspected"
        );
    }

    #[test]
    fn test_was_unavailable_unknown() {
        assert_eq!(was_unavailable_in_interval(&HISTORY, 300, 300, Channel::PRICE), None);
        assert_eq!(was_unavailable_in_interval(&HISTORY[..2], 0, 400, Channel::PRICE), None);
        assert_eq!(was_unavailable_in_interval(&[], 0, 400, Channel::PRICE), None);
        let with_shipping = [10, 5, -1, 20, 6, 0];
        assert_eq!(
            was_unavailable_in_interval(&with_shipping, 0, 30, Channel::PRICE_WITH_SHIPPING),
            Some(false),
            "unknown shipping is not unavailability"
        );
    }

    #[test]
    fn test_percentage_with_gap() {
        // out of stock 200-300 out of [100, 400)
        assert_eq!(unavailable_percentage(&HISTORY, 400, 100, 400, Channel::PRICE, 0), 34);
        // [0, 100) has no data and counts as out of stock too
        assert_eq!(unavailable_percentage(&HISTORY, 400, 0, 400, Channel::PRICE, 0), 50);
    }

    #[test]
    fn test_percentage_record_before_window() {
        let data = [100, 50, 250, -1, 300, 70];
        // in stock 200-250, out 250-300, in 300-400
        assert_eq!(unavailable_percentage(&data, 400, 200, 400, Channel::PRICE, 0), 25);
        assert_eq!(
            unavailable_percentage(&data, 400, 200, 10_000, Channel::PRICE, 0),
            25,
            "end clamped to now"
        );
        assert_eq!(
            unavailable_percentage(&data, 400, 0, 400, Channel::PRICE, 200),
            25,
            "start clamped to tracking_since"
        );
    }

    #[test]
    fn test_percentage_fully_available() {
        let data = [100, 50, 500, 60];
        assert_eq!(unavailable_percentage(&data, 1_000, 200, 400, Channel::PRICE, 0), 0);

        let single = [100, 50];
        assert_eq!(unavailable_percentage(&single, 300, 100, 200, Channel::PRICE, 0), 0);
        assert_eq!(
            unavailable_percentage(&single, 300, 150, 200, Channel::PRICE, 0),
            0,
            "last record in force through the window"
        );
    }

    #[test]
    fn test_percentage_fully_unavailable() {
        let data = [100, -1, 500, 60];
        assert_eq!(unavailable_percentage(&data, 1_000, 200, 400, Channel::PRICE, 0), 100);
    }

    #[test]
    fn test_percentage_no_data() {
        assert_eq!(
            unavailable_percentage(&HISTORY, 400, 100, 400, Channel::COUNT, 0),
            NO_DATA,
            "not a price channel"
        );
        assert_eq!(unavailable_percentage(&HISTORY, 400, 400, 100, Channel::PRICE, 0), NO_DATA);
        assert_eq!(unavailable_percentage(&HISTORY, 400, 0, 50, Channel::PRICE, 0), NO_DATA);
        assert_eq!(unavailable_percentage(&HISTORY, 400, 0, 300, Channel::PRICE, 301), NO_DATA);
        assert_eq!(
            unavailable_percentage(&HISTORY, 150, 200, 400, Channel::PRICE, 0),
            NO_DATA,
            "window lies after now"
        );
        assert_eq!(unavailable_percentage(&[], 400, 0, 400, Channel::PRICE, 0), NO_DATA);
    }

    #[test]
    fn test_percentage_with_shipping() {
        let data = [100, 50, 3, 200, -1, 3, 300, 80, -1];
        assert_eq!(
            unavailable_percentage(&data, 400, 100, 400, Channel::PRICE_WITH_SHIPPING, 0),
            34
        );
    }

    #[test]
    fn test_percentage_bounded() {
        let data = [10, 5, 40, -1, 45, 7, 90, -1, 130, 9, 170, -1];
        let series = Series::new(&data, Channel::PRICE).unwrap();

        for now in [50, 100, 200] {
            for (start, end) in [(0, 200), (20, 100), (41, 44), (95, 180), (150, 1_000)] {
                let percentage = series.unavailable_percentage(now, start, end, 0);
                assert!(
                    percentage == NO_DATA || (0..=100).contains(&percentage),
                    "{} for [{}, {}) at {}",
                    percentage,
                    start,
                    end,
                    now
                );
            }
        }
    }
}
