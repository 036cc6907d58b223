//! Queries over run-length encoded price and availability histories
//!
//! A history is a flat `[i32]` of fixed-width records. Each record says "the
//! value became X at time T" and stays in force until the next record (or
//! forever, for the last one). Times are minutes since a fixed epoch. The
//! value `-1` means the tracked item was unknown or unavailable at that time.
//!
//! Every query is a pure function of one borrowed slice and a [`Channel`]
//! descriptor. Nothing is retained between calls, so a [`Series`] view can be
//! shared freely between threads.
//!
//! "Cannot answer" is reported through reserved values rather than errors:
//! [`NO_DATA`] for scalars, [`Extremes::NONE`] and [`PriceAndCost::NONE`] for
//! tuples, and `None` for the ternary availability check.
//!
//! ```rust
//! use pricetrace::{Channel, Series};
//!
//! let history = [100, 50, 200, -1, 300, 80];
//! let series = Series::new(&history, Channel::PRICE).unwrap();
//!
//! assert_eq!(series.last_time(), 300);
//! assert_eq!(series.value_at(250), -1);
//! assert_eq!(series.closest_value_at(250), 80);
//! ```

#![no_std]

pub mod availability;
pub mod channel;
pub mod config;
pub mod error;
pub mod extremes;
pub mod lookup;
pub mod mean;
pub mod series;

pub use availability::{unavailable_percentage, was_unavailable_in_interval};
pub use channel::Channel;
pub use config::AnalyzerConfig;
pub use error::SeriesError;
pub use extremes::{
    Extremes, extremes_in_interval, lowest_and_highest, lowest_and_highest_with_time,
};
pub use lookup::{
    PriceAndCost, closest_value_at_time, last_delta, last_price_and_aux_cost, last_time,
    last_value, price_and_aux_cost_at_time, value_at_time,
};
pub use mean::{Horizon, weighted_mean};
pub use series::{Record, Series, Span, Spans, Window};

/// Reserved value marking an unknown or unavailable reading.
///
/// As a primary value it means "out of stock" at that time. As an auxiliary
/// cost it means "no known cost" and counts as zero.
pub const SENTINEL: i32 = -1;

/// Reserved scalar result for "insufficient data to answer".
///
/// Shares its value with [`SENTINEL`]; callers that need to tell the two
/// apart should look at the series itself.
pub const NO_DATA: i32 = -1;

/// Minutes in one day, the unit conversion used by day-based windows.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Open-ended window end, meaning "through the present and beyond".
pub const OPEN_END: i32 = i32::MAX;
