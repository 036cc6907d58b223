//! Point lookups: the last record and the value in force at a given time.
//!
//! The history is a right-continuous step function: the value at `t` is the
//! one carried by the latest record whose time does not exceed `t`.

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::series::{Record, Series};
use crate::{NO_DATA, SENTINEL};

/// Raw primary value and auxiliary cost of one record, not combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceAndCost {
    pub price: i32,
    /// [`SENTINEL`] when unknown or when the channel has no auxiliary cost
    pub aux_cost: i32,
}

impl PriceAndCost {
    /// No price could be determined.
    pub const NONE: Self = Self {
        price: SENTINEL,
        aux_cost: SENTINEL,
    };

    /// Landing price, combined the same way as [`Record::effective`]
    pub const fn landing(&self) -> i32 {
        Record {
            time: 0,
            value: self.price,
            aux_cost: Some(self.aux_cost),
        }
        .effective()
    }
}

impl From<Record> for PriceAndCost {
    fn from(record: Record) -> Self {
        Self {
            price: record.value,
            aux_cost: record.aux_cost.unwrap_or(SENTINEL),
        }
    }
}

impl Series<'_> {
    /// Time of the last recorded change (not the last update time)
    pub fn last_time(&self) -> i32 {
        self.last().time
    }

    /// Effective value of the last record
    pub fn last_value(&self) -> i32 {
        self.last().effective()
    }

    /// Record in force at `time`, `None` if `time` precedes the history.
    fn in_force_at(&self, time: i32) -> Option<Record> {
        self.records().take_while(|record| record.time <= time).last()
    }

    /// Effective value in force at `time`.
    ///
    /// Returns [`NO_DATA`] if `time` precedes the first record, and the
    /// sentinel if the item was unavailable at `time`.
    pub fn value_at(&self, time: i32) -> i32 {
        self.in_force_at(time)
            .map_or(NO_DATA, |record| record.effective())
    }

    /// Closest known value at `time`, skipping over unavailable stretches.
    ///
    /// Starts from the record in force at `time` (or the first record when
    /// `time` precedes the history) and moves forward until a record with a
    /// known value is found. Falls back to [`Series::last_value`], which may
    /// itself be the sentinel.
    pub fn closest_value_at(&self, time: i32) -> i32 {
        let selected = self
            .records()
            .take_while(|record| record.time <= time)
            .count()
            .saturating_sub(1);

        self.records()
            .skip(selected)
            .find(|record| !record.is_unavailable())
            .map_or_else(|| self.last_value(), |record| record.effective())
    }

    /// Raw price and auxiliary cost in force at `time`
    pub fn price_and_aux_cost_at(&self, time: i32) -> PriceAndCost {
        self.in_force_at(time)
            .map_or(PriceAndCost::NONE, PriceAndCost::from)
    }

    /// Raw price and auxiliary cost of the last record
    pub fn last_price_and_aux_cost(&self) -> PriceAndCost {
        PriceAndCost::from(self.last())
    }

    /// Change of the effective value at the last record.
    ///
    /// Zero when there is no earlier record or when either side of the
    /// change is unavailable.
    pub fn last_delta(&self) -> i32 {
        let mut tail = self.records().rev();
        match (tail.next(), tail.next()) {
            (Some(last), Some(previous))
                if !last.is_unavailable() && !previous.is_unavailable() =>
            {
                last.effective().saturating_sub(previous.effective())
            }
            _ => 0,
        }
    }
}

/// Time of the last record, [`NO_DATA`] for an empty or malformed history
pub fn last_time(data: &[i32], channel: Channel) -> i32 {
    Series::view(data, channel).map_or(NO_DATA, |series| series.last_time())
}

/// Effective value of the last record, [`NO_DATA`] for an empty or malformed
/// history
pub fn last_value(data: &[i32], channel: Channel) -> i32 {
    Series::view(data, channel).map_or(NO_DATA, |series| series.last_value())
}

/// See [`Series::value_at`]
pub fn value_at_time(data: &[i32], time: i32, channel: Channel) -> i32 {
    Series::view(data, channel).map_or(NO_DATA, |series| series.value_at(time))
}

/// See [`Series::closest_value_at`]
pub fn closest_value_at_time(data: &[i32], time: i32, channel: Channel) -> i32 {
    Series::view(data, channel).map_or(NO_DATA, |series| series.closest_value_at(time))
}

/// Raw price and shipping in force at `time` for a history that always
/// carries a shipping field (`[time, price, shipping, ...]`).
pub fn price_and_aux_cost_at_time(data: &[i32], time: i32) -> PriceAndCost {
    Series::view(data, Channel::PRICE_WITH_SHIPPING)
        .map_or(PriceAndCost::NONE, |series| series.price_and_aux_cost_at(time))
}

/// Last raw price and shipping of a `[time, price, shipping, ...]` history
pub fn last_price_and_aux_cost(data: &[i32]) -> PriceAndCost {
    Series::view(data, Channel::PRICE_WITH_SHIPPING)
        .map_or(PriceAndCost::NONE, |series| series.last_price_and_aux_cost())
}

/// See [`Series::last_delta`]; zero for an empty or malformed history
pub fn last_delta(data: &[i32], channel: Channel) -> i32 {
    Series::view(data, channel).map_or(0, |series| series.last_delta())
}
