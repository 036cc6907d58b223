//! Channel descriptor for an encoded history

use serde::{Deserialize, Serialize};

/// Describes how a history slice is laid out and what it measures.
///
/// The descriptor is supplied by the caller alongside each slice; the crate
/// never infers it from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Channel {
    /// Each record carries a third field: an auxiliary cost (e.g. shipping)
    /// added on top of the primary value.
    pub has_aux_cost: bool,
    /// The channel tracks a price, so gaps in it mean "out of stock" and the
    /// availability percentage is meaningful.
    pub is_price: bool,
}

impl Channel {
    /// Plain price history: `[time, price, ...]`
    pub const PRICE: Self = Self::new(false, true);

    /// Price history with shipping: `[time, price, shipping, ...]`
    pub const PRICE_WITH_SHIPPING: Self = Self::new(true, true);

    /// Non-price counter such as a rank or an offer count: `[time, count, ...]`
    pub const COUNT: Self = Self::new(false, false);

    pub const fn new(has_aux_cost: bool, is_price: bool) -> Self {
        Self {
            has_aux_cost,
            is_price,
        }
    }

    /// Number of integers per record (3 with an auxiliary cost, 2 without)
    pub const fn record_width(self) -> usize {
        if self.has_aux_cost { 3 } else { 2 }
    }
}
