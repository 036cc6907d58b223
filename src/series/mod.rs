//! Decoding of the flat record layout shared by every query.
//!
//! Layout (one record, `Channel::record_width()` integers):
//! - time: minutes since epoch
//! - value: primary value, `-1` when unknown/unavailable
//! - aux cost: only present when `Channel::has_aux_cost`, `-1` when unknown

mod cursor;
mod window;

pub use cursor::{Span, Spans};
pub use window::Window;

use log::debug;

use crate::SENTINEL;
use crate::channel::Channel;
use crate::error::SeriesError;

/// One decoded record of a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// Minute at which the value came into force
    pub time: i32,
    /// Primary value (a price, a count, ...) or [`SENTINEL`]
    pub value: i32,
    /// Raw auxiliary cost, `None` when the channel carries none
    pub aux_cost: Option<i32>,
}

impl Record {
    /// Builds a record from one `chunks_exact` chunk (2 or 3 integers).
    fn from_chunk(chunk: &[i32]) -> Self {
        Self {
            time: chunk[0],
            value: chunk[1],
            aux_cost: chunk.get(2).copied(),
        }
    }

    /// Landing value: primary value plus any known, non-negative auxiliary
    /// cost. A negative primary value (the sentinel) is returned untouched.
    pub const fn effective(&self) -> i32 {
        if self.value < 0 {
            return self.value;
        }
        match self.aux_cost {
            Some(cost) if cost > 0 => self.value.saturating_add(cost),
            _ => self.value,
        }
    }

    /// True when the record marks the item as unknown/unavailable
    pub const fn is_unavailable(&self) -> bool {
        self.value == SENTINEL
    }
}

/// Validated, borrowed view of one encoded history.
///
/// The view is non-empty and its length is a multiple of the record width.
/// Times are expected to be non-decreasing; this is the caller's contract
/// and is not re-checked.
#[derive(Debug, Clone, Copy)]
pub struct Series<'a> {
    data: &'a [i32],
    channel: Channel,
}

impl<'a> Series<'a> {
    pub fn new(data: &'a [i32], channel: Channel) -> Result<Self, SeriesError> {
        let width = channel.record_width();
        if data.is_empty() {
            return Err(SeriesError::Empty);
        }
        if data.len() % width != 0 {
            return Err(SeriesError::Misaligned {
                len: data.len(),
                width,
            });
        }
        Ok(Self { data, channel })
    }

    /// Like [`Series::new`], but logs and discards the reason for rejection.
    ///
    /// Used by the slice-level query functions, which report a rejected
    /// history as "no data".
    pub(crate) fn view(data: &'a [i32], channel: Channel) -> Option<Self> {
        match Self::new(data, channel) {
            Ok(series) => Some(series),
            Err(err) => {
                debug!("Treating history as insufficient data: {}", err);
                None
            }
        }
    }

    pub const fn channel(&self) -> Channel {
        self.channel
    }

    pub const fn as_slice(&self) -> &'a [i32] {
        self.data
    }

    /// Number of records
    pub const fn len(&self) -> usize {
        self.data.len() / self.channel.record_width()
    }

    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<Record> {
        let width = self.channel.record_width();
        self.data
            .get(index * width..(index + 1) * width)
            .map(Record::from_chunk)
    }

    pub fn first(&self) -> Record {
        Record::from_chunk(&self.data[..self.channel.record_width()])
    }

    pub fn last(&self) -> Record {
        Record::from_chunk(&self.data[self.data.len() - self.channel.record_width()..])
    }

    /// Iterate over the decoded records in order.
    pub fn records(self) -> impl DoubleEndedIterator<Item = Record> + ExactSizeIterator + 'a {
        self.data
            .chunks_exact(self.channel.record_width())
            .map(Record::from_chunk)
    }

    /// Forward-only cursor yielding each record with its validity interval.
    pub fn spans(self) -> Spans<'a> {
        Spans::new(self.data, self.channel.record_width())
    }
}
