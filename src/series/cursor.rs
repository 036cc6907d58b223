use core::iter::FusedIterator;
use core::slice::ChunksExact;

use super::Record;

/// A record together with the interval during which its value is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Position of the record in the history
    pub index: usize,
    pub record: Record,
    /// The record this one superseded
    pub previous: Option<Record>,
    /// Time of the next record, `None` for the last record (open-ended)
    pub until: Option<i32>,
}

impl Span {
    pub const fn time(&self) -> i32 {
        self.record.time
    }

    /// Effective (landing) value, see [`Record::effective`]
    pub const fn value(&self) -> i32 {
        self.record.effective()
    }

    pub const fn is_unavailable(&self) -> bool {
        self.record.is_unavailable()
    }

    pub const fn is_first(&self) -> bool {
        self.previous.is_none()
    }

    pub const fn is_last(&self) -> bool {
        self.until.is_none()
    }

    /// Minutes until the next record, `None` for the last record
    pub const fn duration(&self) -> Option<i64> {
        match self.until {
            Some(next) => Some(next as i64 - self.record.time as i64),
            None => None,
        }
    }

    /// Whether a record that started before `start` is still in force when
    /// a window opens at `start`.
    ///
    /// The last record is in force indefinitely. Otherwise the next record
    /// must not begin before `start`; a next record starting exactly at
    /// `start` still counts.
    pub const fn reaches(&self, start: i32) -> bool {
        match self.until {
            Some(next) => next >= start,
            None => true,
        }
    }

    /// End of the span capped at `limit`, using `open_end` for the last
    /// record.
    pub fn end_within(&self, open_end: i32, limit: i32) -> i32 {
        self.until.unwrap_or(open_end).min(limit)
    }
}

/// Forward-only cursor over the spans of a history.
///
/// Each step decodes one record ahead so the current span knows where it
/// ends. The cursor cannot be rewound; take a fresh one from
/// [`Series::spans`](super::Series::spans).
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    chunks: ChunksExact<'a, i32>,
    upcoming: Option<Record>,
    previous: Option<Record>,
    index: usize,
}

impl<'a> Spans<'a> {
    pub(super) fn new(data: &'a [i32], width: usize) -> Self {
        let mut chunks = data.chunks_exact(width);
        let upcoming = chunks.next().map(Record::from_chunk);
        Self {
            chunks,
            upcoming,
            previous: None,
            index: 0,
        }
    }
}

impl Iterator for Spans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let record = self.upcoming.take()?;
        self.upcoming = self.chunks.next().map(Record::from_chunk);

        let span = Span {
            index: self.index,
            record,
            previous: self.previous,
            until: self.upcoming.map(|next| next.time),
        };

        self.previous = Some(record);
        self.index += 1;
        Some(span)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.chunks.len() + usize::from(self.upcoming.is_some());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Spans<'_> {}

impl FusedIterator for Spans<'_> {}

#[cfg(test)]
mod tests {
    use crate::channel::Channel;
    use crate::series::Series;

    const HISTORY: [i32; 6] = [100, 50, 200, -1, 300, 80];

    #[test]
    fn test_spans_link_neighbours() {
        let series = Series::new(&HISTORY, Channel::PRICE).unwrap();
        let mut spans = series.spans();
        assert_eq!(spans.len(), 3);

        let first = spans.next().unwrap();
        assert!(first.is_first());
        assert_eq!(first.until, Some(200));
        assert_eq!(first.duration(), Some(100));

        let gap = spans.next().unwrap();
        assert!(gap.is_unavailable());
        assert_eq!(gap.previous.map(|r| r.value), Some(50));
        assert_eq!(gap.index, 1);

        let last = spans.next().unwrap();
        assert!(last.is_last());
        assert_eq!(last.duration(), None);
        assert_eq!(last.value(), 80);

        assert!(spans.next().is_none());
        assert!(spans.next().is_none());
    }

    #[test]
    fn test_reaches_window_start() {
        let series = Series::new(&HISTORY, Channel::PRICE).unwrap();
        let mut spans = series.spans();
        let first = spans.next().unwrap();

        assert!(first.reaches(150));
        assert!(first.reaches(200), "next change exactly at the start");
        assert!(!first.reaches(201));

        let last = spans.nth(1).unwrap();
        assert!(last.reaches(i32::MAX), "last record never expires");
    }

    #[test]
    fn test_end_within() {
        let series = Series::new(&HISTORY, Channel::PRICE).unwrap();
        let spans: [_; 3] = core::array::from_fn({
            let mut spans = series.spans();
            move |_| spans.next().unwrap()
        });

        assert_eq!(spans[0].end_within(1_000, 150), 150);
        assert_eq!(spans[0].end_within(1_000, 400), 200);
        assert_eq!(spans[2].end_within(1_000, 400), 400);
        assert_eq!(spans[2].end_within(350, 400), 350);
    }
}
