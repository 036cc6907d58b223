/// Half-open query window `[start, end)` in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: i32,
    pub end: i32,
}

impl Window {
    /// Returns `None` when `start >= end`.
    pub const fn new(start: i32, end: i32) -> Option<Self> {
        if start >= end {
            None
        } else {
            Some(Self { start, end })
        }
    }

    pub const fn contains(&self, time: i32) -> bool {
        self.start <= time && time < self.end
    }

    /// Moves the start forward to `floor` if it lies before it.
    ///
    /// The result may be empty; callers decide what that means.
    pub fn start_no_earlier_than(self, floor: i32) -> Self {
        Self {
            start: self.start.max(floor),
            ..self
        }
    }

    /// Moves the end back to `ceiling` if it lies after it.
    pub fn end_no_later_than(self, ceiling: i32) -> Self {
        Self {
            end: self.end.min(ceiling),
            ..self
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length in minutes, zero for an empty window
    pub const fn duration(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.end as i64 - self.start as i64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted() {
        assert!(Window::new(10, 10).is_none());
        assert!(Window::new(11, 10).is_none());
        assert!(Window::new(0, i32::MAX).is_some());
    }

    #[test]
    fn test_half_open() {
        let window = Window::new(100, 200).unwrap();
        assert!(window.contains(100));
        assert!(window.contains(199));
        assert!(!window.contains(200));
        assert!(!window.contains(99));
    }

    #[test]
    fn test_clamping() {
        let window = Window::new(0, 1_000).unwrap();
        let clamped = window.start_no_earlier_than(100).end_no_later_than(500);

        assert_eq!(clamped, Window { start: 100, end: 500 });
        assert_eq!(clamped.duration(), 400);
        assert_eq!(window.start_no_earlier_than(-5).start, 0);

        let emptied = window.start_no_earlier_than(2_000);
        assert!(emptied.is_empty());
        assert_eq!(emptied.duration(), 0);
    }

    #[test]
    fn test_full_range_duration() {
        let window = Window::new(0, i32::MAX).unwrap();
        assert_eq!(window.duration(), i32::MAX as i64);
    }
}
