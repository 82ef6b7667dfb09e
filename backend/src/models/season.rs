use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed date range used to clip the chart's time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SeasonWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls inside the window (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Intersect the span `[start, end]` with the window.
    ///
    /// Returns `None` when either bound is missing, the span is inverted, or it
    /// lies entirely outside the window.
    pub fn clip(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Option<(NaiveDate, NaiveDate)> {
        let (start, end) = (start?, end?);
        if start > end || end < self.start || start > self.end {
            return None;
        }
        Some((start.max(self.start), end.min(self.end)))
    }
}
