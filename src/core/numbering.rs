use chrono::NaiveDate;

use super::error::PosError;

/// Gapless receipt number sequence for one store.
///
/// Generates receipt numbers in the format
/// `{store_id}-{YYYYMMDD}-{sequential}`, e.g. "ST001-20240615-001".
/// The counter resets at the start of each business day; within a day
/// the sequence has no gaps.
#[derive(Debug, Clone)]
pub struct ReceiptNumberSequence {
    store_id: String,
    date: NaiveDate,
    next_number: u64,
    zero_pad: usize,
}

impl ReceiptNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(store_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            store_id: store_id.into(),
            date,
            next_number: 1,
            zero_pad: 3,
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(store_id: impl Into<String>, date: NaiveDate, next_number: u64) -> Self {
        Self {
            store_id: store_id.into(),
            date,
            next_number,
            zero_pad: 3,
        }
    }

    /// Set zero-padding width (default: 3, so "001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next receipt number.
    pub fn next_number(&mut self) -> String {
        let num = self.next_number;
        self.next_number += 1;
        self.render(num)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        self.render(self.next_number)
    }

    /// Business day of the sequence.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The next number that will be issued, without formatting.
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Advance to a new business day, resetting the counter to 1.
    pub fn advance_day(&mut self, new_date: NaiveDate) -> Result<(), PosError> {
        if new_date <= self.date {
            return Err(PosError::Numbering(format!(
                "new date {new_date} must be after current date {}",
                self.date
            )));
        }
        self.date = new_date;
        self.next_number = 1;
        Ok(())
    }

    /// Auto-advance the day if the given date is later.
    /// Returns true if the day was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        if date > self.date {
            self.date = date;
            self.next_number = 1;
            true
        } else {
            false
        }
    }

    fn render(&self, num: u64) -> String {
        format!(
            "{}-{}-{:0>width$}",
            self.store_id,
            self.date.format("%Y%m%d"),
            num,
            width = self.zero_pad
        )
    }
}
