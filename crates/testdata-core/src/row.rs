//! Synthetic row model.
//!
//! A [`Row`] is fully determined by its 1-based index. Rows are produced
//! lazily by [`RowGenerator`] and written straight to the sink, so no table
//! is ever held in memory.

use serde::Serialize;

/// Column names, in output order.
pub const COLUMNS: [&str; 6] = ["id", "name", "email", "amount", "status", "date"];

/// Offset added to the row index to form `amount`.
const AMOUNT_BASE: u64 = 100;

/// Row status, alternating by index parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Pending,
}

impl Status {
    /// `Active` for even indices, `Pending` for odd ones.
    pub fn for_index(index: u64) -> Self {
        if index % 2 == 0 {
            Self::Active
        } else {
            Self::Pending
        }
    }
}

/// One synthetic record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row<'a> {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub amount: u64,
    pub status: Status,
    pub date: &'a str,
}

impl<'a> Row<'a> {
    /// Derive the row for a 1-based `index`.
    ///
    /// `amount` saturates at `u64::MAX` for indices within 100 of the top.
    pub fn new(index: u64, date: &'a str) -> Self {
        Self {
            id: index,
            name: format!("User_{index}"),
            email: format!("user{index}@example.com"),
            amount: AMOUNT_BASE.saturating_add(index),
            status: Status::for_index(index),
            date,
        }
    }
}

/// Yields `rows` consecutive rows, starting at index 1 unless told otherwise.
#[derive(Debug, Clone)]
pub struct RowGenerator<'a> {
    next: u64,
    remaining: u64,
    date: &'a str,
}

impl<'a> RowGenerator<'a> {
    pub fn new(rows: u64, date: &'a str) -> Self {
        Self::starting_at(1, rows, date)
    }

    /// Yield `rows` rows whose ids begin at `start`.
    pub fn starting_at(start: u64, rows: u64, date: &'a str) -> Self {
        Self {
            next: start,
            remaining: rows,
            date,
        }
    }
}

impl<'a> Iterator for RowGenerator<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let row = Row::new(self.next, self.date);
        self.next = self.next.wrapping_add(1);
        self.remaining -= 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}
