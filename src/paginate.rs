//! Fixed-size slices of a filtered table for raw-row display.

use crate::derive::{TripRecord, TripTable};

/// Rows returned per page.
pub const PAGE_SIZE: usize = 6;

/// Up to [`PAGE_SIZE`] rows starting at `row`. Empty once `row` is past the end.
pub fn page(table: &TripTable, row: usize) -> &[TripRecord] {
    let rows = table.rows();
    let start = row.min(rows.len());
    let end = row.saturating_add(PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

/// A caller-held cursor over a table, advancing one page per request.
#[derive(Debug)]
pub struct Pager<'a> {
    table: &'a TripTable,
    row: usize,
}

impl<'a> Pager<'a> {
    pub fn new(table: &'a TripTable) -> Self {
        Self::starting_at(table, 0)
    }

    pub fn starting_at(table: &'a TripTable, row: usize) -> Self {
        Pager { table, row }
    }

    /// Zero-based index of the next row to be shown.
    pub fn cursor(&self) -> usize {
        self.row
    }

    pub fn is_exhausted(&self) -> bool {
        self.row >= self.table.len()
    }

    /// Returns the next page and moves the cursor forward by [`PAGE_SIZE`].
    /// The cursor stays put once the table is exhausted.
    pub fn next_page(&mut self) -> &'a [TripRecord] {
        let rows = page(self.table, self.row);
        if !rows.is_empty() {
            self.row = self.row.saturating_add(PAGE_SIZE);
        }
        rows
    }
}

impl<'a> Iterator for Pager<'a> {
    type Item = &'a [TripRecord];

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        Some(self.next_page())
    }
}
