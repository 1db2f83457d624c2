//! Five-row paging over the filtered trip table.

use crate::dataset::Trip;

/// Rows shown per page of raw data.
pub const PAGE_SIZE: usize = 5;

/// Returns the page of up to [`PAGE_SIZE`] rows starting at `offset`,
/// together with the offset of the page after it.
pub fn next_page(trips: &[Trip], offset: usize) -> (&[Trip], usize) {
    let start = offset.min(trips.len());
    let end = (start + PAGE_SIZE).min(trips.len());
    (&trips[start..end], end)
}
