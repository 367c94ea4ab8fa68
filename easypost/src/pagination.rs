//! Cursor pagination over list endpoints.
//!
//! Collections come back newest first, so the last item on a page is the
//! oldest one seen so far and its ID is the cursor for the next request
//! (`before_id`). Only the cursor and an optional page size are sent; any
//! other filters from the original list call are not carried forward.

use crate::error::{EasyPostError, Result};
use crate::types::ListOptions;

/// An entity that carries a server-assigned ID.
pub trait HasId {
    fn id(&self) -> Option<&str>;
}

/// One page of a list endpoint.
pub trait Paginated {
    type Item: HasId;

    fn items(&self) -> &[Self::Item];

    fn has_more(&self) -> bool;

    /// True when the server reported no further pages.
    fn is_exhausted(&self) -> bool {
        !self.has_more()
    }
}

/// Compute the query for the page after `page`.
///
/// `page_size` of `None` or `Some(0)` leaves the size to the server default.
/// `has_more` is not consulted: an empty page is the only local stop
/// condition.
///
/// # Errors
///
/// - `EasyPostError::EndOfPagination` if `page` has no items.
/// - `EasyPostError::InvalidRequest` if the last item has no ID.
pub fn next_page_options<P: Paginated>(page: &P, page_size: Option<u32>) -> Result<ListOptions> {
    let last = page.items().last().ok_or(EasyPostError::EndOfPagination)?;
    let last_id = last
        .id()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| EasyPostError::InvalidRequest("last item on page has no id".into()))?;

    Ok(ListOptions {
        before_id: Some(last_id.to_string()),
        page_size: page_size.filter(|&n| n > 0),
        ..Default::default()
    })
}
