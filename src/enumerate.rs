use log::debug;

use crate::error::BrowseError;
use crate::traits::{Element, ItemRef};

/// Maximum number of items materialized from one element.
///
/// Guardrail against unbounded listings — a container with more children
/// than this yields a truncated, incomplete enumeration rather than an
/// ever-growing buffer.
pub(crate) const MAX_ITEMS: usize = 10_000;

/// A materialized child list.
pub(crate) struct Enumeration {
    pub items: Vec<ItemRef>,
    /// `false` when the listing was cut off at [`MAX_ITEMS`].
    pub complete: bool,
}

/// Materialize the children of `element`.
///
/// Expensive — `ChildIter::item` may touch backing storage per child — so
/// the session only calls this when the browsed element changed or the
/// previous enumeration is empty. `at` is the display path used in error
/// reporting.
pub(crate) fn enumerate(element: &dyn Element, at: &str) -> Result<Enumeration, BrowseError> {
    let mut iter = element
        .children()
        .ok_or_else(|| BrowseError::NotAContainer(at.to_owned()))?;

    let mut items = Vec::new();
    let mut complete = true;

    while iter.advance() {
        if items.len() == MAX_ITEMS {
            // The item that would overflow is not materialized.
            complete = false;
            break;
        }
        items.push(iter.item());
    }

    debug!(
        "enumerate `{}`: {} items{}",
        at,
        items.len(),
        if complete { "" } else { " (truncated)" }
    );

    Ok(Enumeration { items, complete })
}
