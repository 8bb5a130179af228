use std::sync::Arc;

use regex::Regex;

use crate::error::BrowseError;
use crate::message::Request;
use crate::traits::ItemRef;

// ---------------------------------------------------------------------------
// SortMethod
// ---------------------------------------------------------------------------

/// Sort dispatch, resolved once per request from the request's sort string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SortMethod {
    /// Folders first, enumeration order within each bucket. No comparator.
    Default,
    /// Plain enumeration order, folders and files interleaved as found.
    Unsorted,
    /// Keyed ordering, delegated to [`Item::compare_by`](crate::Item::compare_by).
    ByKey(String),
}

impl SortMethod {
    pub(crate) fn parse(sort: &str) -> Self {
        match sort {
            "" => SortMethod::Default,
            "unsorted" => SortMethod::Unsorted,
            key => SortMethod::ByKey(key.to_owned()),
        }
    }
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

/// Compute the display order as indices into the enumeration buffer.
///
/// The buffer itself is never reordered — items keep their enumeration
/// identity, and re-sorting is just recomputing this index vector.
pub(crate) fn sort_order(items: &[ItemRef], method: &SortMethod, reverse: bool) -> Vec<usize> {
    let mut order: Vec<usize> = match method {
        SortMethod::Default => {
            // Stable two-bucket split, not a keyed sort.
            let folders = (0..items.len()).filter(|&ix| items[ix].is_folder());
            let files = (0..items.len()).filter(|&ix| !items[ix].is_folder());
            folders.chain(files).collect()
        }
        SortMethod::Unsorted => (0..items.len()).collect(),
        SortMethod::ByKey(key) => {
            let mut order: Vec<usize> = (0..items.len()).collect();
            order.sort_by(|&a, &b| items[a].compare_by(&*items[b], key));
            order
        }
    };

    if reverse {
        order.reverse();
    }

    order
}

// ---------------------------------------------------------------------------
// Filter + paginate
// ---------------------------------------------------------------------------

/// Compile the request's name pattern, if any.
///
/// Anchored on both ends — the pattern must match the whole item name,
/// not a substring of it.
pub(crate) fn compile_pattern(pattern: &str) -> Result<Option<Regex>, BrowseError> {
    if pattern.is_empty() {
        return Ok(None);
    }
    Regex::new(&format!("^(?:{pattern})$"))
        .map(Some)
        .map_err(|source| BrowseError::MalformedPattern {
            pattern: pattern.to_owned(),
            source,
        })
}

/// Walk the sorted order, dropping filtered items and collecting the
/// requested window.
///
/// Returns the window and the total number of items that survived
/// filtering. The running index counts every surviving item whether or
/// not it lands in the window, so `first`/`number` address positions in
/// the filtered view and the total reflects what a client would see by
/// scrolling to the end.
pub(crate) fn filter_page(
    items: &[ItemRef],
    order: &[usize],
    request: &Request,
    pattern: Option<&Regex>,
) -> (Vec<ItemRef>, usize) {
    let mut page = Vec::new();
    let mut id = 0usize;

    for &ix in order {
        let item = &items[ix];

        if !request.hidden && item.is_hidden() {
            continue;
        }

        // Folders stay navigable even when their name doesn't match.
        if let Some(re) = pattern {
            if !item.is_folder() && !re.is_match(item.name()) {
                continue;
            }
        }

        if id >= request.first && (request.number == 0 || id < request.first + request.number) {
            page.push(Arc::clone(item));
        }

        id += 1;
    }

    (page, id)
}
