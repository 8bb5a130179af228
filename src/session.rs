use std::sync::Arc;

use log::debug;

use crate::enumerate;
use crate::error::BrowseError;
use crate::message::{Reply, Request};
use crate::path::{decompose, ElementPath};
use crate::resolver::{self, PrefixCache};
use crate::traits::{ElementRef, ItemRef};
use crate::view::{self, SortMethod};

// ---------------------------------------------------------------------------
// BrowseSession
// ---------------------------------------------------------------------------

/// Stateful browsing façade over one namespace tree.
///
/// Holds the working path, the resolution prefix cache, and a single-slot
/// memo of the last request: the resolved element, its materialized
/// children, and the sorted order. Repeated requests against the same
/// element (paging, re-filtering) reuse the memo instead of re-walking
/// the namespace; only filter and pagination run on every request.
///
/// # Thread Safety
///
/// One session serves one request at a time — the memo is not guarded.
/// Run as many independent sessions as you like over the same element
/// tree, each with its own cache and memo.
///
/// # Staleness
///
/// The prefix cache and the enumeration memo are never invalidated when
/// the underlying namespace mutates. A mutated namespace may keep serving
/// stale elements until [`set_top_element`](Self::set_top_element) or
/// [`clear_cache`](Self::clear_cache) is called — a deliberate
/// performance tradeoff, not an error the engine reports.
pub struct BrowseSession {
    top: ElementRef,
    working_path: ElementPath,
    cache: PrefixCache,

    // Single-slot memo of the last request.
    last: Option<(ElementPath, ElementRef)>,
    last_items: Vec<ItemRef>,
    last_complete: bool,
    last_order: Vec<usize>,
    last_sort: String,
    last_reverse: bool,
}

impl BrowseSession {
    /// Create a session rooted at `top`, with an empty working path.
    pub fn new(top: ElementRef) -> Self {
        Self {
            top,
            working_path: ElementPath::new(),
            cache: PrefixCache::new(),
            last: None,
            last_items: Vec::new(),
            last_complete: false,
            last_order: Vec::new(),
            last_sort: String::new(),
            last_reverse: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Install a new root element. Full reset: working path, prefix
    /// cache, and the last-request memo are all cleared.
    pub fn set_top_element(&mut self, top: ElementRef) {
        self.top = top;
        self.cache.clear();
        self.set_working_directory("");
    }

    /// Change the working directory, given as a path string resolved
    /// against the root (not against the current working directory).
    pub fn set_working_directory(&mut self, strpath: &str) {
        let path = decompose(strpath, &self.working_path, false);
        self.set_working_path(path);
    }

    /// Change the working path directly.
    ///
    /// Resets the last-request memo but keeps the prefix cache — cache
    /// keys are absolute paths from the root and stay valid.
    pub fn set_working_path(&mut self, path: ElementPath) {
        self.working_path = path;
        self.reset_last_request();
    }

    /// The current working path.
    pub fn working_path(&self) -> &[String] {
        &self.working_path
    }

    /// Clear the memoized last request: resolved element, materialized
    /// children, and sorted order. The prefix cache is untouched.
    pub fn reset_last_request(&mut self) {
        self.last = None;
        self.last_items.clear();
        self.last_complete = false;
        self.last_order.clear();
        self.last_sort.clear();
        self.last_reverse = false;
    }

    /// Drop every prefix-cache entry. The escape hatch when the
    /// underlying namespace has mutated and cached elements went stale.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Whether the last enumeration covered every child, or was cut off
    /// at the materialization cap.
    pub fn last_complete(&self) -> bool {
        self.last_complete
    }

    // ── Resolution entry points ───────────────────────────────────────────

    /// Resolve a path string, relative to the working directory, to an
    /// element. Uses and grows the prefix cache.
    pub fn get_element(&mut self, strpath: &str) -> Result<ElementRef, BrowseError> {
        let path = decompose(strpath, &self.working_path, true);
        resolver::resolve(&self.top, &path, &mut self.cache)
    }

    /// Resolve a segment path from the root to an element. Uses and grows
    /// the prefix cache.
    pub fn get_element_from_top(&mut self, path: &[String]) -> Result<ElementRef, BrowseError> {
        resolver::resolve(&self.top, path, &mut self.cache)
    }

    // ── Request processing ────────────────────────────────────────────────

    /// Serve one browse request.
    ///
    /// Resolves the request path (cache-assisted), re-enumerates children
    /// only if the browsed element changed, re-sorts only if the sort
    /// parameters changed, then filters and paginates per the request.
    ///
    /// # Errors
    ///
    /// [`BrowseError::PathNotFound`] when a path segment fails to
    /// resolve, [`BrowseError::NotAContainer`] when the resolved element
    /// has no children to list, [`BrowseError::MalformedPattern`] when
    /// the request's name pattern is not a valid regular expression.
    pub fn process_request(&mut self, request: &Request) -> Result<Reply, BrowseError> {
        let path = decompose(&request.path, &self.working_path, true);
        let shown = path.join("/");
        debug!(
            "request `{}`: sort `{}` first {} number {}",
            shown, request.sort, request.first, request.number
        );

        let memoized = match &self.last {
            Some((last_path, elem)) if *last_path == path => Some(Arc::clone(elem)),
            _ => None,
        };
        let element = match memoized {
            Some(elem) => elem,
            None => {
                let elem = resolver::resolve(&self.top, &path, &mut self.cache)?;
                self.reset_last_request();
                self.last = Some((path, Arc::clone(&elem)));
                elem
            }
        };

        if self.last_items.is_empty() {
            let enumeration = enumerate::enumerate(&*element, &shown)?;
            self.last_items = enumeration.items;
            self.last_complete = enumeration.complete;
            self.last_order.clear();
            self.last_sort.clear();
            self.last_reverse = false;
        }

        if self.last_order.len() != self.last_items.len()
            || self.last_sort != request.sort
            || self.last_reverse != request.reverse
        {
            let method = SortMethod::parse(&request.sort);
            debug!("re-sort {} items, {:?}", self.last_items.len(), method);
            self.last_order = view::sort_order(&self.last_items, &method, request.reverse);
            self.last_sort = request.sort.clone();
            self.last_reverse = request.reverse;
        }

        // Filters are cheap and vary per request — always re-run them
        // over the memoized order.
        let pattern = view::compile_pattern(&request.regex)?;
        let (items, total) =
            view::filter_page(&self.last_items, &self.last_order, request, pattern.as_ref());

        Ok(Reply {
            path: request.path.clone(),
            first: request.first,
            total,
            items,
        })
    }
}
