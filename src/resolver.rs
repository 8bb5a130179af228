use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::error::BrowseError;
use crate::path::ElementPath;
use crate::traits::ElementRef;

// ---------------------------------------------------------------------------
// PrefixCache
// ---------------------------------------------------------------------------

/// Memo of previously resolved absolute paths.
///
/// Contains only prefixes actually visited while resolving some request.
/// Grown monotonically; never pruned except by a full session reset. Not
/// invalidated when the underlying namespace mutates — a cached element
/// may go stale, which is a documented limitation of the engine rather
/// than an error.
pub(crate) type PrefixCache = HashMap<ElementPath, ElementRef>;

// ---------------------------------------------------------------------------
// resolve()
// ---------------------------------------------------------------------------

/// Resolve `path` starting from `top`, reusing and growing the cache.
///
/// Picks the cached entry that is the longest true prefix of `path`, then
/// walks the remaining segments through each element's child iterator,
/// inserting every newly visited prefix. Resolving the same path twice
/// with an unchanged cache therefore performs no traversal at all on the
/// second call — the full path is itself a cache entry by then.
pub(crate) fn resolve(
    top: &ElementRef,
    path: &[String],
    cache: &mut PrefixCache,
) -> Result<ElementRef, BrowseError> {
    if path.is_empty() {
        return Ok(Arc::clone(top));
    }

    // Longest cached prefix wins; ties are impossible since keys are unique.
    let mut pos = 0;
    let mut elem = Arc::clone(top);
    for (key, cached) in cache.iter() {
        if key.len() > pos && key.len() <= path.len() && key[..] == path[..key.len()] {
            pos = key.len();
            elem = Arc::clone(cached);
        }
    }

    debug!(
        "resolve `{}`: {} of {} segments cached",
        path.join("/"),
        pos,
        path.len()
    );

    while pos < path.len() {
        let segment = &path[pos];
        let child = {
            let mut iter = elem
                .children()
                .ok_or_else(|| BrowseError::PathNotFound(path.join("/")))?;
            if !iter.find(segment) {
                return Err(BrowseError::PathNotFound(path.join("/")));
            }
            iter.element()
                .ok_or_else(|| BrowseError::PathNotFound(path.join("/")))?
        };

        elem = child;
        cache.insert(path[..=pos].to_vec(), Arc::clone(&elem));
        pos += 1;
    }

    Ok(elem)
}
