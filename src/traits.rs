use std::cmp::Ordering;
use std::sync::Arc;

/// Shared handle to an [`Element`].
///
/// Elements are owned by whichever provider created them and shared by
/// reference count — the session's prefix cache, the last-enumeration
/// buffer, and any outstanding reply may all hold the same instance.
pub type ElementRef = Arc<dyn Element>;

/// Shared handle to an [`Item`].
pub type ItemRef = Arc<dyn Item>;

/// A node in the browsable namespace tree.
///
/// Implement this to expose anything hierarchical — filesystem directories,
/// in-memory object graphs, archive contents, remote resources. The engine
/// never asks an element for anything but its children; what an element
/// *is* stays entirely on the provider side.
///
/// # Object Safety
///
/// `Element` is object-safe. Sessions and the prefix cache store elements
/// as `Arc<dyn Element>`, so `children()` returns a boxed iterator rather
/// than `impl Iterator` (which would not be object-safe).
///
/// # Thread Safety
///
/// `Send + Sync` are required so the same element tree can be shared
/// across independent sessions. A single session is single-writer and
/// never calls an element concurrently with itself.
pub trait Element: Send + Sync {
    /// Return a fresh iterator over this element's children, or `None` if
    /// the element is not a container (a leaf).
    ///
    /// Called once per traversal step and once per enumeration — the
    /// iterator is always consumed within that single call, so it may
    /// borrow from `self`.
    fn children(&self) -> Option<Box<dyn ChildIter + '_>>;
}

/// Lazy cursor over one element's children.
///
/// Starts positioned *before* the first child; `advance` or `find` must
/// return `true` before `name`, `element`, or `item` may be called.
///
/// # Error Handling
///
/// There is no error channel here on purpose: a child that cannot be
/// produced is simply not there, and the engine reports the unresolved
/// segment as [`BrowseError::PathNotFound`](crate::BrowseError::PathNotFound).
/// Providers that want to surface I/O trouble should log it themselves.
pub trait ChildIter {
    /// Move to the next child. Returns `false` when exhausted.
    fn advance(&mut self) -> bool;

    /// Position the cursor at the child with the given name.
    ///
    /// The default implementation scans forward with [`advance`](Self::advance);
    /// providers with an index should override it to avoid touching every
    /// sibling. Path resolution calls this on a fresh iterator.
    fn find(&mut self, name: &str) -> bool {
        while self.advance() {
            if self.name() == name {
                return true;
            }
        }
        false
    }

    /// Name of the current child.
    fn name(&self) -> &str;

    /// The current child as an element, or `None` if the provider cannot
    /// produce one (the child then cannot be descended into).
    fn element(&self) -> Option<ElementRef>;

    /// Materialize a descriptor of the current child.
    ///
    /// This is the expensive call — it may touch backing storage — and is
    /// only issued during enumeration, never during path resolution.
    fn item(&self) -> ItemRef;
}

/// Materialized, sortable, filterable descriptor of one child.
///
/// Identity is stable only within one enumeration; a re-enumeration
/// produces fresh items.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use treenav::Item;
///
/// struct FileItem { name: String, size: u64 }
///
/// impl Item for FileItem {
///     fn name(&self) -> &str { &self.name }
///     fn is_folder(&self) -> bool { false }
///     fn is_hidden(&self) -> bool { self.name.starts_with('.') }
///     fn compare_by(&self, other: &dyn Item, key: &str) -> Ordering {
///         // Unknown keys fall back to name order.
///         match key {
///             "size" => self.size.cmp(&other.size_hint().unwrap_or(0)),
///             _ => self.name.as_str().cmp(other.name()),
///         }
///     }
///     fn size_hint(&self) -> Option<u64> { Some(self.size) }
/// }
/// ```
pub trait Item: Send + Sync {
    /// The child's name, as used for pattern filtering and display.
    fn name(&self) -> &str;

    /// Whether the child is itself a container.
    ///
    /// Folder items sort ahead of non-folders in the default ordering and
    /// are exempt from name-pattern filtering.
    fn is_folder(&self) -> bool;

    /// Whether the child is hidden. Hidden items are dropped unless the
    /// request asks for them.
    fn is_hidden(&self) -> bool;

    /// Compare against another item under the named sort key.
    ///
    /// The engine never interprets the key — it is passed verbatim from
    /// the request so providers can sort on attributes the core knows
    /// nothing about.
    fn compare_by(&self, other: &dyn Item, key: &str) -> Ordering;

    /// Size of the underlying child, if the provider tracks one.
    ///
    /// A convenience for cross-provider `compare_by` implementations; the
    /// engine itself never reads it.
    fn size_hint(&self) -> Option<u64> {
        None
    }
}

impl std::fmt::Debug for dyn Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Element")
    }
}

impl std::fmt::Debug for dyn Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("name", &self.name())
            .field("is_folder", &self.is_folder())
            .field("is_hidden", &self.is_hidden())
            .finish()
    }
}
