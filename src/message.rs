use crate::traits::ItemRef;

/// One incremental browse request.
///
/// Clients issue these repeatedly against the same session as the user
/// pages, re-sorts, or re-filters; the session memoizes whatever carried
/// over from the previous request. How a request is encoded on the wire is
/// the caller's concern — only the field semantics matter here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Path of the element to browse, relative to the working directory.
    /// A leading `/` anchors at the root; empty means the working
    /// directory itself.
    pub path: String,

    /// Sort method: `""` for the default folders-first split, `"unsorted"`
    /// for plain enumeration order, anything else is a sort key handed to
    /// [`Item::compare_by`](crate::Item::compare_by).
    pub sort: String,

    /// Reverse the sorted order.
    pub reverse: bool,

    /// Include hidden items.
    pub hidden: bool,

    /// Regular expression a non-folder item's full name must match.
    /// Empty disables pattern filtering. Folders always pass.
    pub regex: String,

    /// Zero-based index of the first item to return, counted after
    /// filtering.
    pub first: usize,

    /// Maximum number of items to return. `0` means unbounded.
    pub number: usize,
}

/// Reply to one [`Request`].
#[derive(Debug, Clone)]
pub struct Reply {
    /// The request path, echoed back.
    pub path: String,

    /// The request's `first` index, echoed back.
    pub first: usize,

    /// Total number of items surviving the filters — what the client
    /// would see if it scrolled to the end, independent of the requested
    /// window.
    pub total: usize,

    /// The items in the requested window, at most `number` of them.
    /// Handles are shared with the session's enumeration buffer and stay
    /// alive for as long as the reply holds them.
    pub items: Vec<ItemRef>,
}
