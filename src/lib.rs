//! # treenav
//!
//! Hierarchical namespace browsing engine — generic, embeddable, zero opinions.
//!
//! treenav serves paginated, sorted, filtered views of a virtual tree of
//! named elements. It owns path resolution with prefix caching, capped lazy
//! child enumeration, the sort/filter/paginate pipeline, and the
//! request/reply protocol ([`Request`], [`Reply`]). It does **not** own
//! what an element *is* — filesystems, object stores, archives, and remote
//! resources plug in through the [`Element`], [`ChildIter`], and [`Item`]
//! traits.
//!
//! A [`BrowseSession`] memoizes the last request: repeated requests against
//! the same element (a UI paging or re-filtering) reuse the resolved
//! element, its child list, and the computed order instead of re-walking
//! the namespace.
//!
//! # Quick Start
//!
//! ```rust
//! use std::cmp::Ordering;
//! use std::sync::Arc;
//! use treenav::{ChildIter, Element, ElementRef, Item, ItemRef, Request};
//!
//! // A minimal in-memory provider for demonstration
//! struct Node {
//!     name: String,
//!     hidden: bool,
//!     children: Option<Vec<Arc<Node>>>, // None = leaf
//! }
//!
//! impl Element for Node {
//!     fn children(&self) -> Option<Box<dyn ChildIter + '_>> {
//!         let nodes = self.children.as_deref()?;
//!         Some(Box::new(NodeIter { nodes, pos: 0 }))
//!     }
//! }
//!
//! struct NodeIter<'a> {
//!     nodes: &'a [Arc<Node>],
//!     pos: usize, // 0 = before the first child
//! }
//!
//! impl ChildIter for NodeIter<'_> {
//!     fn advance(&mut self) -> bool {
//!         if self.pos < self.nodes.len() {
//!             self.pos += 1;
//!             true
//!         } else {
//!             false
//!         }
//!     }
//!     fn name(&self) -> &str {
//!         &self.nodes[self.pos - 1].name
//!     }
//!     fn element(&self) -> Option<ElementRef> {
//!         Some(Arc::clone(&self.nodes[self.pos - 1]) as ElementRef)
//!     }
//!     fn item(&self) -> ItemRef {
//!         let node = &self.nodes[self.pos - 1];
//!         Arc::new(NodeItem {
//!             name: node.name.clone(),
//!             folder: node.children.is_some(),
//!             hidden: node.hidden,
//!         })
//!     }
//! }
//!
//! struct NodeItem {
//!     name: String,
//!     folder: bool,
//!     hidden: bool,
//! }
//!
//! impl Item for NodeItem {
//!     fn name(&self) -> &str { &self.name }
//!     fn is_folder(&self) -> bool { self.folder }
//!     fn is_hidden(&self) -> bool { self.hidden }
//!     fn compare_by(&self, other: &dyn Item, _key: &str) -> Ordering {
//!         self.name.as_str().cmp(other.name())
//!     }
//! }
//!
//! fn leaf(name: &str, hidden: bool) -> Arc<Node> {
//!     Arc::new(Node { name: name.into(), hidden, children: None })
//! }
//!
//! let root: ElementRef = Arc::new(Node {
//!     name: String::new(),
//!     hidden: false,
//!     children: Some(vec![
//!         Arc::new(Node { name: "docs".into(), hidden: false, children: Some(Vec::new()) }),
//!         leaf("readme.txt", false),
//!         leaf(".secret", true),
//!     ]),
//! });
//!
//! let mut session = treenav::session(root);
//! let reply = session.process_request(&Request::default()).unwrap();
//!
//! assert_eq!(reply.total, 2); // .secret is hidden
//! assert_eq!(reply.items[0].name(), "docs"); // folders sort first
//! assert_eq!(reply.items[1].name(), "readme.txt");
//! ```
//!
//! # Requests
//!
//! Every [`Request`] field beyond `path` shapes the view: `sort` picks the
//! ordering (`""` = folders first, `"unsorted"` = enumeration order,
//! anything else is a provider-interpreted sort key), `reverse` flips it,
//! `hidden` admits hidden items, `regex` keeps only non-folders whose full
//! name matches, and `first`/`number` select the page. The reply's `total`
//! counts everything that survived the filters, not just the page.

#![forbid(unsafe_code)]

pub mod path;

mod enumerate;
mod error;
mod message;
mod resolver;
mod session;
mod traits;
mod view;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use error::BrowseError;
pub use message::{Reply, Request};
pub use path::ElementPath;
pub use session::BrowseSession;
pub use traits::{ChildIter, Element, ElementRef, Item, ItemRef};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a [`BrowseSession`] rooted at `top`.
///
/// Equivalent to [`BrowseSession::new`].
pub fn session(top: ElementRef) -> BrowseSession {
    BrowseSession::new(top)
}
