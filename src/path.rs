//! Path decomposition.
//!
//! Request paths arrive as strings; the engine works on ordered segment
//! sequences. Decomposition never fails — any string splits into *some*
//! path, and validity is decided later by resolution.

/// An ordered sequence of path segments. Empty means the root element.
pub type ElementPath = Vec<String>;

/// Split a path string into segments.
///
/// - A leading `/` anchors the path at the namespace root; the working
///   path is not applied even when `relative` is set.
/// - Otherwise, when `relative` is true the result is prefixed with
///   `working`.
/// - Consecutive slashes and a trailing slash produce no empty segments.
/// - An empty input yields the working path when `relative`, or an empty
///   path otherwise.
///
/// # Example
///
/// ```rust
/// use treenav::path::decompose;
///
/// let working = vec!["home".to_string()];
/// assert_eq!(decompose("/etc/hosts", &working, true), ["etc", "hosts"]);
/// assert_eq!(decompose("docs//a/", &working, true), ["home", "docs", "a"]);
/// assert_eq!(decompose("", &working, true), ["home"]);
/// ```
pub fn decompose(strpath: &str, working: &[String], relative: bool) -> ElementPath {
    let mut path = ElementPath::new();

    if relative && !strpath.starts_with('/') {
        path.extend(working.iter().cloned());
    }

    path.extend(
        strpath
            .split('/')
            .filter(|seg| !seg.is_empty())
            .map(str::to_owned),
    );

    path
}
