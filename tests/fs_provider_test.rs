//! End-to-end test with a filesystem-backed provider, the way an embedding
//! application would wire one up. The provider lives here on purpose —
//! treenav itself has no filesystem opinions.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use treenav::{ChildIter, Element, ElementRef, Item, ItemRef, Request};

// ---------------------------------------------------------------------------
// A minimal directory provider
// ---------------------------------------------------------------------------

struct DirElement(PathBuf);

struct DirChild {
    name: String,
    path: PathBuf,
    folder: bool,
    size: u64,
}

impl Element for DirElement {
    fn children(&self) -> Option<Box<dyn ChildIter + '_>> {
        let read = fs::read_dir(&self.0).ok()?;
        let mut entries: Vec<DirChild> = read
            .filter_map(|e| e.ok())
            .map(|e| {
                let meta = e.metadata().ok();
                DirChild {
                    name: e.file_name().to_string_lossy().into_owned(),
                    path: e.path(),
                    folder: meta.as_ref().map(|m| m.is_dir()).unwrap_or(false),
                    size: meta.map(|m| m.len()).unwrap_or(0),
                }
            })
            .collect();
        // Directory read order is platform-dependent; pin it down.
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Some(Box::new(DirIter { entries, pos: 0 }))
    }
}

struct DirIter {
    entries: Vec<DirChild>,
    pos: usize, // 0 = before the first entry
}

impl ChildIter for DirIter {
    fn advance(&mut self) -> bool {
        if self.pos < self.entries.len() {
            self.pos += 1;
            true
        } else {
            false
        }
    }
    fn name(&self) -> &str {
        &self.entries[self.pos - 1].name
    }
    fn element(&self) -> Option<ElementRef> {
        let child = &self.entries[self.pos - 1];
        Some(Arc::new(DirElement(child.path.clone())) as ElementRef)
    }
    fn item(&self) -> ItemRef {
        let child = &self.entries[self.pos - 1];
        Arc::new(DirItem {
            name: child.name.clone(),
            folder: child.folder,
            size: child.size,
        })
    }
}

struct DirItem {
    name: String,
    folder: bool,
    size: u64,
}

impl Item for DirItem {
    fn name(&self) -> &str {
        &self.name
    }
    fn is_folder(&self) -> bool {
        self.folder
    }
    fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
    fn compare_by(&self, other: &dyn Item, key: &str) -> std::cmp::Ordering {
        match key {
            "size" => self.size.cmp(&other.size_hint().unwrap_or(0)),
            _ => self.name.as_str().cmp(other.name()),
        }
    }
    fn size_hint(&self) -> Option<u64> {
        Some(self.size)
    }
}

/// tmp/
///   docs/
///     guide.md
///   readme.txt
///   data.csv
///   .secret
fn setup_test_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let docs = root.join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("guide.md"), "# guide").unwrap();
    fs::write(root.join("readme.txt"), "hello").unwrap();
    fs::write(root.join("data.csv"), "a,b,c").unwrap();
    fs::write(root.join(".secret"), "shh").unwrap();

    dir
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn lists_a_directory_folders_first() {
    let dir = setup_test_dir();
    let root: ElementRef = Arc::new(DirElement(dir.path().to_path_buf()));
    let mut session = treenav::session(root);

    let reply = session.process_request(&Request::default()).unwrap();
    let names: Vec<_> = reply.items.iter().map(|i| i.name().to_owned()).collect();

    assert_eq!(reply.total, 3, ".secret is hidden");
    assert_eq!(names, ["docs", "data.csv", "readme.txt"]);
}

#[test]
fn resolves_into_subdirectories() {
    let dir = setup_test_dir();
    let root: ElementRef = Arc::new(DirElement(dir.path().to_path_buf()));
    let mut session = treenav::session(root);

    let request = Request {
        path: "docs".into(),
        ..Request::default()
    };
    let reply = session.process_request(&request).unwrap();
    assert_eq!(reply.total, 1);
    assert_eq!(reply.items[0].name(), "guide.md");

    assert!(session.get_element("docs/guide.md").is_ok());
    assert!(session.get_element("docs/missing.md").is_err());
}

#[test]
fn pattern_filters_files_but_not_folders() {
    let dir = setup_test_dir();
    let root: ElementRef = Arc::new(DirElement(dir.path().to_path_buf()));
    let mut session = treenav::session(root);

    let request = Request {
        regex: r".*\.txt".into(),
        ..Request::default()
    };
    let reply = session.process_request(&request).unwrap();
    let names: Vec<_> = reply.items.iter().map(|i| i.name().to_owned()).collect();

    assert_eq!(names, ["docs", "readme.txt"]);
}

#[test]
fn hidden_files_shown_on_request() {
    let dir = setup_test_dir();
    let root: ElementRef = Arc::new(DirElement(dir.path().to_path_buf()));
    let mut session = treenav::session(root);

    let reply = session
        .process_request(&Request {
            hidden: true,
            ..Request::default()
        })
        .unwrap();
    assert_eq!(reply.total, 4);
}
