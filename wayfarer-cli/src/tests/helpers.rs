//! Test helpers for writing datasets into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Four countries across two continents and three cities, two of them in
/// Japan.
pub(super) const DATASET: &str = r#"{
    "countries": [
        {
            "id": 1,
            "name": "Thailand",
            "continent": "Asia",
            "mood": ["beach", "food", "affordable"],
            "weeklyBudget": 800
        },
        {
            "id": 2,
            "name": "Vietnam",
            "continent": "Asia",
            "mood": ["beach", "food", "party"],
            "weeklyBudget": 900
        },
        {"id": 3, "name": "Austria", "continent": "Europe", "mood": ["ski"]},
        {"id": 4, "name": "Japan", "continent": "Asia", "mood": ["historic"]}
    ],
    "cities": [
        {"id": 10, "name": "Kyoto", "country": 4, "mood": ["historic", "calm"]},
        {"id": 11, "name": "Osaka", "country": 4, "mood": ["food", "historic"]},
        {"id": 20, "name": "Bangkok", "country": 1, "mood": ["nightlife", "food"]}
    ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory holding a dataset file.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `contents` to `name` inside the workspace and return its path.
    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    pub(super) fn dataset(&self) -> Utf8PathBuf {
        self.write("destinations.json", DATASET)
    }
}
