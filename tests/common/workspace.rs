use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary documentation tree for conversion tests
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create a new temporary workspace with an empty `docs` directory
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("docs")).expect("Failed to create docs dir");
        Self { dir }
    }

    /// Write a file under `docs`, creating parent directories as needed
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.docs().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.docs().join(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.docs().join(name).exists()
    }

    /// The `docs` root inside the workspace
    pub fn docs(&self) -> PathBuf {
        self.dir.path().join("docs")
    }

    pub fn root_path(&self) -> &Path {
        self.dir.path()
    }
}
