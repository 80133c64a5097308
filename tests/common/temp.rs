use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

/// Throwaway project tree, removed on drop.
#[derive(Debug)]
pub struct TempProject {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempProject {
    pub fn new() -> Self {
        let dir = tempfile::Builder::new().prefix("project_stats_").tempdir().unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Writes `lines` numbered lines, each terminated by `\n`.
    pub fn write_lines(&self, rel: &str, lines: usize) -> PathBuf {
        let contents: String = (1..=lines).map(|i| format!("line {i}\n")).collect();
        self.write_file(rel, &contents)
    }

    pub fn set_modified(&self, rel: &str, time: SystemTime) {
        let file = File::options().write(true).open(self.dir.path().join(rel)).unwrap();
        file.set_modified(time).unwrap();
    }

    /// Pins the modification time to `secs` after the Unix epoch.
    pub fn set_modified_at(&self, rel: &str, secs: u64) {
        self.set_modified(rel, UNIX_EPOCH + Duration::from_secs(secs));
    }
}
