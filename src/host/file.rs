use log::warn;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File access for programs. Failures never stop the program: they read as
/// an empty string or `false` so scripts can test and then act.
pub trait FileSystem {
    fn read(&mut self, path: &str) -> String;
    fn exists(&mut self, path: &str) -> bool;
    fn write(&mut self, path: &str, content: &str) -> bool;
    fn append(&mut self, path: &str, content: &str) -> bool;
    fn delete(&mut self, path: &str) -> bool;
}

/// The local disk, with relative paths resolved against the program's
/// directory.
#[derive(Debug, Clone)]
pub struct LocalFiles {
    base: PathBuf,
}

impl Default for LocalFiles {
    fn default() -> LocalFiles {
        LocalFiles::new(".")
    }
}

impl LocalFiles {
    pub fn new<P: Into<PathBuf>>(base: P) -> LocalFiles {
        LocalFiles { base: base.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.base.join(p)
        }
    }

    fn degrade<T>(what: &str, path: &Path, result: std::io::Result<T>) -> Option<T> {
        match result {
            Ok(t) => Some(t),
            Err(e) => {
                warn!("{} {}: {}", what, path.display(), e);
                None
            }
        }
    }
}

impl FileSystem for LocalFiles {
    fn read(&mut self, path: &str) -> String {
        let path = self.resolve(path);
        LocalFiles::degrade("read", &path, fs::read_to_string(&path)).unwrap_or_default()
    }

    fn exists(&mut self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn write(&mut self, path: &str, content: &str) -> bool {
        let path = self.resolve(path);
        LocalFiles::degrade("write", &path, fs::write(&path, content)).is_some()
    }

    fn append(&mut self, path: &str, content: &str) -> bool {
        let path = self.resolve(path);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .and_then(|mut file| file.write_all(content.as_bytes()));
        LocalFiles::degrade("append", &path, result).is_some()
    }

    fn delete(&mut self, path: &str) -> bool {
        let path = self.resolve(path);
        LocalFiles::degrade("delete", &path, fs::remove_file(&path)).is_some()
    }
}
