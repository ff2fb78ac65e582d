//! File-backed style sink.
//!
//! The CLI's stand-in for a document head: the injected payload becomes
//! `<data_dir>/<id>.css`, removal deletes it.

use std::fs;
use std::path::PathBuf;

use fable_render::StyleSink;

pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.css"))
    }
}

impl StyleSink for FileSink {
    fn inject(&mut self, id: &str, css: &str) {
        if let Err(e) = fs::write(self.path_for(id), css) {
            log::warn!("failed to write applied skin: {e}");
        }
    }

    fn remove(&mut self, id: &str) {
        let path = self.path_for(id);
        if let Err(e) = fs::remove_file(&path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            log::warn!("failed to remove applied skin: {e}");
        }
    }
}
