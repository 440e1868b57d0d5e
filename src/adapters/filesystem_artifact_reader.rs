use std::fs;
use std::io;
use std::path::Path;

use crate::ports::ArtifactReader;

/// Filesystem-based artifact reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemArtifactReader;

impl FilesystemArtifactReader {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactReader for FilesystemArtifactReader {
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}
