use std::io;
use std::path::Path;

/// Port for reading artifact bytes.
pub trait ArtifactReader {
    /// Read the full contents of the file at `path`.
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;
}
