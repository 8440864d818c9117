/// A named buffer to be written into an archive.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub filename: String,
    pub content: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(filename: String, content: Vec<u8>) -> Self {
        Self { filename, content }
    }
}
