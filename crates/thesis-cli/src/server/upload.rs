use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use thesis_core::extraction::DocumentKind;
use uuid::Uuid;

/// An uploaded document written to disk for the duration of one request.
///
/// The file gets a fresh name so client-supplied filenames never reach the
/// filesystem. It is removed when this value is dropped, on success and on
/// every error path.
pub struct StagedUpload {
    file: NamedTempFile,
}

impl StagedUpload {
    pub fn write(dir: &Path, kind: DocumentKind, bytes: &[u8]) -> io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(&format!("upload-{}-", Uuid::new_v4()))
            .suffix(&format!(".{}", kind.extension()))
            .tempfile_in(dir)?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(StagedUpload { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_is_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let staged = StagedUpload::write(dir.path(), DocumentKind::Txt, b"hello").unwrap();
        let path = staged.path().to_path_buf();

        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("txt"));
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");

        drop(staged);
        assert!(!path.exists());
    }

    #[test]
    fn names_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let a = StagedUpload::write(dir.path(), DocumentKind::Pdf, b"a").unwrap();
        let b = StagedUpload::write(dir.path(), DocumentKind::Pdf, b"b").unwrap();
        assert_ne!(a.path(), b.path());
    }
}
