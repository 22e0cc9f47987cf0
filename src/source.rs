use crate::errors::SourceError;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Provider of the complete input buffer handed to the parser
pub trait ByteSource {
    /// Human readable name used in log lines.
    fn name(&self) -> String;

    /// Read every remaining byte of the source.
    fn read_all(&mut self) -> io::Result<Vec<u8>>;
}

/// Local file wrapper
pub struct LocalFile {
    path: PathBuf,
    file: std::fs::File,
}

impl LocalFile {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = std::fs::File::open(&path)?;
        Ok(LocalFile { path, file })
    }
}

impl ByteSource for LocalFile {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_all(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// Buffer already held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    data: Vec<u8>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

impl ByteSource for MemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_all(&mut self) -> io::Result<Vec<u8>> {
        Ok(std::mem::take(&mut self.data))
    }
}

/// True when `path` carries a `.srt` extension, in any letter case.
pub fn is_srt<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("srt"))
        .unwrap_or(false)
}

/// Open a `.srt` file for reading, refusing any other extension.
pub fn open_srt_file<P: AsRef<Path>>(path: P) -> Result<LocalFile, SourceError> {
    let path = path.as_ref();
    if !is_srt(path) {
        return Err(SourceError::UnsupportedExtension(
            path.display().to_string(),
        ));
    }
    Ok(LocalFile::open(path)?)
}

/// Read the full contents of a `.srt` file.
pub fn read_srt_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, SourceError> {
    Ok(open_srt_file(path)?.read_all()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_is_srt() {
        assert!(is_srt("movie.srt"));
        assert!(is_srt("dir/Movie.SRT"));
        assert!(!is_srt("movie.vtt"));
        assert!(!is_srt("srt"));
        assert!(!is_srt("movie.srt.bak"));
    }

    #[test]
    fn test_read_srt_file() -> Result<(), SourceError> {
        let mut file = tempfile::Builder::new().suffix(".srt").tempfile()?;
        file.write_all(b"1\n00:00:01,000 --> 00:00:02,000\nhi\n")?;
        let data = read_srt_file(file.path())?;
        assert!(data.starts_with(b"1\n"));
        Ok(())
    }

    #[test]
    fn test_wrong_extension_is_rejected() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        match read_srt_file(file.path()) {
            Err(SourceError::UnsupportedExtension(p)) => assert!(p.ends_with(".txt")),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.srt");
        assert!(matches!(read_srt_file(path), Err(SourceError::Io(_))));
    }

    #[test]
    fn test_memory_source() -> io::Result<()> {
        let mut src = MemorySource::new("inline", "1\n");
        assert_eq!(src.name(), "inline");
        assert_eq!(src.read_all()?, b"1\n");
        Ok(())
    }
}
