//! Line-oriented reading of a gzip-compressed text file.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{LoadError, LoadResult};

/// Leading magic bytes of every gzip stream (RFC 1952).
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// One step of line production from a [`GzipLineSource`].
///
/// End of input is an ordinary outcome of reading, not an error, so it
/// gets its own variant instead of living on the error channel.
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    /// A decoded text line, trailing `\r`/`\n` already stripped.
    Row(String),
    /// The input is exhausted.
    End,
}

/// Streaming reader that decompresses a gzip file and yields it line by line.
///
/// Dropping the source releases the decoder and the underlying file handle,
/// so a loader holding one cannot leak it on any exit path.
#[derive(Debug)]
pub struct GzipLineSource {
    reader: BufReader<GzDecoder<File>>,
}

impl GzipLineSource {
    /// Open a gzip-compressed file for line-wise reading.
    ///
    /// Fails with [`LoadError::NotFound`] when the path does not exist,
    /// [`LoadError::Format`] when the stream does not begin with the gzip
    /// magic bytes, and [`LoadError::Io`] for any other stat/open failure.
    pub fn open(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();

        if let Err(e) = std::fs::metadata(path) {
            if e.kind() == ErrorKind::NotFound {
                return Err(LoadError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            return Err(LoadError::Io(e));
        }

        let mut file = File::open(path)?;

        // Check the stream header up front so a mislabeled input fails at
        // open rather than on the first line read.
        let mut magic = [0u8; 2];
        match file.read_exact(&mut magic) {
            Ok(()) if magic == GZIP_MAGIC => {}
            Ok(()) => {
                return Err(LoadError::Format {
                    path: path.to_path_buf(),
                })
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(LoadError::Format {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(LoadError::Io(e)),
        }
        file.seek(SeekFrom::Start(0))?;

        Ok(Self {
            reader: BufReader::new(GzDecoder::new(file)),
        })
    }

    /// Produce the next decoded line, or [`Line::End`] once the input is
    /// exhausted.
    ///
    /// A final line without a trailing newline is still yielded. Read or
    /// decompression failures surface as [`LoadError::Io`].
    pub fn next_line(&mut self) -> LoadResult<Line> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(Line::End);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Line::Row(buf))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::{GzipLineSource, Line};
    use crate::error::LoadError;

    fn write_gz(dir: &tempfile::TempDir, name: &str, text: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let file = std::fs::File::create(&path).unwrap();
        let mut enc = GzEncoder::new(file, Compression::default());
        enc.write_all(text.as_bytes()).unwrap();
        enc.finish().unwrap();
        path
    }

    #[test]
    fn yields_lines_then_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_gz(&dir, "lines.tsv.gz", "first\r\nsecond\nthird");

        let mut src = GzipLineSource::open(&path).unwrap();
        assert_eq!(src.next_line().unwrap(), Line::Row("first".to_string()));
        assert_eq!(src.next_line().unwrap(), Line::Row("second".to_string()));
        // No trailing newline on the last line; it is still produced.
        assert_eq!(src.next_line().unwrap(), Line::Row("third".to_string()));
        assert_eq!(src.next_line().unwrap(), Line::End);
        assert_eq!(src.next_line().unwrap(), Line::End);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = GzipLineSource::open(dir.path().join("absent.tsv.gz")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn plain_text_file_is_rejected_at_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.tsv");
        std::fs::write(&path, "tconst\taverageRating\tnumVotes\n").unwrap();

        let err = GzipLineSource::open(&path).unwrap_err();
        assert!(matches!(err, LoadError::Format { .. }));
    }

    #[test]
    fn empty_file_is_rejected_at_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.gz");
        std::fs::write(&path, b"").unwrap();

        let err = GzipLineSource::open(&path).unwrap_err();
        assert!(matches!(err, LoadError::Format { .. }));
    }
}
