// crates/dinedb-core/src/loader/common_io.rs
use crate::error::{DineError, Result};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// On-disk payload, decided from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    Json,
    Binary,
}

/// How a dataset file is laid out: payload plus optional gzip wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFormat {
    pub payload: Payload,
    pub gzip: bool,
}

impl FileFormat {
    /// `*.bin` / `*.bin.gz` are binary caches, everything else is JSON.
    pub fn detect(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        let (stem, gzip) = match name.strip_suffix(".gz") {
            Some(stem) => (stem.to_string(), true),
            None => (name, false),
        };

        let payload = if stem.ends_with(".bin") {
            Payload::Binary
        } else {
            Payload::Json
        };

        Self { payload, gzip }
    }
}

/// Opens a file, buffers it, and unwraps gzip when asked to.
pub fn open_stream(path: &Path, gzip: bool) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        DineError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !gzip {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(DineError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

/// A cache file being written, optionally gzip-wrapped.
///
/// Call [`CacheWriter::finish`] when done: it writes the gzip trailer and
/// flushes, reporting any failure instead of leaving it to `Drop`.
pub enum CacheWriter {
    Plain(BufWriter<File>),
    #[cfg(feature = "compact")]
    Gzip(GzEncoder<BufWriter<File>>),
}

impl CacheWriter {
    pub fn finish(self) -> Result<()> {
        let mut inner = match self {
            CacheWriter::Plain(w) => w,
            #[cfg(feature = "compact")]
            CacheWriter::Gzip(enc) => enc.finish()?,
        };
        inner.flush()?;
        Ok(())
    }
}

impl Write for CacheWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            CacheWriter::Plain(w) => w.write(buf),
            #[cfg(feature = "compact")]
            CacheWriter::Gzip(enc) => enc.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            CacheWriter::Plain(w) => w.flush(),
            #[cfg(feature = "compact")]
            CacheWriter::Gzip(enc) => enc.flush(),
        }
    }
}

/// Creates a file for writing, gzip-wrapped when asked to.
pub fn create_stream(path: &Path, gzip: bool) -> Result<CacheWriter> {
    #[cfg(not(feature = "compact"))]
    if gzip {
        return Err(DineError::InvalidData(
            "Gzip requested but 'compact' disabled".into(),
        ));
    }

    let writer = BufWriter::new(File::create(path)?);

    #[cfg(feature = "compact")]
    if gzip {
        return Ok(CacheWriter::Gzip(GzEncoder::new(writer, Compression::default())));
    }

    Ok(CacheWriter::Plain(writer))
}

/// `restaurants.json` -> `restaurants.json.bin`
pub fn get_cache_path(source: &Path) -> PathBuf {
    let filename = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "catalog".to_string());
    source.with_file_name(format!("{filename}.bin"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats_from_file_name() {
        let f = FileFormat::detect(Path::new("data/restaurants.json"));
        assert_eq!((f.payload, f.gzip), (Payload::Json, false));

        let f = FileFormat::detect(Path::new("restaurants.JSON.GZ"));
        assert_eq!((f.payload, f.gzip), (Payload::Json, true));

        let f = FileFormat::detect(Path::new("cache/catalog.bin.gz"));
        assert_eq!((f.payload, f.gzip), (Payload::Binary, true));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn finished_gzip_stream_is_complete() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.bin.gz");

        let mut writer = create_stream(&path, true).unwrap();
        writer.write_all(b"hello dinedb").unwrap();
        writer.finish().unwrap();

        let mut text = String::new();
        open_stream(&path, true)
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "hello dinedb");
    }

    #[test]
    fn creating_over_a_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(create_stream(dir.path(), false).is_err());
    }

    #[test]
    fn cache_path_sits_next_to_source() {
        assert_eq!(
            get_cache_path(Path::new("/tmp/restaurants.json")),
            PathBuf::from("/tmp/restaurants.json.bin")
        );
    }
}
