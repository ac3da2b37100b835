//! Local-disk datastore backend: one JSON file per record.

use std::io;
use std::path::PathBuf;
use std::{fs, path};

use bytes::Bytes;

use blockstore_record_store::{Namespace, RecordError, RecordReader, RecordWriter};

/// A record store keeping one file per record under a root directory.
///
/// Records are stored verbatim at `<root>/<namespace>/<key>.json`. The
/// layers above only ever write JSON payloads, so the extension is
/// accurate, but this backend does not parse or validate the bytes.
///
/// Handles are cheap to clone; clones share the same root directory.
/// There is no file locking and no transactional isolation - concurrent
/// writers to the same key are last-write-wins.
#[derive(Clone)]
pub struct JsonFileDatastore {
    root: PathBuf,
}

impl JsonFileDatastore {
    /// Open a datastore rooted at `root`, creating the directory if needed.
    ///
    /// Logs a one-time advisory that this backend performs no transactional
    /// locking, so multi-step sequences in the layers above run unisolated.
    pub fn open(root: impl Into<PathBuf>) -> Result<JsonFileDatastore, RecordError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let root = root.canonicalize()?;

        log::warn!(
            "datastore at {} has no transactional locking; concurrent check-then-write \
             sequences run unisolated",
            root.display()
        );

        Ok(JsonFileDatastore { root })
    }

    fn file_path(&self, namespace: Namespace, key: &str) -> Result<PathBuf, RecordError> {
        // Keys are dot-joined identifier and hex segments, which are safe
        // file names. Reject anything that could traverse out of the root.
        if key.is_empty() || key.contains(path::MAIN_SEPARATOR) || key.contains('/') {
            return Err(RecordError::Transport(Box::new(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("record key not usable as a file name: {:?}", key),
            ))));
        }

        Ok(self
            .root
            .join(namespace.as_str())
            .join(format!("{}.json", key)))
    }
}

impl RecordReader for JsonFileDatastore {
    fn get(&mut self, namespace: Namespace, key: &str) -> Result<Option<Bytes>, RecordError> {
        let file_path = self.file_path(namespace, key)?;
        log::debug!("Reading {}...", file_path.display());

        match fs::read(&file_path) {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl RecordWriter for JsonFileDatastore {
    fn put(&mut self, namespace: Namespace, key: &str, record: Bytes) -> Result<(), RecordError> {
        let file_path = self.file_path(namespace, key)?;
        log::debug!("Writing {}...", file_path.display());

        fs::create_dir_all(self.root.join(namespace.as_str()))?;
        fs::write(&file_path, &record)?;
        Ok(())
    }

    fn delete(&mut self, namespace: Namespace, key: &str) -> Result<(), RecordError> {
        let file_path = self.file_path(namespace, key)?;
        log::debug!("Deleting {}...", file_path.display());

        match fs::remove_file(&file_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
