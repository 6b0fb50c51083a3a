//! Size of a piece of plot input.
//!
//! Text and paths that name a regular file report the file size in bytes.
//! Everything else reports how many elements it holds.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

pub trait DataLength {
    fn data_length(&self) -> u64;
}

/// Byte size of `input` when it names a file, its element count otherwise.
pub fn data_length<T: DataLength + ?Sized>(input: &T) -> u64 {
    input.data_length()
}

/// `Some(size)` for a regular file, `None` for anything else.
fn file_size(path: &Path) -> Option<u64> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Some(meta.len()),
        Ok(_) => None,
        Err(err) => {
            log::debug!("no file size for {:?}: {}", path, err);
            None
        }
    }
}

impl DataLength for str {
    fn data_length(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        file_size(Path::new(self)).unwrap_or_else(|| self.chars().count() as u64)
    }
}

impl DataLength for String {
    fn data_length(&self) -> u64 {
        self.as_str().data_length()
    }
}

impl DataLength for Path {
    fn data_length(&self) -> u64 {
        if self.as_os_str().is_empty() {
            return 0;
        }
        file_size(self).unwrap_or_else(|| self.components().count() as u64)
    }
}

impl DataLength for PathBuf {
    fn data_length(&self) -> u64 {
        self.as_path().data_length()
    }
}

impl<T> DataLength for [T] {
    fn data_length(&self) -> u64 {
        self.len() as u64
    }
}

impl<T> DataLength for Vec<T> {
    fn data_length(&self) -> u64 {
        self.len() as u64
    }
}

impl<K, V, S> DataLength for HashMap<K, V, S> {
    fn data_length(&self) -> u64 {
        self.len() as u64
    }
}

impl<K, V> DataLength for BTreeMap<K, V> {
    fn data_length(&self) -> u64 {
        self.len() as u64
    }
}

impl<T: DataLength + ?Sized> DataLength for &T {
    fn data_length(&self) -> u64 {
        (**self).data_length()
    }
}
