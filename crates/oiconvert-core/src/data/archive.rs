//! Source survey archive access.
//!
//! Thin wrapper around the survey's zip container. The structured
//! entries are small JSON files; the raster entries are read as raw
//! bytes and handed to the image selection stage untouched.

use crate::error::{ArchiveError, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Read access to an ESX survey archive.
#[derive(Debug)]
pub struct EsxArchive {
    zip: ZipArchive<File>,
}

impl EsxArchive {
    /// Open a survey archive from disk.
    ///
    /// Fails with `NotFound` when the path does not exist and with
    /// `MalformedArchive` when it is not a valid zip container.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ArchiveError::NotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        let file = File::open(path).map_err(ArchiveError::Io)?;
        let zip = ZipArchive::new(file).map_err(|err| match err {
            zip::result::ZipError::Io(io) => ArchiveError::Io(io),
            _ => ArchiveError::MalformedArchive {
                path: path.display().to_string(),
            },
        })?;
        Ok(Self { zip })
    }

    /// Names of all entries, in archive order.
    pub fn entry_names(&mut self) -> Vec<String> {
        (0..self.zip.len())
            .filter_map(|index| {
                self.zip
                    .by_index_raw(index)
                    .ok()
                    .map(|entry| entry.name().to_string())
            })
            .collect()
    }

    /// True when the archive contains an entry with this exact name.
    pub fn has_entry(&mut self, name: &str) -> bool {
        self.zip.by_name(name).is_ok()
    }

    /// Read an entry's raw bytes.
    pub fn read_bytes(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut entry = self
            .zip
            .by_name(name)
            .map_err(|_| ArchiveError::MissingEntry {
                entry: name.to_string(),
            })?;
        let mut buf = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut buf).map_err(ArchiveError::Io)?;
        Ok(buf)
    }

    /// Parse a JSON entry into a typed record.
    pub fn read_json<T: DeserializeOwned>(&mut self, name: &str) -> Result<T> {
        let bytes = self.read_bytes(name)?;
        serde_json::from_slice(&bytes).map_err(|err| {
            ArchiveError::MalformedEntry {
                entry: name.to_string(),
                source: err,
            }
            .into()
        })
    }
}
