use std::io::{Cursor, Read};

use pagewindow::Page;
use zip::ZipArchive;

use crate::{PageSource, SourceError};

/// A page source backed by a fully loaded zip archive.
///
/// Directory entries are skipped; the remaining entries are sorted by name
/// and numbered from 1. `source_index` is the entry's index in the archive,
/// so slice fetches stay random-access regardless of display order.
pub struct ZipSource {
    archive: ZipArchive<Cursor<Vec<u8>>>,
    pages: Vec<Page>,
}

impl ZipSource {
    pub fn new(bytes: Vec<u8>) -> Result<Self, SourceError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| SourceError::Corrupt(e.to_string()))?;

        let mut names = Vec::with_capacity(archive.len());
        for idx in 0..archive.len() {
            let entry = archive
                .by_index(idx)
                .map_err(|e| SourceError::Corrupt(e.to_string()))?;
            if entry.is_dir() {
                continue;
            }
            names.push((entry.name().to_string(), idx));
        }
        names.sort_by(|a, b| a.0.cmp(&b.0));

        let pages = names
            .into_iter()
            .enumerate()
            .map(|(i, (name, idx))| Page::new(i + 1, name, idx))
            .collect();

        pwdebug!(entries = archive.len(), "ZipSource::new");
        Ok(Self { archive, pages })
    }
}

impl PageSource for ZipSource {
    fn pages(&self) -> &[Page] {
        &self.pages
    }

    fn slice(&mut self, source_index: usize) -> Result<Vec<u8>, SourceError> {
        let mut entry = self.archive.by_index(source_index).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => SourceError::MissingEntry(source_index),
            other => SourceError::Corrupt(other.to_string()),
        })?;

        let mut data = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut data)
            .map_err(|e| SourceError::Read {
                index: source_index,
                source: e,
            })?;
        Ok(data)
    }
}
