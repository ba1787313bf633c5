//! Reassembly of the per-file records.
//!
//! rpm keeps the file list as a set of parallel arrays, one per attribute, all
//! indexed by file. Paths are split into a basename and an index into a shared
//! array of directory names.

use itertools::{EitherOrBoth, Itertools};

use crate::constants::{FileFlags, IndexTag};
use crate::errors::*;

use super::decode::{decode_int32_array, decode_nul_string_array, decode_uint16_array};
use super::registry::check_type;
use super::{FileInfo, IndexEntry};

/// The per-file arrays found in a header, each one optional.
#[derive(Debug, Default)]
struct FileColumns {
    sizes: Option<Vec<u32>>,
    flags: Option<Vec<u32>>,
    digests: Option<Vec<String>>,
    modes: Option<Vec<u16>>,
    basenames: Option<Vec<String>>,
    usernames: Option<Vec<String>>,
    groupnames: Option<Vec<String>>,
    dirnames: Option<Vec<String>>,
    dir_indexes: Option<Vec<u32>>,
}

type Collector = fn(&mut FileColumns, &IndexEntry) -> Result<()>;

// sizes, flags and dir indexes are unsigned, rpm just stores them as int32
fn decode_uint32_array(entry: &IndexEntry) -> Result<Vec<u32>> {
    let values = decode_int32_array(entry.payload(), entry.length)?;
    Ok(values.into_iter().map(|value| value as u32).collect())
}

const COLUMNS: &[(IndexTag, Collector)] = &[
    (IndexTag::RPMTAG_FILESIZES, |columns, entry| {
        columns.sizes = Some(decode_uint32_array(entry)?);
        Ok(())
    }),
    (IndexTag::RPMTAG_FILEFLAGS, |columns, entry| {
        columns.flags = Some(decode_uint32_array(entry)?);
        Ok(())
    }),
    (IndexTag::RPMTAG_FILEDIGESTS, |columns, entry| {
        columns.digests = Some(decode_nul_string_array(entry.payload()));
        Ok(())
    }),
    (IndexTag::RPMTAG_FILEMODES, |columns, entry| {
        columns.modes = Some(decode_uint16_array(entry.payload(), entry.length)?);
        Ok(())
    }),
    (IndexTag::RPMTAG_BASENAMES, |columns, entry| {
        columns.basenames = Some(decode_nul_string_array(entry.payload()));
        Ok(())
    }),
    (IndexTag::RPMTAG_FILEUSERNAME, |columns, entry| {
        columns.usernames = Some(decode_nul_string_array(entry.payload()));
        Ok(())
    }),
    (IndexTag::RPMTAG_FILEGROUPNAME, |columns, entry| {
        columns.groupnames = Some(decode_nul_string_array(entry.payload()));
        Ok(())
    }),
    (IndexTag::RPMTAG_DIRNAMES, |columns, entry| {
        columns.dirnames = Some(decode_nul_string_array(entry.payload()));
        Ok(())
    }),
    (IndexTag::RPMTAG_DIRINDEXES, |columns, entry| {
        columns.dir_indexes = Some(decode_uint32_array(entry)?);
        Ok(())
    }),
];

/// Value at `index` of an optional column, the zero value when the column is
/// missing or too short.
fn cell<T: Clone + Default>(column: &Option<Vec<T>>, index: usize) -> T {
    column
        .as_deref()
        .and_then(|values| values.get(index))
        .cloned()
        .unwrap_or_default()
}

impl FileColumns {
    fn collect(entries: &[IndexEntry]) -> Result<Self> {
        let mut columns = FileColumns::default();
        for entry in entries {
            let Some((tag, collector)) = entry
                .index_tag()
                .and_then(|tag| COLUMNS.iter().find(|(column, _)| *column == tag))
            else {
                continue;
            };
            check_type(entry)?;
            collector(&mut columns, entry).inspect_err(|err| {
                log::debug!("failed to parse {}: {}", tag, err);
            })?;
        }
        Ok(columns)
    }

    fn into_files(self) -> Result<Vec<FileInfo>> {
        let (Some(dirnames), Some(dir_indexes)) = (&self.dirnames, &self.dir_indexes) else {
            log::debug!("no dir names or dir indexes in header, skipping file list");
            return Ok(Vec::new());
        };
        let basenames = self.basenames.as_deref().unwrap_or_default();

        basenames
            .iter()
            .zip_longest(dir_indexes)
            .enumerate()
            .filter_map(|(i, pair)| match pair {
                EitherOrBoth::Both(basename, dir_index) => {
                    Some(self.file_at(i, dirnames, *dir_index, basename))
                }
                EitherOrBoth::Left(_) => Some(Err(Error::InvalidTagIndex {
                    tag: IndexTag::RPMTAG_DIRINDEXES,
                    index: i as u32,
                    bound: dir_indexes.len() as u32,
                })),
                // surplus dir indexes have no file to belong to
                EitherOrBoth::Right(_) => None,
            })
            .collect()
    }

    fn file_at(
        &self,
        i: usize,
        dirnames: &[String],
        dir_index: u32,
        basename: &str,
    ) -> Result<FileInfo> {
        let dir = dirnames
            .get(dir_index as usize)
            .ok_or(Error::InvalidTagIndex {
                tag: IndexTag::RPMTAG_DIRNAMES,
                index: dir_index,
                bound: dirnames.len() as u32,
            })?;
        Ok(FileInfo {
            // dir names carry their trailing separator already
            path: format!("{}{}", dir, basename),
            mode: cell(&self.modes, i),
            digest: cell(&self.digests, i),
            size: cell(&self.sizes, i),
            username: cell(&self.usernames, i),
            groupname: cell(&self.groupnames, i),
            flags: FileFlags::from_bits_retain(cell(&self.flags, i)),
        })
    }
}

/// Rebuild the file list of a header, in basename order.
///
/// Without dir names or dir indexes there is nothing to anchor the basenames
/// to and the list is empty.
pub(crate) fn read_files(entries: &[IndexEntry]) -> Result<Vec<FileInfo>> {
    let files = FileColumns::collect(entries)?.into_files()?;
    log::debug!("reconstructed {} file records", files.len());
    Ok(files)
}
