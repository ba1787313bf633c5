//! Fixed schema of the tags the decoder understands and their on-disk types.

use crate::constants::{IndexTag, IndexType};
use crate::errors::*;

use super::IndexEntry;

/// One row of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSchema {
    pub tag: IndexTag,
    pub name: &'static str,
    pub ty: IndexType,
}

const fn row(tag: IndexTag, name: &'static str, ty: IndexType) -> TagSchema {
    TagSchema { tag, name, ty }
}

// int32, uint32 and their arrays all share the int32 type on disk, the same
// goes for int16 / uint16.
#[rustfmt::skip]
pub const TAG_SCHEMA: &[TagSchema] = &[
    // package identity and metadata
    row(IndexTag::RPMTAG_NAME,            "name",             IndexType::String),
    row(IndexTag::RPMTAG_EPOCH,           "epoch",            IndexType::Int32),
    row(IndexTag::RPMTAG_VERSION,         "version",          IndexType::String),
    row(IndexTag::RPMTAG_RELEASE,         "release",          IndexType::String),
    row(IndexTag::RPMTAG_ARCH,            "arch",             IndexType::String),
    row(IndexTag::RPMTAG_SOURCERPM,       "sourcerpm",        IndexType::String),
    row(IndexTag::RPMTAG_LICENSE,         "license",          IndexType::String),
    row(IndexTag::RPMTAG_VENDOR,          "vendor",           IndexType::String),
    row(IndexTag::RPMTAG_SIZE,            "size",             IndexType::Int32),
    row(IndexTag::RPMTAG_FILEDIGESTALGO,  "digest algo",      IndexType::Int32),
    row(IndexTag::RPMTAG_MODULARITYLABEL, "modularity label", IndexType::String),
    // per-file arrays
    row(IndexTag::RPMTAG_FILESIZES,       "file-sizes",       IndexType::Int32),
    row(IndexTag::RPMTAG_FILEFLAGS,       "file-flags",       IndexType::Int32),
    row(IndexTag::RPMTAG_FILEDIGESTS,     "file-digests",     IndexType::StringArray),
    row(IndexTag::RPMTAG_FILEMODES,       "file-modes",       IndexType::Int16),
    row(IndexTag::RPMTAG_BASENAMES,       "basenames",        IndexType::StringArray),
    row(IndexTag::RPMTAG_FILEUSERNAME,    "usernames",        IndexType::StringArray),
    row(IndexTag::RPMTAG_FILEGROUPNAME,   "groupnames",       IndexType::StringArray),
    row(IndexTag::RPMTAG_DIRNAMES,        "dir-names",        IndexType::StringArray),
    row(IndexTag::RPMTAG_DIRINDEXES,      "dir-indexes",      IndexType::Int32),
];

/// Look up the schema row of a tag.
pub fn schema_for(tag: IndexTag) -> Option<&'static TagSchema> {
    TAG_SCHEMA.iter().find(|schema| schema.tag == tag)
}

/// Validate the declared type of `entry` against the schema.
///
/// Returns `Ok(None)` for tags the schema has no row for, those are skipped by
/// the extractors.
pub fn check_type(entry: &IndexEntry) -> Result<Option<&'static TagSchema>> {
    let Some(schema) = entry.index_tag().and_then(schema_for) else {
        return Ok(None);
    };
    if entry.ty != schema.ty {
        log::debug!(
            "invalid tag {}: declared {}, expected {}",
            schema.name,
            entry.ty,
            schema.ty
        );
        return Err(Error::TypeMismatch {
            tag: schema.tag,
            expected: schema.ty,
            actual: entry.ty,
        });
    }
    Ok(Some(schema))
}
