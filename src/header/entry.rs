use num_traits::FromPrimitive;

use crate::constants::{IndexTag, IndexType};
use crate::errors::*;

/// A single raw entry of a package header, as produced by a database backend.
///
/// The entry carries the store bytes belonging to it and nothing is decoded
/// until [`extract_package`](crate::extract_package) runs over the full set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Raw tag id, possibly one this crate does not know.
    pub tag: u32,
    /// Declared on-disk type.
    pub ty: IndexType,
    /// Payload bytes, `None` when the backend supplied no data at all.
    pub data: Option<Vec<u8>>,
    /// Declared payload length in bytes.
    pub length: u32,
}

impl IndexEntry {
    /// Entry whose declared length is the length of `data`.
    pub fn new(tag: impl Into<u32>, ty: IndexType, data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        IndexEntry {
            tag: tag.into(),
            ty,
            length: data.len() as u32,
            data: Some(data),
        }
    }

    /// Entry without any payload.
    pub fn without_data(tag: impl Into<u32>, ty: IndexType) -> Self {
        IndexEntry {
            tag: tag.into(),
            ty,
            data: None,
            length: 0,
        }
    }

    /// Build an entry from the raw values found in an index record.
    pub fn from_raw(
        tag: u32,
        raw_data_type: u32,
        data: Option<Vec<u8>>,
        length: u32,
    ) -> Result<Self> {
        let ty = IndexType::from_u32(raw_data_type)
            .ok_or(Error::InvalidTagDataType { raw_data_type })?;
        Ok(IndexEntry {
            tag,
            ty,
            data,
            length,
        })
    }

    /// Override the declared payload length.
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// The typed tag, if it is one the decoder knows.
    pub fn index_tag(&self) -> Option<IndexTag> {
        IndexTag::from_u32(self.tag)
    }

    /// Payload bytes, empty when absent.
    pub fn payload(&self) -> &[u8] {
        self.data.as_deref().unwrap_or_default()
    }
}
