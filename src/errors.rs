use thiserror::Error;

use crate::constants::{IndexTag, IndexType};

/// Errors raised while decoding a single package header.
///
/// Any of these aborts extraction of the header it was raised for; no partially
/// populated [`PackageInfo`](crate::PackageInfo) is ever handed out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("failed to read binary: need {required} bytes, payload holds {available}")]
    BinaryDecode { required: usize, available: usize },

    #[error("invalid type for tag {tag}: expected {expected}, found {actual}")]
    TypeMismatch {
        tag: IndexTag,
        expected: IndexType,
        actual: IndexType,
    },

    #[error("invalid tag data type {raw_data_type}")]
    InvalidTagDataType { raw_data_type: u32 },

    #[error("invalid index {index} into {tag}, bound is {bound}")]
    InvalidTagIndex { tag: IndexTag, index: u32, bound: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
