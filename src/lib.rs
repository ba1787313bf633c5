//! # rpmdb-header
//!
//! Decodes the package headers stored in an rpm database into plain records:
//! NEVRA identity, package metadata and the list of installed files.
//!
//! Reading the database itself (bdb, ndb or sqlite) is left to the caller, who
//! hands over the index entries of one header at a time.
//!
//! # Example
//!
//! ```rust
//! use rpmdb_header::{IndexEntry, IndexTag, IndexType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let entries = vec![
//!     IndexEntry::new(IndexTag::RPMTAG_NAME, IndexType::String, b"bash\0".to_vec()),
//!     IndexEntry::new(IndexTag::RPMTAG_VERSION, IndexType::String, b"5.2.15\0".to_vec()),
//!     IndexEntry::new(IndexTag::RPMTAG_BASENAMES, IndexType::StringArray, b"bash\0".to_vec()),
//!     IndexEntry::new(IndexTag::RPMTAG_DIRNAMES, IndexType::StringArray, b"/usr/bin/\0".to_vec()),
//!     IndexEntry::new(IndexTag::RPMTAG_DIRINDEXES, IndexType::Int32, 0i32.to_be_bytes()),
//! ];
//!
//! let pkg = rpmdb_header::extract_package(&entries)?;
//! assert_eq!(pkg.name, "bash");
//! assert_eq!(pkg.epoch, None);
//! assert_eq!(pkg.files[0].path, "/usr/bin/bash");
//! # Ok(())
//! # }
//! ```

#![allow(unknown_lints, clippy::uninlined_format_args)]

mod errors;
pub use crate::errors::*;

pub(crate) mod constants;
pub use crate::constants::*;

mod header;
pub use crate::header::*;
