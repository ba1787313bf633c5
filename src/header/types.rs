//! The records produced from a decoded header.

use crate::constants::{DigestAlgorithm, FileFlags};

/// An installed package as recorded in the rpm database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageInfo {
    /// `None` when the header carries no epoch, which is not the same as `Some(0)`.
    pub epoch: Option<i32>,
    pub name: String,
    pub version: String,
    pub release: String,
    pub arch: String,
    /// Source package this one was built from, empty for source packages.
    pub source_rpm: String,
    /// Sum of the sizes of all files in the package.
    pub size: u32,
    pub license: String,
    pub vendor: String,
    /// Module stream the package belongs to, empty outside of modular repos.
    pub modularity_label: String,
    /// Algorithm of [`FileInfo::digest`], `None` when the header does not say.
    pub digest_algorithm: Option<DigestAlgorithm>,
    /// Installed files, in header order.
    pub files: Vec<FileInfo>,
}

/// A file owned by an installed package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileInfo {
    /// Full path the file is installed to.
    pub path: String,
    pub mode: u16,
    /// Hex encoded digest, empty for anything that is not a regular file.
    pub digest: String,
    pub size: u32,
    pub username: String,
    pub groupname: String,
    pub flags: FileFlags,
}
