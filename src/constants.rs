//! RPM specific constants
//!
//! These constants were extracted from the rpm upstream project C headers
//! (`lib/rpmtag.h`, `lib/rpmfiles.h`, `rpmio/rpmpgp.h`).

use std::fmt;
use std::fmt::Display;

use bitflags::bitflags;

pub const HEADER_IMAGE: u32 = 61;
pub const HEADER_SIGNATURES: u32 = 62;
pub const HEADER_IMMUTABLE: u32 = 63;
pub const HEADER_I18NTABLE: u32 = 100;

/// Size (in bytes) of an on-disk 32 bit integer
pub const SIZE_OF_INT32: usize = 4;
/// Size (in bytes) of an on-disk 16 bit integer
pub const SIZE_OF_UINT16: usize = 2;

/// Placeholder rpm writes into optional string tags that were never set.
pub const NONE_PLACEHOLDER: &str = "(none)";

/// Tags understood by the header decoder.
///
/// Only the subset of `rpmTag_e` needed to describe an installed package. Any
/// other tag id found in a header is skipped.
#[repr(u32)]
#[derive(
    num_derive::FromPrimitive,
    num_derive::ToPrimitive,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    enum_display_derive::Display,
)]
#[allow(non_camel_case_types)]
pub enum IndexTag {
    RPMTAG_HEADERIMAGE = HEADER_IMAGE,
    RPMTAG_HEADERSIGNATURES = HEADER_SIGNATURES,
    RPMTAG_HEADERIMMUTABLE = HEADER_IMMUTABLE,
    RPMTAG_HEADERI18NTABLE = HEADER_I18NTABLE,

    RPMTAG_NAME = 1000,
    RPMTAG_VERSION = 1001,
    RPMTAG_RELEASE = 1002,
    RPMTAG_EPOCH = 1003,
    RPMTAG_SIZE = 1009,
    RPMTAG_VENDOR = 1011,
    RPMTAG_LICENSE = 1014,
    RPMTAG_ARCH = 1022,
    RPMTAG_FILESIZES = 1028, // i[]
    RPMTAG_FILEMODES = 1030, // h[], unsigned on disk
    RPMTAG_FILEDIGESTS = 1035, // s[]
    RPMTAG_FILEFLAGS = 1037, // i[]
    RPMTAG_FILEUSERNAME = 1039, // s[]
    RPMTAG_FILEGROUPNAME = 1040, // s[]
    RPMTAG_SOURCERPM = 1044,
    RPMTAG_DIRINDEXES = 1116, // i[]
    RPMTAG_BASENAMES = 1117, // s[]
    RPMTAG_DIRNAMES = 1118, // s[]

    RPMTAG_FILEDIGESTALGO = 5011, // i
    RPMTAG_MODULARITYLABEL = 5096,
}

impl From<IndexTag> for u32 {
    fn from(tag: IndexTag) -> Self {
        tag as u32
    }
}

/// On-disk data type of an index entry (`rpmTagType_e`).
#[repr(u32)]
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    enum_primitive_derive::Primitive,
    enum_display_derive::Display,
)]
pub enum IndexType {
    Null = 0,
    Char = 1,
    Int8 = 2,
    Int16 = 3,
    Int32 = 4,
    Int64 = 5,
    String = 6,
    Bin = 7,
    StringArray = 8,
    I18NString = 9,
}

bitflags! {
    /// Per-file attributes (`rpmfileAttrs`).
    #[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FileFlags: u32 {
        const CONFIG = 1;  // %%config
        const DOC = 1 << 1;  // %%doc
        const ICON = 1 << 2;  // %%donotuse
        const MISSINGOK = 1 << 3;  // %%config(missingok)
        const NOREPLACE = 1 << 4;  // %%config(noreplace)
        const SPECFILE = 1 << 5;  // first file in SRPM?
        const GHOST = 1 << 6;  // %%ghost
        const LICENSE = 1 << 7;  // %%license
        const README = 1 << 8;  // %%readme
        // bits 9-10 unused
        const PUBKEY = 1 << 11;	// %%pubkey
        const ARTIFACT	= 1 << 12;	// %%artifact
    }
}

impl Default for FileFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Algorithm used for the per-file digests of a package (`pgpHashAlgo`).
///
/// All file digests within one header share a single algorithm.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Ripemd160,
    Md2,
    Tiger192,
    Haval5_160,
    Sha256,
    Sha384,
    Sha512,
    Sha224,
    /// A code this crate does not know about, kept verbatim.
    Unknown(i32),
}

impl From<i32> for DigestAlgorithm {
    fn from(code: i32) -> Self {
        match code {
            1 => Self::Md5,
            2 => Self::Sha1,
            3 => Self::Ripemd160,
            5 => Self::Md2,
            6 => Self::Tiger192,
            7 => Self::Haval5_160,
            8 => Self::Sha256,
            9 => Self::Sha384,
            10 => Self::Sha512,
            11 => Self::Sha224,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Ripemd160 => "RIPEMD160",
            Self::Md2 => "MD2",
            Self::Tiger192 => "TIGER192",
            Self::Haval5_160 => "HAVAL-5-160",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
            Self::Sha224 => "SHA224",
            Self::Unknown(code) => return write!(f, "unknown-digest-algorithm({})", code),
        };
        f.write_str(name)
    }
}
