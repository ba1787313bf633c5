mod decode;
mod entry;
mod files;
mod nevra;
mod registry;
mod types;

pub use decode::*;
pub use entry::*;
pub use registry::{TAG_SCHEMA, TagSchema, check_type, schema_for};
pub use types::*;

use crate::errors::*;

/// Decode the entries of one package header into a [`PackageInfo`].
///
/// Unknown tags are skipped. The first entry whose declared type does not match
/// [`TAG_SCHEMA`], or whose payload is too short to decode, aborts the whole
/// header.
pub fn extract_package(entries: &[IndexEntry]) -> Result<PackageInfo> {
    let mut pkg = PackageInfo::default();
    nevra::read_nevra(entries, &mut pkg)?;
    pkg.files = files::read_files(entries)?;
    log::trace!(
        "decoded {}-{}-{}.{} with {} files",
        pkg.name,
        pkg.version,
        pkg.release,
        pkg.arch,
        pkg.files.len()
    );
    Ok(pkg)
}
