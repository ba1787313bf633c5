//! Package level fields: NEVRA identity plus the scalar metadata.

use crate::constants::{DigestAlgorithm, IndexTag, NONE_PLACEHOLDER};
use crate::errors::*;

use super::decode::{decode_int32, decode_nul_string};
use super::registry::check_type;
use super::{IndexEntry, PackageInfo};

type Setter = fn(&mut PackageInfo, &IndexEntry) -> Result<()>;

struct Field {
    tag: IndexTag,
    set: Setter,
}

// ref. https://github.com/rpm-software-management/rpm/blob/rpm-4.14.3-release/lib/tagexts.c#L752
const FIELDS: &[Field] = &[
    Field {
        tag: IndexTag::RPMTAG_NAME,
        set: |pkg, entry| {
            pkg.name = decode_nul_string(entry.payload());
            Ok(())
        },
    },
    Field {
        tag: IndexTag::RPMTAG_EPOCH,
        set: |pkg, entry| {
            if let Some(data) = &entry.data {
                pkg.epoch = Some(decode_int32(data)?);
            }
            Ok(())
        },
    },
    Field {
        tag: IndexTag::RPMTAG_VERSION,
        set: |pkg, entry| {
            pkg.version = decode_nul_string(entry.payload());
            Ok(())
        },
    },
    Field {
        tag: IndexTag::RPMTAG_RELEASE,
        set: |pkg, entry| {
            pkg.release = decode_nul_string(entry.payload());
            Ok(())
        },
    },
    Field {
        tag: IndexTag::RPMTAG_ARCH,
        set: |pkg, entry| {
            pkg.arch = decode_nul_string(entry.payload());
            Ok(())
        },
    },
    Field {
        tag: IndexTag::RPMTAG_SOURCERPM,
        set: |pkg, entry| {
            pkg.source_rpm = decode_optional_string(entry);
            Ok(())
        },
    },
    Field {
        tag: IndexTag::RPMTAG_LICENSE,
        set: |pkg, entry| {
            pkg.license = decode_optional_string(entry);
            Ok(())
        },
    },
    Field {
        tag: IndexTag::RPMTAG_VENDOR,
        set: |pkg, entry| {
            pkg.vendor = decode_optional_string(entry);
            Ok(())
        },
    },
    Field {
        tag: IndexTag::RPMTAG_SIZE,
        set: |pkg, entry| {
            pkg.size = decode_int32(entry.payload())? as u32;
            Ok(())
        },
    },
    // a header carries a single algorithm for all of its file digests
    Field {
        tag: IndexTag::RPMTAG_FILEDIGESTALGO,
        set: |pkg, entry| {
            let code = decode_int32(entry.payload())?;
            pkg.digest_algorithm = Some(DigestAlgorithm::from(code));
            Ok(())
        },
    },
    Field {
        tag: IndexTag::RPMTAG_MODULARITYLABEL,
        set: |pkg, entry| {
            pkg.modularity_label = decode_nul_string(entry.payload());
            Ok(())
        },
    },
];

/// rpm stores `(none)` in string tags that were left unset.
fn decode_optional_string(entry: &IndexEntry) -> String {
    let value = decode_nul_string(entry.payload());
    if value == NONE_PLACEHOLDER {
        String::new()
    } else {
        value
    }
}

/// Fill the package level fields of `pkg` from `entries`.
///
/// Later entries for the same tag overwrite earlier ones.
pub(crate) fn read_nevra(entries: &[IndexEntry], pkg: &mut PackageInfo) -> Result<()> {
    for entry in entries {
        let Some(field) = entry
            .index_tag()
            .and_then(|tag| FIELDS.iter().find(|field| field.tag == tag))
        else {
            continue;
        };
        check_type(entry)?;
        (field.set)(pkg, entry).inspect_err(|err| {
            log::debug!("failed to parse {}: {}", field.tag, err);
        })?;
    }
    Ok(())
}
