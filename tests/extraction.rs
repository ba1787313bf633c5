use pretty_assertions::assert_eq;
use rpmdb_header::{
    DigestAlgorithm, Error, FileFlags, IndexEntry, IndexTag, IndexType, extract_package,
};

mod common;

#[test]
fn test_installed_package() -> Result<(), Box<dyn std::error::Error>> {
    common::init_logging();
    let pkg = extract_package(&common::tzdata_header())?;

    assert_eq!(pkg.name, "tzdata");
    assert_eq!(pkg.epoch, None);
    assert_eq!(pkg.version, "2024a");
    assert_eq!(pkg.release, "1.el9");
    assert_eq!(pkg.arch, "noarch");
    assert_eq!(pkg.source_rpm, "tzdata-2024a-1.el9.src.rpm");
    assert_eq!(pkg.size, 1_717_986);
    assert_eq!(pkg.license, "Public Domain");
    assert_eq!(pkg.vendor, "Rocky Enterprise Software Foundation");
    assert_eq!(pkg.modularity_label, "");
    assert_eq!(pkg.digest_algorithm, Some(DigestAlgorithm::Sha256));

    let paths = pkg.files.iter().map(|file| file.path.as_str()).collect::<Vec<_>>();
    assert_eq!(
        paths,
        vec![
            "/usr/share/zoneinfo",
            "/usr/share/zoneinfo/Europe/Berlin",
            "/usr/share/licenses/tzdata/LICENSE",
        ]
    );

    let license = &pkg.files[2];
    assert_eq!(license.mode, 0o100644);
    assert_eq!(license.size, 2380);
    assert_eq!(license.username, "root");
    assert_eq!(license.groupname, "root");
    assert!(license.flags.contains(FileFlags::LICENSE));
    assert_eq!(
        license.digest,
        "9a1f3c2a54f0c1ac6b1d3c8a2e5b7a3d1f0c5e6a9b8c7d6e5f4a3b2c1d0e9f8a"
    );

    let dir = &pkg.files[0];
    assert_eq!(dir.mode, 0o40755);
    assert!(dir.digest.is_empty());
    assert!(dir.flags.is_empty());
    Ok(())
}

#[test]
fn test_modular_package() -> Result<(), Box<dyn std::error::Error>> {
    let mut entries = common::tzdata_header();
    entries.push(common::int32(IndexTag::RPMTAG_EPOCH, &[2]));
    entries.push(common::string(
        IndexTag::RPMTAG_MODULARITYLABEL,
        "nodejs:18:9020020230613:rhel9",
    ));

    let pkg = extract_package(&entries)?;
    assert_eq!(pkg.epoch, Some(2));
    assert_eq!(pkg.modularity_label, "nodejs:18:9020020230613:rhel9");
    Ok(())
}

#[test]
fn test_entries_from_raw_records() -> Result<(), Box<dyn std::error::Error>> {
    // what a backend hands over after slicing the header store
    let entries = vec![
        IndexEntry::from_raw(1000, 6, Some(b"filesystem\0".to_vec()), 11)?,
        IndexEntry::from_raw(1003, 4, None, 0)?,
        IndexEntry::from_raw(1117, 8, Some(b"etc\0usr\0".to_vec()), 8)?,
        IndexEntry::from_raw(1118, 8, Some(b"/\0".to_vec()), 2)?,
        IndexEntry::from_raw(1116, 4, Some(vec![0, 0, 0, 0, 0, 0, 0, 0]), 8)?,
    ];

    let pkg = extract_package(&entries)?;
    assert_eq!(pkg.name, "filesystem");
    assert_eq!(pkg.epoch, None);
    assert_eq!(pkg.files.len(), 2);
    assert_eq!(pkg.files[1].path, "/usr");
    assert_eq!(pkg.files[1].mode, 0);
    Ok(())
}

#[test]
fn test_failed_header_yields_nothing() {
    let mut entries = common::tzdata_header();
    // declares three sizes while the payload only holds two bytes
    entries.push(
        IndexEntry::new(IndexTag::RPMTAG_FILESIZES, IndexType::Int32, vec![0, 1]).with_length(12),
    );

    let err = extract_package(&entries).unwrap_err();
    assert_eq!(
        err,
        Error::BinaryDecode {
            required: 12,
            available: 2
        }
    );
    assert_eq!(
        err.to_string(),
        "failed to read binary: need 12 bytes, payload holds 2"
    );
}

#[test]
fn test_mode_declared_as_int32() {
    let mut entries = common::tzdata_header();
    entries.push(common::int32(IndexTag::RPMTAG_FILEMODES, &[0o100644]));

    assert_eq!(
        extract_package(&entries),
        Err(Error::TypeMismatch {
            tag: IndexTag::RPMTAG_FILEMODES,
            expected: IndexType::Int16,
            actual: IndexType::Int32,
        })
    );
}

#[test]
fn test_dirnames_without_trailing_nul() -> Result<(), Box<dyn std::error::Error>> {
    let mut entries = common::tzdata_header();
    entries.retain(|entry| entry.index_tag() != Some(IndexTag::RPMTAG_DIRNAMES));
    entries.push(IndexEntry::new(
        IndexTag::RPMTAG_DIRNAMES,
        IndexType::StringArray,
        b"/a/\0/b/\0/c/".to_vec(),
    ));

    let pkg = extract_package(&entries)?;
    assert_eq!(pkg.files[2].path, "/c/LICENSE");
    Ok(())
}
