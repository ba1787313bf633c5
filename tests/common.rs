#![allow(dead_code)]

use rpmdb_header::{IndexEntry, IndexTag, IndexType};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn string(tag: IndexTag, value: &str) -> IndexEntry {
    IndexEntry::new(tag, IndexType::String, [value.as_bytes(), b"\0"].concat())
}

pub fn string_array(tag: IndexTag, values: &[&str]) -> IndexEntry {
    let data = values
        .iter()
        .flat_map(|value| [value.as_bytes(), b"\0"].concat())
        .collect::<Vec<u8>>();
    IndexEntry::new(tag, IndexType::StringArray, data)
}

pub fn int32(tag: IndexTag, values: &[i32]) -> IndexEntry {
    let data = values.iter().flat_map(|value| value.to_be_bytes()).collect::<Vec<u8>>();
    IndexEntry::new(tag, IndexType::Int32, data)
}

pub fn int16(tag: IndexTag, values: &[u16]) -> IndexEntry {
    let data = values.iter().flat_map(|value| value.to_be_bytes()).collect::<Vec<u8>>();
    IndexEntry::new(tag, IndexType::Int16, data)
}

/// Header of a small installed package, the way it comes out of rpmdb.sqlite.
pub fn tzdata_header() -> Vec<IndexEntry> {
    vec![
        IndexEntry::new(IndexTag::RPMTAG_HEADERIMMUTABLE, IndexType::Bin, vec![0u8; 16]),
        string(IndexTag::RPMTAG_NAME, "tzdata"),
        string(IndexTag::RPMTAG_VERSION, "2024a"),
        string(IndexTag::RPMTAG_RELEASE, "1.el9"),
        int32(IndexTag::RPMTAG_SIZE, &[1_717_986]),
        string(IndexTag::RPMTAG_VENDOR, "Rocky Enterprise Software Foundation"),
        string(IndexTag::RPMTAG_LICENSE, "Public Domain"),
        string(IndexTag::RPMTAG_ARCH, "noarch"),
        int32(IndexTag::RPMTAG_FILESIZES, &[4096, 3536, 2380]),
        int16(IndexTag::RPMTAG_FILEMODES, &[0o40755, 0o100644, 0o100644]),
        string_array(
            IndexTag::RPMTAG_FILEDIGESTS,
            &[
                "",
                "c0a2e4d1a1bbae2a9d7a0b3b1ab4b6ed5c6e0a8e8fbd4c7a7ac0d0b6d6a5a4e3",
                "9a1f3c2a54f0c1ac6b1d3c8a2e5b7a3d1f0c5e6a9b8c7d6e5f4a3b2c1d0e9f8a",
            ],
        ),
        int32(IndexTag::RPMTAG_FILEFLAGS, &[0, 0, 1 << 7]),
        string_array(IndexTag::RPMTAG_FILEUSERNAME, &["root", "root", "root"]),
        string_array(IndexTag::RPMTAG_FILEGROUPNAME, &["root", "root", "root"]),
        string(IndexTag::RPMTAG_SOURCERPM, "tzdata-2024a-1.el9.src.rpm"),
        int32(IndexTag::RPMTAG_DIRINDEXES, &[0, 1, 2]),
        string_array(IndexTag::RPMTAG_BASENAMES, &["zoneinfo", "Berlin", "LICENSE"]),
        string_array(
            IndexTag::RPMTAG_DIRNAMES,
            &["/usr/share/", "/usr/share/zoneinfo/Europe/", "/usr/share/licenses/tzdata/"],
        ),
        int32(IndexTag::RPMTAG_FILEDIGESTALGO, &[8]),
    ]
}
