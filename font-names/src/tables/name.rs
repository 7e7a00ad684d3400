//! The [name (Naming)](https://docs.microsoft.com/en-us/typography/opentype/spec/name) table

use std::collections::BTreeMap;

use font_types::NameId;

use crate::{
    font_data::{Cursor, FontData},
    string::{CharIter, Encoding},
};

/// Size of the fixed part of the header, plus room for one partial record.
///
/// Anything shorter than this is treated as an empty table.
const MIN_TABLE_LEN: usize = 9 * 2;
/// format, count, storageOffset
const HEADER_LEN: usize = 3 * 2;
/// platformID, encodingID, languageID, nameID, length, stringOffset
const NAME_RECORD_LEN: usize = 6 * 2;

/// A single localized string from the name table.
///
/// The string data is kept undecoded; see [`crate::string::decode_one`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameRecord {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    bytes: Vec<u8>,
}

impl NameRecord {
    pub fn new(platform_id: u16, encoding_id: u16, language_id: u16, bytes: Vec<u8>) -> Self {
        NameRecord {
            platform_id,
            encoding_id,
            language_id,
            bytes,
        }
    }

    pub fn platform_id(&self) -> u16 {
        self.platform_id
    }

    pub fn encoding_id(&self) -> u16 {
        self.encoding_id
    }

    pub fn language_id(&self) -> u16 {
        self.language_id
    }

    /// The raw, undecoded string data.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `true` if this record matches the given platform, encoding and language.
    pub fn matches(&self, platform_id: u16, encoding_id: u16, language_id: u16) -> bool {
        (self.platform_id, self.encoding_id, self.language_id)
            == (platform_id, encoding_id, language_id)
    }

    /// The encoding that will be used to decode this record.
    pub fn encoding(&self) -> Encoding {
        Encoding::new(self.platform_id, self.encoding_id, self.language_id)
    }

    /// An iterator over the decoded `char`s of this record.
    pub fn chars(&self) -> CharIter<'_> {
        CharIter::new(&self.bytes, self.encoding())
    }

    // reference from fonttools:
    // https://github.com/fonttools/fonttools/blob/c2119229cfb02cdb7c5a63374ef29d3d514259e8/Lib/fontTools/ttLib/tables/_n_a_m_e.py#L509
    pub fn is_unicode(&self) -> bool {
        self.platform_id == 0 || (self.platform_id == 3 && [0, 1, 10].contains(&self.encoding_id))
    }
}

/// The decoded contents of a `name` table.
///
/// This maps each name identifier to every record provided for it, in the
/// order they appear in the table's record directory. Duplicate records are
/// kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameTable {
    records: BTreeMap<NameId, Vec<NameRecord>>,
}

impl NameTable {
    /// Decode a `name` table.
    ///
    /// This never fails. A table that is too short to contain a header, or
    /// whose string storage begins past the end of the data, produces an
    /// empty mapping. Records whose strings lie (even partially) outside of
    /// the data are skipped, and reading stops at the first record that is
    /// itself truncated.
    pub fn read(data: FontData) -> NameTable {
        let mut table = NameTable::default();
        if data.len() < MIN_TABLE_LEN {
            log::debug!("name table too short ({} bytes)", data.len());
            return table;
        }
        let mut cursor = data.cursor();
        // we only support the fields shared by format 0 and 1
        cursor.advance_by(2);
        let (Ok(count), Ok(storage_offset)) = (cursor.read_u16(), cursor.read_u16()) else {
            return table;
        };
        let storage_start = storage_offset as usize;
        if storage_start >= data.len() {
            log::debug!("name storage offset {storage_start} is past the end of the table");
            return table;
        }
        debug_assert_eq!(cursor.position(), HEADER_LEN);

        for _ in 0..count {
            if cursor.remaining_bytes() < NAME_RECORD_LEN {
                log::warn!("name record directory truncated");
                break;
            }
            let Some(raw) = RawNameRecord::read(&mut cursor) else {
                break;
            };
            let start = storage_start + raw.string_offset as usize;
            match data.slice(start, raw.length as usize) {
                Some(string) => table.push(
                    NameId::new(raw.name_id),
                    NameRecord::new(
                        raw.platform_id,
                        raw.encoding_id,
                        raw.language_id,
                        string.as_bytes().to_vec(),
                    ),
                ),
                None => log::debug!(
                    "skipping name {} ({}, {}, {}): string at {start}..{} is out of bounds",
                    raw.name_id,
                    raw.platform_id,
                    raw.encoding_id,
                    raw.language_id,
                    start + raw.length as usize,
                ),
            }
        }
        table
    }

    /// Decode a `name` table from raw bytes. See [`NameTable::read`].
    pub fn from_bytes(bytes: &[u8]) -> NameTable {
        Self::read(FontData::new(bytes))
    }

    /// Append a record for `name_id`, after any existing records for it.
    pub fn push(&mut self, name_id: NameId, record: NameRecord) {
        self.records.entry(name_id).or_default().push(record);
    }

    /// All the records for `name_id`, in table order.
    pub fn get(&self, name_id: NameId) -> Option<&[NameRecord]> {
        self.records.get(&name_id).map(Vec::as_slice)
    }

    /// Iterate over name identifiers (ascending) and their records.
    pub fn iter(&self) -> impl Iterator<Item = (NameId, &[NameRecord])> + '_ {
        self.records.iter().map(|(id, recs)| (*id, recs.as_slice()))
    }

    /// The number of distinct name identifiers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The best available string for `name_id`. See [`crate::string::best_for`].
    pub fn best_string(&self, name_id: NameId) -> String {
        crate::string::best_for(self, name_id)
    }
}

/// The fixed-size fields of an entry in the record directory.
struct RawNameRecord {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    length: u16,
    string_offset: u16,
}

impl RawNameRecord {
    fn read(cursor: &mut Cursor) -> Option<Self> {
        Some(RawNameRecord {
            platform_id: cursor.read_u16().ok()?,
            encoding_id: cursor.read_u16().ok()?,
            language_id: cursor.read_u16().ok()?,
            name_id: cursor.read_u16().ok()?,
            length: cursor.read_u16().ok()?,
            string_offset: cursor.read_u16().ok()?,
        })
    }
}
