//! Decoding and selection of localized strings.
//!
//! Each name identifier in the `name` table may have many records, one per
//! platform/encoding/language combination. [`best_for`] picks a single string
//! for display, and [`decode_one`] turns the raw bytes of any record into text.
//!
//! Decoding never fails: bytes that cannot be mapped to a character are
//! replaced with U+FFFD.

use font_types::NameId;

use crate::tables::name::{NameRecord, NameTable};

/// Candidate (platform, encoding, language) triples, most preferred first.
///
/// Windows US-English, then Mac Roman English, then the Unicode platform
/// encodings from newest to oldest. Only exact matches count.
pub const PRIORITY: [(u16, u16, u16); 7] = [
    (3, 1, 1033), // Windows, Unicode BMP, US English
    (1, 0, 0),    // Macintosh, Roman, English
    (0, 6, 0),    // Unicode full repertoire
    (0, 4, 0),    // Unicode 2.0+ full repertoire
    (0, 3, 0),    // Unicode 2.0+ BMP only
    (0, 2, 0),    // ISO/IEC 10646
    (0, 1, 0),    // Unicode 1.1
];

/// Decode the string data of a single record.
pub fn decode_one(record: &NameRecord) -> String {
    record.chars().collect()
}

/// Returns the preferred string for `name_id`.
///
/// - if there are no records for the id, returns the empty string.
/// - if there is exactly one, returns it, whatever its encoding.
/// - otherwise returns the first record matching the earliest entry in
///   [`PRIORITY`], or the empty string if nothing matches exactly.
pub fn best_for(names: &NameTable, name_id: NameId) -> String {
    let records = match names.get(name_id) {
        Some(records) => records,
        None => return String::new(),
    };
    if let [only] = records {
        return decode_one(only);
    }
    PRIORITY
        .iter()
        .find_map(|&(platform, encoding, language)| {
            records
                .iter()
                .find(|rec| rec.matches(platform, encoding, language))
        })
        .map(decode_one)
        .unwrap_or_default()
}

/// The encoding used by a name record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Encoding {
    Utf16Be,
    MacRoman,
    /// Any other platform/encoding; only ASCII bytes are decoded.
    Fallback,
}

impl Encoding {
    /// Determine the encoding from the platform, encoding and language ids.
    pub fn new(platform_id: u16, encoding_id: u16, language_id: u16) -> Encoding {
        match (platform_id, encoding_id, language_id) {
            (0, _, _) | (3, 1, _) => Encoding::Utf16Be,
            (1, 0, 0) => Encoding::MacRoman,
            _ => Encoding::Fallback,
        }
    }
}

/// An iterator over the chars of a name record.
#[derive(Clone)]
pub struct CharIter<'a> {
    data: &'a [u8],
    encoding: Encoding,
    pos: usize,
}

impl<'a> CharIter<'a> {
    pub(crate) fn new(data: &'a [u8], encoding: Encoding) -> Self {
        CharIter {
            data,
            encoding,
            pos: 0,
        }
    }

    fn bump_u16(&mut self) -> Option<u16> {
        let result = self
            .data
            .get(self.pos..self.pos + 2)
            .map(|x| u16::from_be_bytes([x[0], x[1]]))?;
        self.pos += 2;
        Some(result)
    }

    fn peek_u16(&self) -> Option<u16> {
        self.data
            .get(self.pos..self.pos + 2)
            .map(|x| u16::from_be_bytes([x[0], x[1]]))
    }

    fn bump_u8(&mut self) -> Option<u8> {
        let result = self.data.get(self.pos)?;
        self.pos += 1;
        Some(*result)
    }

    fn next_utf16(&mut self) -> Option<u32> {
        let Some(c1) = self.bump_u16() else {
            // a trailing odd byte
            self.pos = self.data.len();
            return None;
        };
        let c1 = c1 as u32;
        if (0xDC00..0xE000).contains(&c1) {
            return None;
        }
        if !(0xD800..0xDC00).contains(&c1) {
            return Some(c1);
        }
        // only consume the next unit if it completes the pair
        match self.peek_u16().map(u32::from) {
            Some(c2) if (0xDC00..0xE000).contains(&c2) => {
                self.pos += 2;
                Some(((c1 & 0x3FF) << 10) + (c2 & 0x3FF) + 0x10000)
            }
            _ => None,
        }
    }
}

impl Iterator for CharIter<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        let rep = core::char::REPLACEMENT_CHARACTER;
        let raw_c = match self.encoding {
            Encoding::Utf16Be => match self.next_utf16() {
                Some(c) => c,
                None => return Some(rep),
            },
            Encoding::MacRoman => {
                let c = self.bump_u8()?;
                return Some(MacRomanMapping.decode(c));
            }
            Encoding::Fallback => match self.bump_u8()? {
                c if c.is_ascii() => c as u32,
                _ => return Some(rep),
            },
        };
        Some(std::char::from_u32(raw_c).unwrap_or(rep))
    }
}

/// A helper for decoding Mac OS Roman encoded strings.
pub struct MacRomanMapping;

impl MacRomanMapping {
    const START_REMAP: u8 = 128;
    /// Convert from a mac-roman encoded byte to a `char`
    pub fn decode(self, raw: u8) -> char {
        if raw < Self::START_REMAP {
            raw as char
        } else {
            let idx = raw - Self::START_REMAP;
            char::from_u32(MAC_ROMAN_DECODE[idx as usize] as u32)
                .unwrap_or(core::char::REPLACEMENT_CHARACTER)
        }
    }
}

/// a lookup table for the Mac Roman encoding. this matches the values 128..=255
/// to specific unicode values.
#[rustfmt::skip]
static MAC_ROMAN_DECODE: [u16; 128] = [
    196, 197, 199, 201, 209, 214, 220, 225, 224, 226, 228, 227, 229, 231, 233,
    232, 234, 235, 237, 236, 238, 239, 241, 243, 242, 244, 246, 245, 250, 249,
    251, 252, 8224, 176, 162, 163, 167, 8226, 182, 223, 174, 169, 8482, 180,
    168, 8800, 198, 216, 8734, 177, 8804, 8805, 165, 181, 8706, 8721, 8719,
    960, 8747, 170, 186, 937, 230, 248, 191, 161, 172, 8730, 402, 8776, 8710,
    171, 187, 8230, 160, 192, 195, 213, 338, 339, 8211, 8212, 8220, 8221, 8216,
    8217, 247, 9674, 255, 376, 8260, 8364, 8249, 8250, 64257, 64258, 8225, 183,
    8218, 8222, 8240, 194, 202, 193, 203, 200, 205, 206, 207, 204, 211, 212,
    63743, 210, 218, 219, 217, 305, 710, 732, 175, 728, 729, 730, 184, 733,
    731, 711,
];

#[cfg(test)]
mod tests {
    use super::*;
    use font_test_data::name::utf16be;

    fn record(platform: u16, encoding: u16, language: u16, bytes: &[u8]) -> NameRecord {
        NameRecord::new(platform, encoding, language, bytes.to_vec())
    }

    fn table(id: u16, records: impl IntoIterator<Item = NameRecord>) -> NameTable {
        let mut table = NameTable::default();
        for rec in records {
            table.push(NameId::new(id), rec);
        }
        table
    }

    #[test]
    fn utf16_roundtrip() {
        for input in ["Regular", "Ordinær", "日本語", "emoji 🦀 ok", ""] {
            let rec = record(3, 1, 1033, &utf16be(input));
            assert_eq!(decode_one(&rec), input);
        }
    }

    #[test]
    fn unicode_platform_is_utf16() {
        let rec = record(0, 3, 0, &utf16be("Bold"));
        assert_eq!(rec.encoding(), Encoding::Utf16Be);
        assert_eq!(decode_one(&rec), "Bold");
    }

    #[test]
    fn mac_roman() {
        // "Müller-Lancé" in mac roman
        let bytes = [
            b'M', 0x9F, b'l', b'l', b'e', b'r', b'-', b'L', b'a', b'n', b'c', 0x8E,
        ];
        let rec = record(1, 0, 0, &bytes);
        assert_eq!(rec.encoding(), Encoding::MacRoman);
        assert_eq!(decode_one(&rec), "Müller-Lancé");
    }

    #[test]
    fn mac_roman_requires_english() {
        // mac roman, but french: not something we know how to decode
        let rec = record(1, 0, 1, &[b'C', 0x8E]);
        assert_eq!(rec.encoding(), Encoding::Fallback);
        assert_eq!(decode_one(&rec), "C\u{FFFD}");
    }

    #[test]
    fn fallback_never_fails() {
        let bytes = (0..=255u8).collect::<Vec<_>>();
        let decoded = decode_one(&record(2, 0, 0, &bytes));
        assert_eq!(decoded.chars().count(), 256);
        assert!(decoded.starts_with('\0'));
        assert!(decoded.contains("ABCDEF") && decoded.contains("xyz"));
        assert!(decoded[128..].chars().all(|c| c == '\u{FFFD}'));
    }

    #[test]
    fn lone_surrogate_at_end() {
        // DEVANAGARI LETTER SHORT A (U+0904), unpaired high surrogate (0xD800)
        let chars = CharIter::new(&[0x09, 0x04, 0xD8, 0x00], Encoding::Utf16Be);
        assert!(chars.eq(['ऄ', std::char::REPLACEMENT_CHARACTER].into_iter()))
    }

    #[test]
    fn unpaired_surrogates_do_not_eat_chars() {
        // high surrogate, 'A', low surrogate, 'B'
        let data = [0xD8, 0x00, 0x00, 0x41, 0xDC, 0x00, 0x00, 0x42];
        let chars = CharIter::new(&data, Encoding::Utf16Be);
        assert_eq!(chars.collect::<String>(), "\u{FFFD}A\u{FFFD}B");
    }

    #[test]
    fn odd_trailing_byte() {
        let chars = CharIter::new(&[0x00, 0x41, 0x00], Encoding::Utf16Be);
        assert_eq!(chars.collect::<String>(), "A\u{FFFD}");
    }

    #[test]
    fn best_for_missing_id() {
        assert_eq!(best_for(&NameTable::default(), NameId::FAMILY_NAME), "");
    }

    #[test]
    fn best_for_single_candidate() {
        // not in the priority list, but the only choice
        let names = table(1, [record(3, 1, 0x40C, &utf16be("Gras"))]);
        assert_eq!(best_for(&names, NameId::FAMILY_NAME), "Gras");
        let names = table(1, [record(7, 7, 7, b"Odd")]);
        assert_eq!(best_for(&names, NameId::FAMILY_NAME), "Odd");
    }

    #[test]
    fn mac_beats_unicode() {
        let names = table(
            1,
            [
                record(0, 3, 0, &utf16be("Unicode")),
                record(1, 0, 0, b"Mac"),
            ],
        );
        assert_eq!(best_for(&names, NameId::FAMILY_NAME), "Mac");
    }

    #[test]
    fn windows_english_wins() {
        let names = table(
            1,
            [
                record(0, 6, 0, &utf16be("Unicode")),
                record(3, 1, 0x40C, &utf16be("French")),
                record(1, 0, 0, b"Mac"),
                record(3, 1, 1033, &utf16be("English")),
            ],
        );
        assert_eq!(best_for(&names, NameId::FAMILY_NAME), "English");
    }

    #[test]
    fn newer_unicode_encodings_win() {
        let names = table(
            1,
            [
                record(0, 1, 0, &utf16be("1.1")),
                record(0, 3, 0, &utf16be("BMP")),
                record(0, 4, 0, &utf16be("Full")),
            ],
        );
        assert_eq!(best_for(&names, NameId::FAMILY_NAME), "Full");
    }

    #[test]
    fn first_exact_match_in_table_order() {
        let names = table(
            1,
            [
                record(1, 0, 0, b"first"),
                record(1, 0, 0, b"second"),
            ],
        );
        assert_eq!(best_for(&names, NameId::FAMILY_NAME), "first");
    }

    #[test]
    fn no_exact_match_is_empty() {
        let names = table(
            1,
            [
                record(3, 1, 0x407, &utf16be("Deutsch")),
                record(3, 1, 0x40C, &utf16be("Français")),
            ],
        );
        assert_eq!(best_for(&names, NameId::FAMILY_NAME), "");
        assert_eq!(names.best_string(NameId::FAMILY_NAME), "");
    }
}
