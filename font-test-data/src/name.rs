//! name table test data

use crate::bebuffer::BeBuffer;

/// Encode a string as UTF-16BE, as used by the Unicode and Windows platforms.
pub fn utf16be(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

/// One entry in a name table: (platform, encoding, language, name id, string bytes)
pub type Entry = (u16, u16, u16, u16, Vec<u8>);

/// Build a format 0 name table, with the strings stored in order.
pub fn build(entries: &[Entry]) -> BeBuffer {
    let storage_offset = 6 + entries.len() * 12;
    let mut buf = BeBuffer::new()
        .push(0u16)
        .push(entries.len() as u16)
        .push(storage_offset as u16);
    let mut string_offset = 0;
    for (platform, encoding, language, name_id, string) in entries {
        buf = buf.extend([
            *platform,
            *encoding,
            *language,
            *name_id,
            string.len() as u16,
            string_offset as u16,
        ]);
        string_offset += string.len();
    }
    for (.., string) in entries {
        buf = buf.push(string.as_slice());
    }
    buf
}

/// A family name in two encodings, and a subfamily name.
pub fn simple() -> BeBuffer {
    build(&[
        (1, 0, 0, 1, b"Test".to_vec()),
        (3, 1, 0x409, 1, utf16be("Test")),
        (0, 3, 0, 2, utf16be("Regular")),
    ])
}

/// Three records; the second points past the end of the table.
pub fn one_bad_record() -> BeBuffer {
    BeBuffer::new()
        .extend([0u16, 3, 42])
        // record 1: "hi"
        .extend([1u16, 0, 0, 1, 2, 0])
        // record 2: 0xFFF0 bytes starting at offset 2
        .extend([1u16, 0, 0, 2, 0xFFF0, 2])
        // record 3: "OK"
        .extend([1u16, 0, 0, 3, 2, 2])
        .push(b"hiOK")
}

/// Strings referenced by the tables in [`crate::fvar`].
///
/// - 256: "Weight" (Windows and Mac)
/// - 257: "Regular", 258: "Bold"
/// - 259: "Width"
/// - 300: "TestVF-Bold", a PostScript name
/// - 25: "TestVF", the variations PostScript name prefix
pub fn variable_font_names() -> BeBuffer {
    build(&[
        (1, 0, 0, 256, b"Weight".to_vec()),
        (3, 1, 0x409, 256, utf16be("Weight")),
        (3, 1, 0x409, 257, utf16be("Regular")),
        (3, 1, 0x409, 258, utf16be("Bold")),
        (3, 1, 0x409, 259, utf16be("Width")),
        (3, 1, 0x409, 300, utf16be("TestVF-Bold")),
        (3, 1, 0x409, 25, utf16be("TestVF")),
    ])
}
