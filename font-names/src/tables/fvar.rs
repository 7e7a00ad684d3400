//! The [Font Variations](https://docs.microsoft.com/en-us/typography/opentype/spec/fvar) table

#[path = "./instance_record.rs"]
mod instance_record;

use font_types::{NameId, Tag};

use crate::{FontData, ReadError};

pub use instance_record::InstanceRecord;

/// The smallest table we are willing to look at.
///
/// The header itself is 16 bytes; anything shorter than this can't hold a
/// useful axis either, and is treated as missing.
pub const MIN_TABLE_LEN: usize = 14 * 2;

/// tag, min, default, max, flags, axisNameID
pub const MIN_AXIS_RECORD_LEN: usize = 4 + 3 * 4 + 2 * 2;

/// Offset of the flags field within an axis record.
const AXIS_FLAGS_OFFSET: usize = 16;

/// Set if the axis should not be exposed directly in user interfaces.
pub const HIDDEN_AXIS: u16 = 0x0001;

/// The header of an `fvar` table, and the data it describes.
#[derive(Clone, Debug)]
pub struct Fvar<'a> {
    data: FontData<'a>,
    axis_array_offset: u16,
    axis_count: u16,
    axis_size: u16,
    instance_count: u16,
    instance_size: u16,
}

impl<'a> Fvar<'a> {
    pub const TAG: Tag = Tag::new(b"fvar");

    /// Read and validate the table header.
    ///
    /// Returns [`ReadError::OutOfBounds`] if the data is shorter than
    /// [`MIN_TABLE_LEN`], and [`ReadError::MalformedTable`] if either record
    /// size is too small to hold the fields we need to read from it.
    pub fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        if data.len() < MIN_TABLE_LEN {
            return Err(ReadError::OutOfBounds);
        }
        let mut cursor = data.cursor();
        // majorVersion, minorVersion
        cursor.advance_by(4);
        let axis_array_offset = cursor.read_u16()?;
        // reserved
        cursor.advance_by(2);
        let axis_count = cursor.read_u16()?;
        let axis_size = cursor.read_u16()?;
        let instance_count = cursor.read_u16()?;
        let instance_size = cursor.read_u16()?;

        let required = InstanceRecord::common_byte_len(axis_count);
        if (instance_size as usize) < required {
            return Err(ReadError::MalformedTable {
                table: Self::TAG,
                record: "instance",
                size: instance_size,
                required,
            });
        }
        if (axis_size as usize) < MIN_AXIS_RECORD_LEN {
            return Err(ReadError::MalformedTable {
                table: Self::TAG,
                record: "axis",
                size: axis_size,
                required: MIN_AXIS_RECORD_LEN,
            });
        }
        Ok(Fvar {
            data,
            axis_array_offset,
            axis_count,
            axis_size,
            instance_count,
            instance_size,
        })
    }

    /// Offset in bytes from the beginning of the table to the start of the axis array.
    pub fn axis_array_offset(&self) -> u16 {
        self.axis_array_offset
    }

    /// The number of variation axes in the font.
    pub fn axis_count(&self) -> u16 {
        self.axis_count
    }

    /// The size in bytes of each axis record.
    pub fn axis_size(&self) -> u16 {
        self.axis_size
    }

    /// The number of named instances defined in the font.
    pub fn instance_count(&self) -> u16 {
        self.instance_count
    }

    /// The size in bytes of each instance record.
    pub fn instance_size(&self) -> u16 {
        self.instance_size
    }

    /// `true` if each instance record carries a PostScript name id.
    pub fn has_post_script_name_ids(&self) -> bool {
        InstanceRecord::has_post_script_name_id(self.axis_count, self.instance_size)
    }

    fn instance_array_offset(&self) -> usize {
        (self.axis_count as usize)
            .saturating_mul(self.axis_size as usize)
            .saturating_add(self.axis_array_offset as usize)
    }

    /// Returns the variation axis records.
    ///
    /// This stops early if the data ends before `axis_count` records.
    pub fn axes(&self) -> impl Iterator<Item = AxisRecord> + 'a {
        RecordIter::new(
            "axis",
            self.data,
            self.axis_array_offset as usize,
            self.axis_count,
            self.axis_size,
        )
        .filter_map(|record| AxisRecord::read(record).ok())
    }

    /// Returns the tags of the axes, in order.
    pub fn axis_tags(&self) -> Vec<Tag> {
        self.axes().map(|axis| axis.axis_tag).collect()
    }

    /// Returns the instance records.
    ///
    /// This stops early if the data ends before `instance_count` records.
    pub fn instances(&self) -> impl Iterator<Item = InstanceRecord> + 'a {
        let axis_count = self.axis_count;
        let instance_size = self.instance_size;
        RecordIter::new(
            "instance",
            self.data,
            self.instance_array_offset(),
            self.instance_count,
            self.instance_size,
        )
        .filter_map(move |record| InstanceRecord::read(record, axis_count, instance_size).ok())
    }
}

/// The [VariationAxisRecord](https://learn.microsoft.com/en-us/typography/opentype/spec/fvar#variationaxisrecord)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRecord {
    pub axis_tag: Tag,
    pub min_value: f64,
    pub default_value: f64,
    pub max_value: f64,
    pub flags: u16,
    pub axis_name_id: NameId,
}

impl AxisRecord {
    /// Parse an axis record. Trailing bytes beyond the known fields are ignored.
    pub fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let axis_tag = cursor.read_tag()?;
        let min_value = cursor.read_fixed()?;
        let default_value = cursor.read_fixed()?;
        let max_value = cursor.read_fixed()?;
        let flags = data.read_u16_at(AXIS_FLAGS_OFFSET)?;
        let axis_name_id = NameId::new(data.read_u16_at(AXIS_FLAGS_OFFSET + 2)?);
        Ok(AxisRecord {
            axis_tag,
            min_value,
            default_value,
            max_value,
            flags,
            axis_name_id,
        })
    }

    pub fn is_hidden(&self) -> bool {
        self.flags & HIDDEN_AXIS != 0
    }
}

/// Yields fixed-size records from an array, stopping at the first one that
/// doesn't fit in the data.
struct RecordIter<'a> {
    kind: &'static str,
    data: FontData<'a>,
    pos: usize,
    read: u16,
    count: u16,
    record_size: u16,
}

impl<'a> RecordIter<'a> {
    fn new(
        kind: &'static str,
        data: FontData<'a>,
        start: usize,
        count: u16,
        record_size: u16,
    ) -> Self {
        RecordIter {
            kind,
            data,
            pos: start,
            read: 0,
            count,
            record_size,
        }
    }
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = FontData<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.read >= self.count {
            return None;
        }
        let Some(record) = self.data.slice(self.pos, self.record_size as usize) else {
            log::warn!(
                "fvar {} array truncated: {} of {} records present",
                self.kind,
                self.read,
                self.count
            );
            self.read = self.count;
            return None;
        };
        self.read += 1;
        self.pos = self.pos.saturating_add(self.record_size as usize);
        Some(record)
    }
}
