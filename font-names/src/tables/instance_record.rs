//! An fvar InstanceRecord

use font_types::NameId;

use crate::{FontData, ReadError};

/// The [InstanceRecord](https://learn.microsoft.com/en-us/typography/opentype/spec/fvar#instancerecord)
#[derive(Clone, Debug, PartialEq)]
pub struct InstanceRecord {
    /// The name ID for entries in the 'name' table that provide subfamily names for this instance.
    pub subfamily_name_id: NameId,
    /// Reserved for future use; set to 0.
    pub flags: u16,
    /// The coordinates of this instance, one per axis, in axis order.
    pub coordinates: Vec<f64>,
    /// Optional. The name ID for entries in the 'name' table that provide PostScript names for this instance.
    pub post_script_name_id: Option<NameId>,
}

impl InstanceRecord {
    /// Size of common fields (subfamily_name_id and flags) plus axis coordinates.
    pub(crate) fn common_byte_len(axis_count: u16) -> usize {
        2 * 2 + axis_count as usize * 4
    }

    /// The instance contains a post_script_name_id field if the instance size
    /// is large enough to hold the common fields plus the 2 bytes for the
    /// optional field.
    pub(crate) fn has_post_script_name_id(axis_count: u16, instance_size: u16) -> bool {
        instance_size as usize >= Self::common_byte_len(axis_count) + 2
    }

    /// Parse an instance record with a known axis_count and instance_size
    ///
    /// Any bytes after the fields described by `instance_size` are ignored.
    pub fn read(data: FontData, axis_count: u16, instance_size: u16) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let subfamily_name_id = NameId::new(cursor.read_u16()?);
        let flags = cursor.read_u16()?;
        let coordinates = (0..axis_count)
            .map(|_| cursor.read_fixed())
            .collect::<Result<Vec<_>, _>>()?;
        let post_script_name_id = if Self::has_post_script_name_id(axis_count, instance_size) {
            let id = cursor.read_u16()?;
            // From <https://learn.microsoft.com/en-us/typography/opentype/spec/fvar#instancerecord>:
            // "If the value is 0xFFFF, then the value is ignored, and no
            // PostScript name equivalent is provided for the instance."
            // Zero is not a valid font-specific name id either.
            (id != 0 && id != 0xFFFF).then_some(NameId::new(id))
        } else {
            None
        };
        Ok(InstanceRecord {
            subfamily_name_id,
            flags,
            coordinates,
            post_script_name_id,
        })
    }
}
