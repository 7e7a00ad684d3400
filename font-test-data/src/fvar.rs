//! fvar table test data
//!
//! Name ids used here resolve against [`crate::name::variable_font_names`].

use crate::{bebuffer::BeBuffer, fixed};

/// Offset of the axisCount field in the header.
pub const AXIS_COUNT_OFFSET: usize = 8;
/// Offset of the instanceCount field in the header.
pub const INSTANCE_COUNT_OFFSET: usize = 12;

const HEADER_LEN: usize = 16;

/// A variation axis record.
#[derive(Clone, Debug)]
pub struct AxisSpec {
    pub tag: [u8; 4],
    pub min: f64,
    pub default: f64,
    pub max: f64,
    pub flags: u16,
    pub name_id: u16,
}

/// An instance record.
#[derive(Clone, Debug)]
pub struct InstanceSpec {
    pub name_id: u16,
    pub coords: Vec<f64>,
    pub ps_name_id: Option<u16>,
}

impl AxisSpec {
    pub fn new(tag: &[u8; 4], min: f64, default: f64, max: f64, name_id: u16) -> Self {
        AxisSpec {
            tag: *tag,
            min,
            default,
            max,
            flags: 0,
            name_id,
        }
    }
}

impl InstanceSpec {
    pub fn new(name_id: u16, coords: &[f64]) -> Self {
        InstanceSpec {
            name_id,
            coords: coords.to_vec(),
            ps_name_id: None,
        }
    }

    pub fn with_ps_name(mut self, ps_name_id: u16) -> Self {
        self.ps_name_id = Some(ps_name_id);
        self
    }
}

/// Just an fvar header, padded to the minimum length the reader accepts.
pub fn header(
    axis_count: u16,
    axis_size: u16,
    instance_count: u16,
    instance_size: u16,
) -> BeBuffer {
    BeBuffer::new()
        .extend([1u16, 0, HEADER_LEN as u16, 2])
        .extend([axis_count, axis_size, instance_count, instance_size])
        .pad_to(28)
}

/// Build an fvar table; each record is zero-padded to the given size.
pub fn build(
    axes: &[AxisSpec],
    instances: &[InstanceSpec],
    axis_size: u16,
    instance_size: u16,
) -> BeBuffer {
    let mut buf = BeBuffer::new()
        .extend([1u16, 0, HEADER_LEN as u16, 2])
        .extend([
            axes.len() as u16,
            axis_size,
            instances.len() as u16,
            instance_size,
        ]);
    for axis in axes {
        let start = buf.len();
        buf = buf
            .push(axis.tag)
            .extend([fixed(axis.min), fixed(axis.default), fixed(axis.max)])
            .extend([axis.flags, axis.name_id])
            .pad_to(start + axis_size as usize);
    }
    for instance in instances {
        let start = buf.len();
        buf = buf
            .extend([instance.name_id, 0])
            .extend(instance.coords.iter().map(|coord| fixed(*coord)));
        if let Some(id) = instance.ps_name_id {
            buf = buf.push(id);
        }
        buf = buf.pad_to(start + instance_size as usize);
    }
    buf
}

fn wght() -> AxisSpec {
    AxisSpec::new(b"wght", 100.0, 400.0, 900.0, 256)
}

fn wdth() -> AxisSpec {
    AxisSpec::new(b"wdth", 75.0, 100.0, 125.0, 259)
}

/// One `wght` axis (100, 400, 900), with instances "Regular" (400) and "Bold" (700).
pub fn wght_two_instances() -> BeBuffer {
    build(
        &[wght()],
        &[
            InstanceSpec::new(257, &[400.0]),
            InstanceSpec::new(258, &[700.0]),
        ],
        20,
        8,
    )
}

/// `wght` and `wdth` axes, with PostScript names on the instances.
///
/// The "Regular" instance uses 0xFFFF for its PostScript name id.
pub fn two_axes_with_ps_names() -> BeBuffer {
    build(
        &[wght(), wdth()],
        &[
            InstanceSpec::new(257, &[400.0, 100.0]).with_ps_name(0xFFFF),
            InstanceSpec::new(258, &[700.0, 75.0]).with_ps_name(300),
        ],
        20,
        14,
    )
}

/// Records larger than this version of the format requires.
///
/// Axis records are 24 bytes and instance records 16: the extra bytes
/// are filled with 0xFF so that misaligned reads are easy to spot.
pub fn oversized_records() -> BeBuffer {
    let mut buf = BeBuffer::new()
        .extend([1u16, 0, HEADER_LEN as u16, 2])
        .extend([2u16, 24, 2, 16]);
    for axis in [wght(), wdth()] {
        buf = buf
            .push(axis.tag)
            .extend([fixed(axis.min), fixed(axis.default), fixed(axis.max)])
            .extend([axis.flags, axis.name_id])
            .push([0xFFu8; 4]);
    }
    let instances = [(257u16, [400.0, 100.0], 0u16), (258, [700.0, 75.0], 300)];
    for (name_id, coords, ps_name_id) in instances {
        buf = buf
            .extend([name_id, 0])
            .extend(coords.map(fixed))
            .push(ps_name_id)
            .push([0xFFu8; 2]);
    }
    buf
}

/// Five `wght`-like axes declared, but only room for three.
pub fn truncated_axes() -> BeBuffer {
    let axes = [
        AxisSpec::new(b"wght", 100.0, 400.0, 900.0, 256),
        AxisSpec::new(b"wdth", 75.0, 100.0, 125.0, 259),
        AxisSpec::new(b"opsz", 8.0, 12.0, 72.0, 260),
        AxisSpec::new(b"slnt", -15.0, 0.0, 0.0, 261),
        AxisSpec::new(b"GRAD", -1.0, 0.0, 1.0, 262),
    ];
    build(&axes, &[], 20, 24).truncate(HEADER_LEN + 3 * 20 + 10)
}
