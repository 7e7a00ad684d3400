//! Named axes and instances of a variable font.
//!
//! A [`VariationDescriptor`] combines the `fvar` table with strings from the
//! `name` table, producing the information needed to present a font's
//! variations to a user: each axis with its range and display name, and each
//! named instance with its name and coordinates.

use font_types::{NameId, Tag};

use crate::{
    string::best_for,
    tables::{
        fvar::{self, AxisRecord, Fvar, InstanceRecord},
        name::NameTable,
    },
    FontData, ReadError,
};

/// Decode an `fvar` table, labelling axes and instances from `names`.
///
/// Data too short to contain an `fvar` header is treated as a missing table:
/// the result has no axes or instances, but the PostScript name prefix is
/// still resolved. Record sizes too small to interpret are an error.
pub fn read_fvar(data: FontData, names: &NameTable) -> Result<VariationDescriptor, ReadError> {
    let mut builder = VariationDescriptorBuilder::new(names);
    if data.len() < fvar::MIN_TABLE_LEN {
        log::debug!("fvar table too short ({} bytes)", data.len());
        return Ok(builder.build());
    }
    let fvar = Fvar::read(data)?;
    for axis in fvar.axes() {
        builder.push_axis(axis);
    }
    for instance in fvar.instances() {
        builder.push_instance(instance);
    }
    Ok(builder.build())
}

/// A variation axis, with its display name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Axis {
    pub tag: Tag,
    pub minimum: f64,
    pub default: f64,
    pub maximum: f64,
    /// Set if the axis should not be exposed in user interfaces.
    pub hidden: bool,
    pub display_name: String,
    pub name_id: NameId,
}

impl Axis {
    /// Returns a normalized coordinate for the given user-space value.
    ///
    /// The value is clamped to the axis range and mapped so that the minimum
    /// is -1, the default is 0 and the maximum is 1.
    pub fn normalize(&self, value: f64) -> f64 {
        use core::cmp::Ordering::*;
        let min_value = self.minimum;
        let default_value = self.default;
        // Make sure max is >= min to avoid a panic in clamp.
        let max_value = self.maximum.max(min_value);
        let value = value.clamp(min_value, max_value);
        let value = match value.partial_cmp(&default_value) {
            Some(Less) => -((default_value - value) / (default_value - min_value)),
            Some(Greater) => (value - default_value) / (max_value - default_value),
            _ => 0.0,
        };
        value.clamp(-1.0, 1.0)
    }
}

/// Coordinates of a named instance, keyed by axis tag, in axis order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisValues(Vec<(Tag, f64)>);

impl AxisValues {
    /// Set the value for `tag`.
    ///
    /// If the tag is already present its value is replaced in place.
    pub fn insert(&mut self, tag: Tag, value: f64) {
        match self.0.iter_mut().find(|(existing, _)| *existing == tag) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((tag, value)),
        }
    }

    pub fn get(&self, tag: Tag) -> Option<f64> {
        self.0
            .iter()
            .find_map(|(existing, value)| (*existing == tag).then_some(*value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tag, f64)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Tag, f64)> for AxisValues {
    fn from_iter<T: IntoIterator<Item = (Tag, f64)>>(iter: T) -> Self {
        let mut values = AxisValues::default();
        for (tag, value) in iter {
            values.insert(tag, value);
        }
        values
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AxisValues {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(tag, value)| (tag, value)))
    }
}

/// A named instance: a preset location in the font's design space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NamedInstance {
    pub name: String,
    /// Empty if the instance has no PostScript name.
    pub postscript_name: String,
    pub axis_values: AxisValues,
    pub subfamily_name_id: NameId,
    pub postscript_name_id: Option<NameId>,
}

/// The axes and named instances of a variable font.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VariationDescriptor {
    pub axes: Vec<Axis>,
    pub named_instances: Vec<NamedInstance>,
    pub variations_postscript_name_prefix: String,
}

impl VariationDescriptor {
    /// Decode an `fvar` table from raw bytes. See [`read_fvar`].
    pub fn from_bytes(fvar: &[u8], names: &NameTable) -> Result<Self, ReadError> {
        read_fvar(FontData::new(fvar), names)
    }

    /// The first axis with the given tag.
    pub fn axis(&self, tag: Tag) -> Option<&Axis> {
        self.axes.iter().find(|axis| axis.tag == tag)
    }

    /// The first named instance with the given name.
    pub fn named_instance(&self, name: &str) -> Option<&NamedInstance> {
        self.named_instances.iter().find(|inst| inst.name == name)
    }

    /// `true` if there are no axes and no named instances.
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty() && self.named_instances.is_empty()
    }
}

/// Assembles a [`VariationDescriptor`] from raw `fvar` records.
pub struct VariationDescriptorBuilder<'a> {
    names: &'a NameTable,
    axes: Vec<Axis>,
    named_instances: Vec<NamedInstance>,
}

impl<'a> VariationDescriptorBuilder<'a> {
    pub fn new(names: &'a NameTable) -> Self {
        VariationDescriptorBuilder {
            names,
            axes: Vec::new(),
            named_instances: Vec::new(),
        }
    }

    pub fn push_axis(&mut self, record: AxisRecord) -> &mut Self {
        self.axes.push(Axis {
            tag: record.axis_tag,
            minimum: record.min_value,
            default: record.default_value,
            maximum: record.max_value,
            hidden: record.is_hidden(),
            display_name: best_for(self.names, record.axis_name_id),
            name_id: record.axis_name_id,
        });
        self
    }

    /// Add an instance; its coordinates are paired with the axes pushed so far.
    pub fn push_instance(&mut self, record: InstanceRecord) -> &mut Self {
        let axis_values = self
            .axes
            .iter()
            .map(|axis| axis.tag)
            .zip(record.coordinates.iter().copied())
            .collect();
        let postscript_name = record
            .post_script_name_id
            .map(|id| best_for(self.names, id))
            .unwrap_or_default();
        self.named_instances.push(NamedInstance {
            name: best_for(self.names, record.subfamily_name_id),
            postscript_name,
            axis_values,
            subfamily_name_id: record.subfamily_name_id,
            postscript_name_id: record.post_script_name_id,
        });
        self
    }

    pub fn build(self) -> VariationDescriptor {
        VariationDescriptor {
            variations_postscript_name_prefix: best_for(
                self.names,
                NameId::VARIATIONS_POSTSCRIPT_NAME_PREFIX,
            ),
            axes: self.axes,
            named_instances: self.named_instances,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use font_test_data::{fvar as fvar_data, name as name_data};
    use pretty_assertions::assert_eq;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn wght(min: f64, default: f64, max: f64) -> Axis {
        Axis {
            tag: Tag::new(b"wght"),
            minimum: min,
            default,
            maximum: max,
            hidden: false,
            display_name: "Weight".into(),
            name_id: NameId::new(256),
        }
    }

    #[test]
    fn one_axis_two_instances() {
        let names = NameTable::from_bytes(&name_data::variable_font_names());
        let desc = VariationDescriptor::from_bytes(&fvar_data::wght_two_instances(), &names).unwrap();
        assert_eq!(desc.axes, [wght(100.0, 400.0, 900.0)]);
        assert_eq!(desc.named_instances.len(), 2);
        let regular = &desc.named_instances[0];
        assert_eq!(regular.name, "Regular");
        assert_eq!(regular.postscript_name, "");
        assert_eq!(regular.axis_values.iter().collect::<Vec<_>>(), [(Tag::new(b"wght"), 400.0)]);
        let bold = &desc.named_instances[1];
        assert_eq!(bold.name, "Bold");
        assert_eq!(bold.axis_values.get(Tag::new(b"wght")), Some(700.0));
        assert_eq!(desc.variations_postscript_name_prefix, "TestVF");
        assert_eq!(desc.named_instance("Bold"), Some(bold));
        assert_eq!(desc.axis(Tag::new(b"wght")).unwrap().display_name, "Weight");
    }

    #[test]
    fn short_table_only_has_prefix() {
        init();
        let names = NameTable::from_bytes(&name_data::variable_font_names());
        for len in [0, 1, fvar::MIN_TABLE_LEN - 1] {
            let data = vec![0u8; len];
            let desc = read_fvar(FontData::new(&data), &names).unwrap();
            assert!(desc.is_empty());
            assert_eq!(desc.variations_postscript_name_prefix, "TestVF");
        }
    }

    #[test]
    fn missing_names_are_empty() {
        let names = NameTable::default();
        let desc = VariationDescriptor::from_bytes(&fvar_data::wght_two_instances(), &names).unwrap();
        assert_eq!(desc.axes[0].display_name, "");
        assert_eq!(desc.named_instances[0].name, "");
        assert_eq!(desc.variations_postscript_name_prefix, "");
    }

    #[test]
    fn builder_pairs_coordinates_with_axes() {
        let names = NameTable::default();
        let mut builder = VariationDescriptorBuilder::new(&names);
        for tag in [b"wght", b"wdth"] {
            builder.push_axis(AxisRecord {
                axis_tag: Tag::new(tag),
                min_value: 0.0,
                default_value: 0.0,
                max_value: 1.0,
                flags: 0,
                axis_name_id: NameId::new(256),
            });
        }
        builder.push_instance(InstanceRecord {
            subfamily_name_id: NameId::new(2),
            flags: 0,
            coordinates: vec![0.25, 0.75],
            post_script_name_id: None,
        });
        let desc = builder.build();
        let values = &desc.named_instances[0].axis_values;
        assert_eq!(values.len(), 2);
        assert_eq!(values.get(Tag::new(b"wght")), Some(0.25));
        assert_eq!(values.get(Tag::new(b"wdth")), Some(0.75));
    }

    #[test]
    fn duplicate_tags_keep_first_position() {
        let values: AxisValues = [
            (Tag::new(b"wght"), 1.0),
            (Tag::new(b"wdth"), 2.0),
            (Tag::new(b"wght"), 3.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            values.iter().collect::<Vec<_>>(),
            [(Tag::new(b"wght"), 3.0), (Tag::new(b"wdth"), 2.0)]
        );
    }

    #[test]
    fn normalize() {
        let axis = wght(100.0, 400.0, 900.0);
        let values = [0.0, 100.0, 250.0, 400.0, 650.0, 900.0, 1000.0];
        let expected = [-1.0, -1.0, -0.5, 0.0, 0.5, 1.0, 1.0];
        for (value, expected) in values.into_iter().zip(expected) {
            assert_eq!(axis.normalize(value), expected, "{value}");
        }
    }

    #[test]
    fn normalize_inverted_range() {
        // max < min: the range collapses to min
        let axis = wght(400.0, 400.0, 100.0);
        assert_eq!(axis.normalize(900.0), 0.0);
        assert_eq!(axis.normalize(0.0), 0.0);
        // default outside the range
        let axis = wght(100.0, 50.0, 200.0);
        assert_eq!(axis.normalize(100.0), 1.0 / 3.0);
        assert_eq!(axis.normalize(200.0), 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize() {
        let names = NameTable::from_bytes(&name_data::variable_font_names());
        let desc = VariationDescriptor::from_bytes(&fvar_data::wght_two_instances(), &names).unwrap();
        let json = serde_json::to_value(&desc).unwrap();
        assert_eq!(json["axes"][0]["tag"], "wght");
        assert_eq!(json["axes"][0]["maximum"], 900.0);
        assert_eq!(json["named_instances"][1]["axis_values"]["wght"], 700.0);
        assert_eq!(json["variations_postscript_name_prefix"], "TestVF");
    }
}
