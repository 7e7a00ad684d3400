//! Decoding `name` and `fvar` together, the way a font loader would.

use font_names::{NameId, NameTable, ReadError, Tag, VariationDescriptor};
use font_test_data::{
    fvar::{self as fvar_data, AXIS_COUNT_OFFSET},
    name as name_data,
};
use pretty_assertions::assert_eq;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn names() -> NameTable {
    NameTable::from_bytes(&name_data::variable_font_names())
}

#[test]
fn family_and_subfamily() {
    let names = NameTable::from_bytes(&name_data::simple());
    assert_eq!(names.len(), 2);
    assert_eq!(names.best_string(NameId::FAMILY_NAME), "Test");
    assert_eq!(names.best_string(NameId::SUBFAMILY_NAME), "Regular");
    assert_eq!(names.best_string(NameId::FULL_NAME), "");
}

#[test]
fn postscript_names() {
    let desc = VariationDescriptor::from_bytes(&fvar_data::two_axes_with_ps_names(), &names())
        .unwrap();
    let tags = desc.axes.iter().map(|axis| axis.tag).collect::<Vec<_>>();
    assert_eq!(tags, [Tag::new(b"wght"), Tag::new(b"wdth")]);
    assert_eq!(desc.axes[1].display_name, "Width");

    let regular = desc.named_instance("Regular").unwrap();
    assert_eq!(regular.postscript_name_id, None);
    assert_eq!(regular.postscript_name, "");

    let bold = desc.named_instance("Bold").unwrap();
    assert_eq!(bold.postscript_name_id, Some(NameId::new(300)));
    assert_eq!(bold.postscript_name, "TestVF-Bold");
    assert_eq!(
        bold.axis_values.iter().collect::<Vec<_>>(),
        [(Tag::new(b"wght"), 700.0), (Tag::new(b"wdth"), 75.0)]
    );
}

#[test]
fn oversized_records_are_skipped_over() {
    let desc =
        VariationDescriptor::from_bytes(&fvar_data::oversized_records(), &names()).unwrap();
    assert_eq!(desc.axes.len(), 2);
    assert_eq!(desc.axes[1].tag, Tag::new(b"wdth"));
    assert_eq!(desc.axes[1].minimum, 75.0);
    assert_eq!(desc.named_instances.len(), 2);
    assert_eq!(desc.named_instances[0].postscript_name_id, None);
    assert_eq!(desc.named_instances[1].name, "Bold");
    assert_eq!(desc.named_instances[1].postscript_name, "TestVF-Bold");
    assert_eq!(
        desc.named_instances[1].axis_values.get(Tag::new(b"wdth")),
        Some(75.0)
    );
}

#[test]
fn truncated_axis_array() {
    init();
    let desc = VariationDescriptor::from_bytes(&fvar_data::truncated_axes(), &names()).unwrap();
    let tags = desc.axes.iter().map(|axis| axis.tag).collect::<Vec<_>>();
    assert_eq!(
        tags,
        [Tag::new(b"wght"), Tag::new(b"wdth"), Tag::new(b"opsz")]
    );
    assert!(desc.named_instances.is_empty());
}

#[test]
fn axis_count_larger_than_data() {
    init();
    // claim more axes than there are, and keep the instance size consistent
    let mut buf = fvar_data::wght_two_instances();
    buf.write_at(AXIS_COUNT_OFFSET, 2u16);
    let err = VariationDescriptor::from_bytes(&buf, &names()).unwrap_err();
    assert_eq!(
        err,
        ReadError::MalformedTable {
            table: Tag::new(b"fvar"),
            record: "instance",
            size: 8,
            required: 12,
        }
    );
}

#[test]
fn short_inputs() {
    init();
    for len in 0..28 {
        let data = vec![0xFFu8; len];
        let names = NameTable::from_bytes(&data);
        assert!(names.is_empty(), "{len}");
        let desc = VariationDescriptor::from_bytes(&data, &names).unwrap();
        assert_eq!(desc, VariationDescriptor::default());
    }
}

#[test]
fn hidden_axes_are_reported() {
    let axis = fvar_data::AxisSpec {
        flags: 1,
        ..fvar_data::AxisSpec::new(b"ital", 0.0, 0.0, 1.0, 256)
    };
    let buf = fvar_data::build(&[axis], &[], 20, 8);
    let desc = VariationDescriptor::from_bytes(&buf, &names()).unwrap();
    assert!(desc.axes[0].hidden);
    assert_eq!(desc.axes[0].normalize(0.5), 0.5);
}
