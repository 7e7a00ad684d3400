#![no_main]
use font_names::{NameTable, VariationDescriptor};
use libfuzzer_sys::fuzz_target;

// The first two bytes give the length of the name table, the rest is split
// between name and fvar.
fuzz_target!(|data: &[u8]| {
    let Some((len, rest)) = data.split_first_chunk::<2>() else {
        return;
    };
    let split = (u16::from_be_bytes(*len) as usize).min(rest.len());
    let (name, fvar) = rest.split_at(split);
    let names = NameTable::from_bytes(name);
    if let Ok(desc) = VariationDescriptor::from_bytes(fvar, &names) {
        for axis in &desc.axes {
            let _ = axis.normalize(axis.default);
        }
    }
});
