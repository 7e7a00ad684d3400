#![no_main]
use font_names::{decode_one, NameTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let names = NameTable::from_bytes(data);
    for (id, records) in names.iter() {
        for record in records {
            let _ = decode_one(record);
        }
        let _ = names.best_string(id);
    }
});
