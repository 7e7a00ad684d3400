//! test data shared between the font-names crates.
//!
//! Everything here is synthetic: tables are assembled with [`BeBuffer`]
//! so that each test can describe exactly the bytes it cares about.
//!
//! [`BeBuffer`]: bebuffer::BeBuffer

pub mod bebuffer;
pub mod fvar;
pub mod name;

/// Convert a float to the raw bits of a 16.16 fixed-point number.
pub fn fixed(value: f64) -> i32 {
    (value * 65536.0).round() as i32
}
