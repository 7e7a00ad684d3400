//! The OpenType tables read by this crate.

pub mod fvar;
pub mod name;
