//! Reading names and variation axes from OpenType fonts
//!
//! This crate decodes two tables:
//!
//! - [`name`][tables::name], which holds the localized strings of a font
//!   (family name, style names, copyright, and so on), and
//! - [`fvar`][tables::fvar], which describes the axes and named instances
//!   of a variable font.
//!
//! Both decoders work on the raw bytes of a single table; locating tables
//! within a font file is left to the caller. Font data from the wild is
//! frequently damaged, so the decoders are tolerant: a missing or truncated
//! table produces an empty (or partial) result rather than an error. The
//! only errors are for `fvar` tables whose record sizes are too small to be
//! interpreted at all.
//!
//! # Example
//!
//! ```no_run
//! # let name_bytes: &[u8] = &[];
//! # let fvar_bytes: &[u8] = &[];
//! use font_names::{NameId, NameTable, VariationDescriptor};
//!
//! let names = NameTable::from_bytes(name_bytes);
//! println!("family: {}", names.best_string(NameId::FAMILY_NAME));
//!
//! let variations = VariationDescriptor::from_bytes(fvar_bytes, &names).unwrap();
//! for axis in &variations.axes {
//!     println!("{} ({}): {}..{}", axis.display_name, axis.tag, axis.minimum, axis.maximum);
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod descriptor;
mod font_data;
mod read;
pub mod string;
pub mod tables;

pub use descriptor::{
    read_fvar, Axis, AxisValues, NamedInstance, VariationDescriptor, VariationDescriptorBuilder,
};
pub use font_data::{Cursor, FontData};
pub use read::ReadError;
pub use string::{best_for, decode_one};
pub use tables::name::{NameRecord, NameTable};

/// Public re-export of the font-types crate.
pub extern crate font_types as types;

pub use types::{NameId, Tag};
