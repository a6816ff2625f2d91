#![cfg_attr(docs_rs, feature(doc_cfg))]
//#![warn(missing_docs)]

//! A crate for reading the textual metadata (`tEXt`, `zTXt`, and `iTXt`
//! chunks) out of PNG data.
//!
//! Hand [`parse_textual_data`] anything that's [`Read`](std::io::Read) and
//! you get back a [`TextualRecordList`] in chunk order, or the first error.
//!
//! ```no_run
//! # fn main() -> Result<(), pngtext::PngTextError> {
//! let mut file = std::fs::File::open("test.png")?;
//! let list = pngtext::parse_textual_data(&mut file)?;
//! for record in &list {
//!   println!("{}: {}", record.keyword(), record.text());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Image data isn't decoded, other chunks are only CRC checked, and nothing
//! is ever written.

pub mod ascii_array;
pub use ascii_array::*;

pub mod int_endian;
pub use int_endian::*;

mod error;
pub use error::*;

mod options;
pub use options::*;

pub mod png;
pub use png::{
  is_png_signature_correct, keyword_less, parse_textual_data, parse_textual_data_from_bytes,
  parse_textual_data_with, TextualRecord, TextualRecordList, PNG_SIGNATURE,
};
