//! Module for pulling textual metadata out of PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/#11textinfo
//!
//! PNG data is a fixed 8 byte signature followed by a series of "chunks".
//! Each chunk is a big-endian length, a four letter type tag, that many bytes
//! of data, and then a CRC-32 over the tag and data. Three chunk types carry
//! text:
//!
//! * **`tEXt`** - a Latin-1 keyword, a null byte, and Latin-1 text.
//! * **`zTXt`** - a Latin-1 keyword, a null byte, a compression method byte
//!   (always 0, zlib), and then a zlib stream of Latin-1 text.
//! * **`iTXt`** - a keyword, a compression flag, a compression method, a
//!   language tag, a translated keyword, and UTF-8 text that might be zlib
//!   compressed.
//!
//! [`parse_textual_data`] reads a stream front to back, checks every chunk's
//! CRC (not just the text chunks), decodes the text chunks, and stops at the
//! `IEND` chunk. Every other chunk type is read and thrown away.
//!
//! ## Parsing Errors
//!
//! Unlike a pixel decoder, this module doesn't try to get past bad data. A
//! wrong signature, a wrong CRC, or a text chunk that doesn't decode all stop
//! the parse, and you get the error instead of a partial list.
//!
//! ```no_run
//! # fn main() -> Result<(), pngtext::PngTextError> {
//! let file = std::fs::File::open("test.png")?;
//! let records = pngtext::png::parse_textual_data(file)?;
//! if let Some(description) = records.find("Description") {
//!   println!("{}", description.text());
//! }
//! # Ok(())
//! # }
//! ```

use std::io::{BufRead, Read};

use miniz_oxide::inflate::{decompress_to_vec_zlib, decompress_to_vec_zlib_with_limit, TINFLStatus};

use crate::{AsciiArray, ParseOptions, PngTextError, PngTextResult};

mod crc32;
pub use crc32::*;

mod chunk_reader;
pub use chunk_reader::*;

mod records;
pub use records::*;

mod itxt;
mod text;
mod ztxt;


/// Reads a field that ends with a null byte, and gives back the field without
/// that one null byte.
///
/// Running out of chunk data before the null is a decode error, but a stream
/// that's cut short is an I/O error.
fn read_null_terminated<B: BufRead>(
  payload: &mut B, chunk: AsciiArray<4>, field: &str,
) -> PngTextResult<Vec<u8>> {
  let mut buf = Vec::new();
  payload.read_until(0, &mut buf)?;
  match buf.pop() {
    Some(0) => Ok(buf),
    _ => Err(PngTextError::decode(chunk, format!("missing null terminator after {field}"))),
  }
}

fn read_u8<B: BufRead>(payload: &mut B, chunk: AsciiArray<4>, field: &str) -> PngTextResult<u8> {
  let byte = match payload.fill_buf()? {
    [] => return Err(PngTextError::decode(chunk, format!("data ended before {field}"))),
    [byte, ..] => *byte,
  };
  payload.consume(1);
  Ok(byte)
}

/// Keywords are 1 or more bytes of Latin-1.
fn read_keyword<B: BufRead>(payload: &mut B, chunk: AsciiArray<4>) -> PngTextResult<String> {
  let keyword = read_null_terminated(payload, chunk, "keyword")?;
  if keyword.is_empty() {
    return Err(PngTextError::decode(chunk, "keyword is empty"));
  }
  Ok(latin1_to_string(&keyword))
}

/// Latin-1 maps each byte straight to the code point of the same value, so
/// this can't fail.
#[inline]
#[must_use]
fn latin1_to_string(bytes: &[u8]) -> String {
  bytes.iter().copied().map(char::from).collect()
}

fn utf8_to_string(bytes: Vec<u8>, chunk: AsciiArray<4>, field: &str) -> PngTextResult<String> {
  String::from_utf8(bytes)
    .map_err(|e| PngTextError::decode(chunk, format!("{field} is not UTF-8: {e}")))
}

fn inflate_text(
  compressed: &[u8], chunk: AsciiArray<4>, options: &ParseOptions,
) -> PngTextResult<Vec<u8>> {
  let result = match options.max_text_len {
    Some(max) => decompress_to_vec_zlib_with_limit(compressed, max),
    None => decompress_to_vec_zlib(compressed),
  };
  result.map_err(|e| match e.status {
    TINFLStatus::HasMoreOutput => {
      PngTextError::decode(chunk, "inflated text is larger than the configured limit")
    }
    status => PngTextError::decode(chunk, format!("zlib stream is corrupt: {status:?}")),
  })
}
