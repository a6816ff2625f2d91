use thiserror::Error;

use crate::AsciiArray;

/// An error from the `pngtext` crate.
///
/// Every error ends the parse that produced it. There's never a partial list
/// of records alongside an error.
#[derive(Debug, Error)]
pub enum PngTextError {
  /// The first 8 bytes of the stream aren't the PNG signature.
  #[error("not PNG data")]
  NotPngData,

  /// A text chunk declared a compression method other than zlib (method 0).
  #[error("unsupported compression type: {0}")]
  UnsupportedCompressionType(u8),

  /// The CRC stored after a chunk doesn't match the CRC of its tag and data.
  #[error("CRC doesn't match for {chunk} chunk: declared {declared:#010x}, computed {actual:#010x}")]
  CrcMismatch { chunk: AsciiArray<4>, declared: u32, actual: u32 },

  /// The data of a text chunk is malformed (missing null terminator, broken
  /// zlib stream, invalid UTF-8 where UTF-8 is required, and so on).
  #[error("failed to decode {chunk} chunk: {reason}")]
  Decode { chunk: AsciiArray<4>, reason: String },

  /// A chunk declared a length beyond the configured
  /// [`max_chunk_len`](crate::ParseOptions::max_chunk_len).
  #[error("{chunk} chunk declares {length} bytes, more than the limit of {max}")]
  ChunkTooLarge { chunk: AsciiArray<4>, length: u32, max: u32 },

  /// The underlying reader failed, or ran out of bytes early.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}

impl PngTextError {
  #[inline]
  pub(crate) fn decode(chunk: AsciiArray<4>, reason: impl Into<String>) -> Self {
    Self::Decode { chunk, reason: reason.into() }
  }
}

/// Shorthand for a result with a [`PngTextError`].
pub type PngTextResult<T> = Result<T, PngTextError>;
