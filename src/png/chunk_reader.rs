use std::io::{self, BufReader, Read};

use bytemuck::{Pod, Zeroable};
use log::{debug, trace};

use super::*;
use crate::U32BE;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the PNG signature is correct.
///
/// If the slice is too short this gives `false`.
#[inline]
#[must_use]
pub fn is_png_signature_correct(bytes: &[u8]) -> bool {
  bytes.get(..8) == Some(&PNG_SIGNATURE[..])
}

/// The length and type tag at the start of every chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
struct ChunkHeader {
  length: U32BE,
  chunk_ty: [u8; 4],
}

/// What the parser does with a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
enum ChunkKind {
  /// Plain text
  tEXt,
  /// Compressed text
  zTXt,
  /// International text
  iTXt,
  /// Image End
  IEND,
  /// Anything else, read and discarded.
  Other,
}
impl From<AsciiArray<4>> for ChunkKind {
  #[inline]
  #[must_use]
  fn from(tag: AsciiArray<4>) -> Self {
    match tag.as_bytes() {
      b"tEXt" => Self::tEXt,
      b"zTXt" => Self::zTXt,
      b"iTXt" => Self::iTXt,
      b"IEND" => Self::IEND,
      _ => Self::Other,
    }
  }
}

/// A view of exactly one chunk's data.
///
/// Every byte read through here also goes into the chunk's CRC. Reads stop at
/// the declared length, and if the stream ends before that it's an
/// `UnexpectedEof` error rather than a short read.
struct ChunkPayload<'r, R> {
  inner: &'r mut R,
  remaining: u64,
  crc: Crc32,
}
impl<'r, R: Read> ChunkPayload<'r, R> {
  #[inline]
  fn new(inner: &'r mut R, length: u32, crc: Crc32) -> Self {
    Self { inner, remaining: u64::from(length), crc }
  }

  #[inline]
  #[must_use]
  fn crc(&self) -> u32 {
    self.crc.finish()
  }
}
impl<R: Read> Read for ChunkPayload<'_, R> {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    if self.remaining == 0 || buf.is_empty() {
      return Ok(0);
    }
    let max = usize::try_from(self.remaining).unwrap_or(usize::MAX).min(buf.len());
    let count = self.inner.read(&mut buf[..max])?;
    if count == 0 {
      return Err(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "stream ended inside of a chunk",
      ));
    }
    self.crc.update(&buf[..count]);
    self.remaining -= count as u64;
    Ok(count)
  }
}

/// Reads PNG data from `reader` and gives back all of the textual records in
/// the order they appear.
///
/// The reader is read up to and including the `IEND` chunk and no further.
/// It isn't closed, pass `&mut reader` if you want to keep using it.
///
/// ## Failure
/// * [`NotPngData`](PngTextError::NotPngData) if the signature is wrong.
/// * [`CrcMismatch`](PngTextError::CrcMismatch) if any chunk's CRC is wrong.
/// * [`Decode`](PngTextError::Decode) or
///   [`UnsupportedCompressionType`](PngTextError::UnsupportedCompressionType)
///   if a text chunk can't be decoded.
/// * [`Io`](PngTextError::Io) if the reader fails, including when it runs out
///   of data before `IEND`.
#[inline]
pub fn parse_textual_data<R: Read>(reader: R) -> PngTextResult<TextualRecordList> {
  parse_textual_data_with(reader, &ParseOptions::default())
}

/// As [`parse_textual_data`], for PNG data that's already in memory.
#[inline]
pub fn parse_textual_data_from_bytes(bytes: &[u8]) -> PngTextResult<TextualRecordList> {
  parse_textual_data(bytes)
}

/// As [`parse_textual_data`], with the limits and strictness given.
pub fn parse_textual_data_with<R: Read>(
  mut reader: R, options: &ParseOptions,
) -> PngTextResult<TextualRecordList> {
  let mut signature = [0_u8; 8];
  reader.read_exact(&mut signature)?;
  if signature != PNG_SIGNATURE {
    return Err(PngTextError::NotPngData);
  }

  let mut records = TextualRecordList::new();
  loop {
    let mut header = ChunkHeader::zeroed();
    reader.read_exact(bytemuck::bytes_of_mut(&mut header))?;
    let chunk_ty = AsciiArray(header.chunk_ty);
    let length = header.length.to_u32();
    trace!("{chunk_ty} chunk, {length} bytes");
    if let Some(max) = options.max_chunk_len {
      if length > max {
        return Err(PngTextError::ChunkTooLarge { chunk: chunk_ty, length, max });
      }
    }

    let mut crc = Crc32::new();
    crc.update(chunk_ty.as_bytes());
    let mut payload = BufReader::new(ChunkPayload::new(&mut reader, length, crc));
    let kind = ChunkKind::from(chunk_ty);
    let decoded = match kind {
      ChunkKind::tEXt => Some(text::decode_text(&mut payload)),
      ChunkKind::zTXt => Some(ztxt::decode_ztxt(&mut payload, options)),
      ChunkKind::iTXt => Some(itxt::decode_itxt(&mut payload, options)),
      ChunkKind::IEND | ChunkKind::Other => None,
    };
    // decode errors wait for the CRC check, a corrupt chunk is a CRC error.
    let record = match decoded.transpose() {
      Err(e @ PngTextError::Io(_)) => return Err(e),
      other => other,
    };
    // a decoder can stop early (eg: at the end of the zlib stream), but the
    // CRC covers all of the data.
    io::copy(&mut payload, &mut io::sink())?;
    let actual = payload.into_inner().crc();

    let mut declared = U32BE::default();
    reader.read_exact(bytemuck::bytes_of_mut(&mut declared))?;
    let declared = declared.to_u32();
    if declared != actual {
      return Err(PngTextError::CrcMismatch { chunk: chunk_ty, declared, actual });
    }

    if let Some(record) = record? {
      debug!("decoded {chunk_ty} record with keyword {:?}", record.keyword());
      records.push(record);
    }
    if kind == ChunkKind::IEND {
      debug!("reached IEND with {} textual records", records.len());
      return Ok(records);
    }
  }
}
