use super::*;

const CHUNK: AsciiArray<4> = AsciiArray(*b"zTXt");

/// Compressed textual data
///
/// PNG: [zTXt](https://www.w3.org/TR/png/#11zTXt)
///
/// * keyword (should be 1-79 bytes)
/// * null byte
/// * compression method (only 0, zlib, is defined)
/// * zlib compressed data stream of Latin-1 text
pub(super) fn decode_ztxt<B: BufRead>(
  payload: &mut B, options: &ParseOptions,
) -> PngTextResult<TextualRecord> {
  let keyword = read_keyword(payload, CHUNK)?;
  let method = read_u8(payload, CHUNK, "compression method")?;
  if method != 0 {
    return Err(PngTextError::UnsupportedCompressionType(method));
  }
  let mut compressed = Vec::new();
  payload.read_to_end(&mut compressed)?;
  let text = inflate_text(&compressed, CHUNK, options)?;
  Ok(TextualRecord::new(keyword, latin1_to_string(&text)))
}
