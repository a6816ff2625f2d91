use super::*;

const CHUNK: AsciiArray<4> = AsciiArray(*b"iTXt");

/// International textual data
///
/// PNG: [iTXt](https://www.w3.org/TR/png/#11iTXt)
///
/// * keyword (Latin-1), null byte
/// * compression flag: 1 means compressed
/// * compression method: must be 0 (zlib) when compressed, ignored otherwise
/// * language tag (ascii), null byte
/// * translated keyword (UTF-8), null byte
/// * text (UTF-8), possibly a zlib stream, running to the end of the chunk
pub(super) fn decode_itxt<B: BufRead>(
  payload: &mut B, options: &ParseOptions,
) -> PngTextResult<TextualRecord> {
  let keyword = read_keyword(payload, CHUNK)?;
  let flag = read_u8(payload, CHUNK, "compression flag")?;
  if options.strict_itxt_flag && flag > 1 {
    return Err(PngTextError::decode(CHUNK, format!("invalid compression flag: {flag}")));
  }
  let is_compressed = flag == 1;
  // the method byte is always present, even when it doesn't matter.
  let method = read_u8(payload, CHUNK, "compression method")?;
  if is_compressed && method != 0 {
    return Err(PngTextError::UnsupportedCompressionType(method));
  }
  let language_tag = latin1_to_string(&read_null_terminated(payload, CHUNK, "language tag")?);
  let translated_keyword = utf8_to_string(
    read_null_terminated(payload, CHUNK, "translated keyword")?,
    CHUNK,
    "translated keyword",
  )?;

  let mut data = Vec::new();
  payload.read_to_end(&mut data)?;
  if is_compressed {
    data = inflate_text(&data, CHUNK, options)?;
  }
  let text = utf8_to_string(data, CHUNK, "text")?;

  Ok(TextualRecord::international(keyword, text, language_tag, translated_keyword))
}
