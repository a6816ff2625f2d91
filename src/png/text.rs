use super::*;

const CHUNK: AsciiArray<4> = AsciiArray(*b"tEXt");

/// Textual data
///
/// PNG: [tEXt](https://www.w3.org/TR/png/#11tEXt)
///
/// A Latin-1 keyword, a null byte, then Latin-1 text that runs to the end of
/// the chunk. There's no terminator on the text, so any null bytes in it are
/// kept as-is.
pub(super) fn decode_text<B: BufRead>(payload: &mut B) -> PngTextResult<TextualRecord> {
  let keyword = read_keyword(payload, CHUNK)?;
  let mut text = Vec::new();
  payload.read_to_end(&mut text)?;
  Ok(TextualRecord::new(keyword, latin1_to_string(&text)))
}
