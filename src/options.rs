/// Knobs for [`parse_textual_data_with`](crate::png::parse_textual_data_with).
///
/// The default trusts the stream the same way a plain
/// [`parse_textual_data`](crate::png::parse_textual_data) call does: declared
/// chunk lengths aren't capped, inflated text isn't capped, and the `iTXt`
/// compression flag is read leniently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParseOptions {
  /// The largest declared chunk length accepted. Longer chunks fail with
  /// [`ChunkTooLarge`](crate::PngTextError::ChunkTooLarge) before any of
  /// their data is read. The default is no limit.
  pub max_chunk_len: Option<u32>,

  /// The largest inflated text accepted from a compressed text chunk, in
  /// bytes. The default is no limit.
  pub max_text_len: Option<usize>,

  /// When set, an `iTXt` compression flag other than 0 or 1 is a decode
  /// error. Otherwise every value other than 1 means "uncompressed".
  pub strict_itxt_flag: bool,
}

impl ParseOptions {
  /// The PNG format's own limit on a chunk's length, `2^31 - 1`.
  pub const PNG_MAX_CHUNK_LEN: u32 = (1 << 31) - 1;

  /// Limits suitable for untrusted input.
  ///
  /// * Chunk length capped at [`PNG_MAX_CHUNK_LEN`](Self::PNG_MAX_CHUNK_LEN).
  /// * Inflated text capped at 16 MiB.
  /// * Strict `iTXt` compression flag.
  #[inline]
  #[must_use]
  pub const fn hardened() -> Self {
    Self {
      max_chunk_len: Some(Self::PNG_MAX_CHUNK_LEN),
      max_text_len: Some(16 * 1024 * 1024),
      strict_itxt_flag: true,
    }
  }

  #[inline]
  #[must_use]
  pub const fn with_max_chunk_len(mut self, max: Option<u32>) -> Self {
    self.max_chunk_len = max;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_max_text_len(mut self, max: Option<usize>) -> Self {
    self.max_text_len = max;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_strict_itxt_flag(mut self, strict: bool) -> Self {
    self.strict_itxt_flag = strict;
    self
  }
}
