use core::cmp::Ordering;
use core::ops::{Deref, DerefMut};

/// The extra fields that only an `iTXt` chunk has.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
struct International {
  language_tag: String,
  translated_keyword: String,
}

/// One decoded text chunk.
///
/// PNG: [Textual information](https://www.w3.org/TR/2003/REC-PNG-20031110/#11textinfo)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextualRecord {
  keyword: String,
  text: String,
  international: Option<International>,
}
impl TextualRecord {
  /// A record as a `tEXt` or `zTXt` chunk would give.
  #[inline]
  #[must_use]
  pub fn new(keyword: impl Into<String>, text: impl Into<String>) -> Self {
    Self { keyword: keyword.into(), text: text.into(), international: None }
  }

  /// A record as an `iTXt` chunk would give.
  #[inline]
  #[must_use]
  pub fn international(
    keyword: impl Into<String>, text: impl Into<String>, language_tag: impl Into<String>,
    translated_keyword: impl Into<String>,
  ) -> Self {
    Self {
      keyword: keyword.into(),
      text: text.into(),
      international: Some(International {
        language_tag: language_tag.into(),
        translated_keyword: translated_keyword.into(),
      }),
    }
  }

  /// What the text is about, such as "Title" or "Description".
  #[inline]
  #[must_use]
  pub fn keyword(&self) -> &str {
    &self.keyword
  }

  #[inline]
  #[must_use]
  pub fn text(&self) -> &str {
    &self.text
  }

  /// The human language of the translated keyword and the text, such as
  /// `en-US`.
  ///
  /// Empty for records that didn't come from an `iTXt` chunk.
  #[inline]
  #[must_use]
  pub fn language_tag(&self) -> &str {
    self.international.as_ref().map_or("", |i| &i.language_tag)
  }

  /// The keyword translated into the language of the language tag.
  ///
  /// Empty for records that didn't come from an `iTXt` chunk.
  #[inline]
  #[must_use]
  pub fn translated_keyword(&self) -> &str {
    self.international.as_ref().map_or("", |i| &i.translated_keyword)
  }

  /// If this record came from an `iTXt` chunk.
  ///
  /// Note that an `iTXt` chunk is allowed to have an empty language tag and
  /// translated keyword, so check this rather than checking for empty strings.
  #[inline]
  #[must_use]
  pub const fn is_international(&self) -> bool {
    self.international.is_some()
  }

  /// Orders records by keyword (code point order), ignoring all other fields.
  #[inline]
  #[must_use]
  pub fn cmp_keyword(&self, other: &Self) -> Ordering {
    self.keyword.cmp(&other.keyword)
  }
}

/// If `a` sorts strictly before `b` by keyword.
#[inline]
#[must_use]
pub fn keyword_less(a: &TextualRecord, b: &TextualRecord) -> bool {
  a.cmp_keyword(b) == Ordering::Less
}

/// The textual records of a PNG, in the order their chunks appeared.
///
/// Derefs to a slice, so `len`, `iter`, `swap`, and the rest of the slice API
/// all work. Nothing here reorders the list unless you ask it to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TextualRecordList(Vec<TextualRecord>);
impl TextualRecordList {
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self(Vec::new())
  }

  #[inline]
  pub(crate) fn push(&mut self, record: TextualRecord) {
    self.0.push(record)
  }

  /// The first record with exactly this keyword, if any.
  #[inline]
  #[must_use]
  pub fn find(&self, keyword: &str) -> Option<&TextualRecord> {
    self.0.iter().find(|r| r.keyword == keyword)
  }

  /// Every record with exactly this keyword, in list order.
  #[inline]
  pub fn find_all<'s>(&'s self, keyword: &'s str) -> impl Iterator<Item = &'s TextualRecord> + 's {
    self.0.iter().filter(move |r| r.keyword == keyword)
  }

  /// Stable sort by keyword. Records with the same keyword keep their order.
  #[inline]
  pub fn sort_by_keyword(&mut self) {
    self.0.sort_by(TextualRecord::cmp_keyword)
  }

  #[inline]
  #[must_use]
  pub fn into_vec(self) -> Vec<TextualRecord> {
    self.0
  }
}
impl Deref for TextualRecordList {
  type Target = [TextualRecord];
  #[inline]
  #[must_use]
  fn deref(&self) -> &Self::Target {
    &self.0
  }
}
impl DerefMut for TextualRecordList {
  #[inline]
  #[must_use]
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}
impl From<Vec<TextualRecord>> for TextualRecordList {
  #[inline]
  #[must_use]
  fn from(records: Vec<TextualRecord>) -> Self {
    Self(records)
  }
}
impl FromIterator<TextualRecord> for TextualRecordList {
  #[inline]
  fn from_iter<I: IntoIterator<Item = TextualRecord>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}
impl IntoIterator for TextualRecordList {
  type Item = TextualRecord;
  type IntoIter = std::vec::IntoIter<TextualRecord>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}
impl<'a> IntoIterator for &'a TextualRecordList {
  type Item = &'a TextualRecord;
  type IntoIter = core::slice::Iter<'a, TextualRecord>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
