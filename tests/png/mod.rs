use std::fs::File;

use pngtext::{png::png_crc, PngTextError, TextualRecord, PNG_SIGNATURE};
use walkdir::WalkDir;

const FIXTURE: &str = "tests/fixtures/text.png";

#[test]
fn test_parse_fixture() {
  let mut file = File::open(FIXTURE).unwrap();
  let list = pngtext::parse_textual_data(&mut file).unwrap();

  let keywords: Vec<&str> = list.iter().map(TextualRecord::keyword).collect();
  assert_eq!(keywords, ["Text", "ZTxt", "ITxt", "ITxtCompressed"]);

  assert_eq!(list.find("Text").unwrap().text(), "text data");
  assert_eq!(
    list.find("ZTxt").unwrap().text(),
    "compressed text data                              end"
  );

  let itxt = list.find("ITxt").unwrap();
  assert_eq!(itxt.text(), "\u{1F984}");
  assert!(itxt.is_international());

  let compressed = list.find("ITxtCompressed").unwrap();
  assert_eq!(compressed.text(), "\u{1F984}                                      end");
  assert_eq!(compressed.language_tag(), "en-US");
  assert_eq!(compressed.translated_keyword(), "Unicorn");

  assert!(list.find("Description").is_none());
}

#[test]
fn test_parse_not_png_file() {
  let file = File::open("tests/fixtures/not_a_png.txt").unwrap();
  assert!(matches!(pngtext::parse_textual_data(file), Err(PngTextError::NotPngData)));
}

#[test]
fn test_fixture_any_flipped_byte_fails() {
  let png = std::fs::read(FIXTURE).unwrap();
  // flipping a bit anywhere after the signature breaks a length, tag, data,
  // or CRC, and no single flip can leave every chunk consistent.
  for i in PNG_SIGNATURE.len()..png.len() {
    let mut corrupt = png.clone();
    corrupt[i] ^= 0x01;
    assert!(pngtext::parse_textual_data_from_bytes(&corrupt).is_err(), "byte {i}");
  }
}

#[test]
fn test_fixture_crc_values() {
  let png = std::fs::read(FIXTURE).unwrap();
  let iend = &png[png.len() - 12..];
  assert_eq!(&iend[4..8], b"IEND");
  assert_eq!(u32::from_be_bytes(iend[8..12].try_into().unwrap()), png_crc(b"IEND"));
}

#[test]
fn test_parse_textual_data_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    if !entry.file_type().is_file() {
      continue;
    }
    println!("{}", entry.path().display());
    let file = match File::open(entry.path()) {
      Ok(file) => file,
      Err(e) => {
        println!("Error opening file: {e:?}");
        continue;
      }
    };
    let _ = pngtext::parse_textual_data(file);
  }
  // even totally random data should never panic the parser!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    let _ = pngtext::parse_textual_data_from_bytes(&v);
    let mut with_signature = PNG_SIGNATURE.to_vec();
    with_signature.extend_from_slice(&v);
    let _ = pngtext::parse_textual_data_from_bytes(&with_signature);
  }
}
