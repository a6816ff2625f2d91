use pngtext::parse_textual_data;

fn main() {
  let args: Vec<String> = std::env::args().collect();
  println!("ARGS: {args:?}");
  for file_arg in args[1..].iter() {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    let file = match std::fs::File::open(path) {
      Ok(file) => file,
      Err(e) => {
        println!("{e:?}");
        continue;
      }
    };
    match parse_textual_data(std::io::BufReader::new(file)) {
      Ok(list) => {
        println!("got {} textual records.", list.len());
        for (n, record) in list.iter().enumerate() {
          if record.is_international() {
            println!(
              "{n}: {} ({}, {:?}): {:?}",
              record.keyword(),
              record.language_tag(),
              record.translated_keyword(),
              record.text()
            );
          } else {
            println!("{n}: {}: {:?}", record.keyword(), record.text());
          }
        }
      }
      Err(e) => println!("{e}"),
    }
  }
}
