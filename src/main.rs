use std::{env, path::PathBuf, process::exit, time::Instant};

use declcount::{
    counter::counter::FrequencyTable,
    display_error,
    scanner::{
        pattern::{keyword_for_path, ScanPattern},
        scanner::scan,
    },
    source::source::read_source,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: declcount <file> [keyword]");
        exit(2);
    }

    let file_path = PathBuf::from(&args[1]);

    let keyword = if args.len() == 3 {
        args[2].clone()
    } else {
        String::from(keyword_for_path(&file_path))
    };

    let pattern = ScanPattern::for_keyword(&keyword);

    let start = Instant::now();

    let source = match read_source(&file_path) {
        Ok(source) => source,
        Err(error) => {
            display_error(error);
            exit(1);
        }
    };

    println!("Read in {:?}", start.elapsed());

    let scan_start = Instant::now();
    let matches = scan(
        &source,
        &pattern,
        Some(file_path.to_string_lossy().into_owned()),
    );

    let mut table = FrequencyTable::new();
    for matched in matches {
        table.record(matched.token);
    }

    println!("Scanned in {:?}", scan_start.elapsed());

    print!("{}", table);
    println!(
        "{} matches of `{}` across {} names",
        table.total(),
        pattern.keyword(),
        table.len()
    );
    println!("Total time: {:?}", start.elapsed());
}
