use svgtree::{render_scene_json, SerializeOptions};
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("svgtree - Serialize a JSON scene description to canonical markup");
        println!();
        println!("Usage: svgtree [OPTIONS] [FILE]");
        println!();
        println!("Reads a JSON scene from FILE or stdin and prints its markup.");
        println!();
        println!("Options:");
        println!("  -h, --help        Show this help message");
        println!("      --no-newline  Do not print a newline after the root element");
        println!();
        println!("Example:");
        println!("  echo '{{\"type\": \"rect\", \"id\": \"r1\", \"width\": 10, \"height\": 20}}' | svgtree");
        println!();
        println!("Set RUST_LOG=debug to see skipped nodes.");
        return;
    }

    let no_newline = args.iter().any(|a| a == "--no-newline");

    // Get input from file argument or stdin
    let input = match args.iter().skip(1).find(|a| !a.starts_with('-')) {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error: failed to read {}: {}", path, e);
            std::process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("Error: failed to read from stdin: {}", e);
                std::process::exit(1);
            }
            buf
        }
    };

    if input.trim().is_empty() {
        eprintln!("Error: No input provided");
        std::process::exit(1);
    }

    let options = SerializeOptions {
        trailing_newline: !no_newline,
        ..Default::default()
    };

    match render_scene_json(&input, Some(options)) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
