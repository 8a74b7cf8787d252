#![allow(non_snake_case)]
use RustedLU::Utils::logger::init_terminal_logger;
use RustedLU::io::sparse_text::solve_file;
use std::env;

fn main() {
    let loglevel = env::var("RUSTEDLU_LOGLEVEL").unwrap_or_else(|_| "info".to_string());
    init_terminal_logger(&loglevel);

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        println!("no files to process");
    }
    for arg in &args {
        // every input file is handled on its own: one singular or malformed
        // system must not abort the remaining ones
        match solve_file(arg) {
            Ok(oname) => println!("written solution of {} to {}", arg, oname),
            Err(e) => eprintln!("error: {}", e),
        }
    }
}
