// wordscore: print ranked identifier candidates for a word or phrase.
//
// Usage:
//   wordscore [-word WORD] [-length N] [-count N] [-debug LEVEL] [-format FORMAT]
//
// Options:
//   -word WORD       Word to generate combination strings from (default: abc)
//   -length N        Length of combination strings (default: 4)
//   -count N         Number of candidates to generate (default: 10)
//   -debug LEVEL     debug | info | warn | error (default: info)
//   -format FORMAT   quoted | json (default: quoted)
//
// Double-dash forms (--word, --length=6, ...) are accepted too.

use std::process::ExitCode;

use clap::Parser;
use wordscore_cli::{Args, init_logging, normalize_flags, run};

fn main() -> ExitCode {
    let args = Args::parse_from(normalize_flags(std::env::args_os()));
    init_logging(args.debug);

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
