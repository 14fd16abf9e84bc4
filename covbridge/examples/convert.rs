#[macro_use]
extern crate error_chain;
extern crate covbridge;
extern crate env_logger;
extern crate termcolor;

use covbridge::{ErrorKind, Format, Result, Summary};
use termcolor::{ColorChoice, StandardStream};

use std::env;
use std::path::PathBuf;

quick_main!(run);

/// Usage: `convert <INPUT> [OUTPUT] [FORMAT]`
///
/// Prints the coverage table of INPUT, and writes it as LCOV into OUTPUT if given. The format is guessed from the
/// extension of INPUT unless FORMAT is given.
fn run() -> Result<()> {
    env_logger::init();

    let mut args = env::args_os().skip(1);
    let input = PathBuf::from(args.next().ok_or("missing input file")?);
    let output = args.next().map(PathBuf::from);
    let format = match args.next() {
        Some(name) => name.to_string_lossy().parse::<Format>()?,
        None => Format::from_path(&input).ok_or_else(|| ErrorKind::UnknownFormat(input.display().to_string()))?,
    };

    let report = format.open(&input)?;
    let stdout = StandardStream::stdout(ColorChoice::Auto);
    Summary::from(&report).print_table(stdout.lock())?;

    if let Some(output) = output {
        match report.write_to_path(&output)? {
            Some(path) => println!("wrote {}", path.display()),
            None => println!("no source files found, nothing written"),
        }
    }
    Ok(())
}
