#[macro_use]
extern crate error_chain;
extern crate covbridge;
extern crate env_logger;
extern crate serde_json;

use covbridge::{Format, Result};

use std::env;
use std::io::stdout;

quick_main!(run);

fn run() -> Result<()> {
    env_logger::init();

    let filename = env::args_os().nth(1).ok_or("missing input file")?;
    let format = Format::from_path(&filename).unwrap_or(Format::Lcov);
    let report = format.open(&filename)?;
    serde_json::to_writer_pretty(stdout(), &report)?;
    Ok(())
}
