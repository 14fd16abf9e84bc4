extern crate covbridge;
extern crate diff;
extern crate serde_json;
extern crate termcolor;

use covbridge::*;
use serde_json::{Value, from_reader, to_string_pretty, to_value};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use std::ffi::OsStr;
use std::fs::{File, read_dir, read_to_string};
use std::io::{self, Write};
use std::path::Path;
use std::process::exit;

fn main() {
    run().expect("IO");
}

fn run() -> io::Result<()> {
    let mut failed_tests = 0;

    let stdout = StandardStream::stdout(ColorChoice::Auto);
    let mut lock = stdout.lock();

    for entry in read_dir("test-data")? {
        let entry = entry?;
        let path = entry.path();
        let format = match path.extension().and_then(OsStr::to_str) {
            Some("lcov") => Format::Lcov,
            Some("jacoco") => Format::Jacoco,
            _ => continue,
        };
        if entry.file_type()?.is_dir() {
            write!(lock, "test {} ... ", path.display())?;
            lock.flush()?;
            if !print_test_result(&mut lock, test(&path, format))? {
                failed_tests += 1;
            }
        }
    }

    if failed_tests != 0 {
        writeln!(lock, "\ntest result: {} failed.\n", failed_tests)?;
        exit(101);
    } else {
        writeln!(lock, "\ntest result: ok.\n")?;
    }

    Ok(())
}

/// Parses `input.*` of the fixture directory, and returns the (actual, expected) pairs of the JSON model and of the
/// LCOV output.
fn test(path: &Path, format: Format) -> Result<Vec<(String, String)>> {
    let input_path = path.join(match format {
        Format::Lcov => "input.lcov",
        Format::Jacoco => "input.xml",
    });
    let report = format.open(&input_path)?;

    let actual_report = to_value(&report)?;
    let expected_report: Value = from_reader(File::open(path.join("expected.json"))?)?;

    let mut actual_lcov = Vec::new();
    report.write_lcov(&mut actual_lcov)?;
    let expected_lcov = read_to_string(path.join("expected.lcov"))?;

    // The written LCOV must describe the same report.
    let reparsed = Format::Lcov.parse(&actual_lcov[..])?;
    let actual_reparsed = to_value(&reparsed)?;

    Ok(vec![
        (to_string_pretty(&actual_report)?, to_string_pretty(&expected_report)?),
        (String::from_utf8_lossy(&actual_lcov).into_owned(), expected_lcov),
        (to_string_pretty(&actual_reparsed)?, to_string_pretty(&actual_report)?),
    ])
}

fn print_test_result<W: Write + WriteColor>(mut lock: W, result: Result<Vec<(String, String)>>) -> io::Result<bool> {
    Ok(match result {
        Ok(pairs) => {
            let success = pairs.iter().all(|&(ref actual, ref expected)| actual == expected);
            if success {
                lock.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                writeln!(lock, "ok")?;
            } else {
                lock.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                writeln!(lock, "FAILED")?;
                for &(ref actual, ref expected) in pairs.iter().filter(|&&(ref a, ref e)| a != e) {
                    for d in diff::lines(actual, expected) {
                        let (color, prefix, line) = match d {
                            diff::Result::Left(line) => (Color::Green, '+', line),
                            diff::Result::Both(line, _) => (Color::White, ' ', line),
                            diff::Result::Right(line) => (Color::Red, '-', line),
                        };
                        lock.set_color(ColorSpec::new().set_fg(Some(color)))?;
                        writeln!(lock, "{} {}", prefix, line)?;
                    }
                    writeln!(lock)?;
                }
            }
            lock.reset()?;
            success
        },
        Err(e) => {
            lock.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
            writeln!(lock, "ERRORED")?;
            lock.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_intense(true).set_bold(true))?;
            write!(lock, "error: ")?;
            lock.reset()?;
            writeln!(lock, "{}\n", e)?;
            false
        },
    })
}
