//! Selection of the input format.

use error::*;
use jacoco::{self, JacocoParser};
use reader;
use report::Report;
use summary::Summary;

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// A converter from some coverage report format into a [`Report`].
///
/// [`Report`]: ../report/struct.Report.html
pub trait Parser {
    /// Reads the whole input and converts it into a report.
    fn parse<R: Read>(&self, input: R) -> Result<Report>;
}

/// Parser of LCOV text. See the [`reader`](../reader/index.html) module.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct LcovParser;

impl Parser for LcovParser {
    fn parse<R: Read>(&self, input: R) -> Result<Report> {
        reader::parse(input)
    }
}

/// The supported input formats.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Format {
    /// LCOV tracefile.
    Lcov,
    /// JaCoCo XML report.
    Jacoco,
}

impl Format {
    /// Guesses the format from the extension of a path: `*.lcov` and `*.info` are LCOV, `*.xml` is JaCoCo.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        let extension = path.as_ref().extension()?.to_str()?;
        match &*extension.to_ascii_lowercase() {
            "lcov" | "info" => Some(Format::Lcov),
            "xml" => Some(Format::Jacoco),
            _ => None,
        }
    }

    /// Parses the input with the default parser of this format.
    pub fn parse<R: Read>(self, input: R) -> Result<Report> {
        match self {
            Format::Lcov => LcovParser.parse(input),
            Format::Jacoco => JacocoParser::default().parse(input),
        }
    }

    /// Opens and parses a file with the default parser of this format.
    pub fn open<P: AsRef<Path>>(self, path: P) -> Result<Report> {
        let path = path.as_ref();
        debug!("parsing {} as {}", path.display(), self);
        let file = File::open(path)?;
        self.parse(BufReader::new(file))
    }

    /// Summarizes the input.
    ///
    /// LCOV input is fully parsed and its errors are returned. JaCoCo input is summarized from its counters and never
    /// fails, see [`jacoco::summarize()`](../jacoco/fn.summarize.html).
    pub fn summarize<R: Read>(self, input: R) -> Result<Summary> {
        match self {
            Format::Lcov => Summary::from_lcov(input),
            Format::Jacoco => Ok(jacoco::summarize(input)),
        }
    }
}

impl FromStr for Format {
    type Err = Error;
    fn from_str(s: &str) -> Result<Format> {
        match &*s.to_ascii_lowercase() {
            "lcov" => Ok(Format::Lcov),
            "jacoco" | "jacoco-xml" => Ok(Format::Jacoco),
            _ => Err(ErrorKind::UnknownFormat(s.to_owned()).into()),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Format::Lcov => "lcov",
            Format::Jacoco => "jacoco",
        })
    }
}

#[test]
fn test_from_path() {
    assert_eq!(Format::from_path("target/coverage/app.lcov"), Some(Format::Lcov));
    assert_eq!(Format::from_path("coverage.info"), Some(Format::Lcov));
    assert_eq!(Format::from_path("build/reports/jacoco/test/jacocoTestReport.XML"), Some(Format::Jacoco));
    assert_eq!(Format::from_path("report.json"), None);
    assert_eq!(Format::from_path("lcov"), None);
}

#[test]
fn test_from_str() {
    assert_eq!("lcov".parse::<Format>().unwrap(), Format::Lcov);
    assert_eq!("JaCoCo".parse::<Format>().unwrap(), Format::Jacoco);
    assert_eq!("jacoco-xml".parse::<Format>().unwrap(), Format::Jacoco);
    match *"cobertura".parse::<Format>().unwrap_err().kind() {
        ErrorKind::UnknownFormat(ref name) => assert_eq!(name, "cobertura"),
        ref kind => panic!("unexpected error {:?}", kind),
    }
    assert_eq!(Format::Jacoco.to_string().parse::<Format>().unwrap(), Format::Jacoco);
}

#[test]
fn test_parse_dispatch() {
    let lcov = Format::Lcov.parse(&b"SF:a.c\nLF:1\nLH:1\nend_of_record\n"[..]).unwrap();
    assert_eq!(lcov.source_files[0].name, "a.c");

    let xml = r#"<report><package name="p"><sourcefile name="A.java"><counter type="LINE" missed="1" covered="1"/></sourcefile></package></report>"#;
    let jacoco = Format::Jacoco.parse(xml.as_bytes()).unwrap();
    assert_eq!(jacoco.source_files[0].name, "src/main/java/p/A.java");

    let summary = Format::Jacoco.summarize(xml.as_bytes()).unwrap();
    assert_eq!(summary.files[0].filename, "p/A.java");
    assert_eq!(summary.total.lines_found, 2);

    assert!(Format::Jacoco.summarize(&b"<report>"[..]).unwrap().files.is_empty());
    assert!(Format::Lcov.summarize(&b"DA:1\n"[..]).is_err());
}

#[test]
fn test_open() {
    use std::fs::write;

    let dir = ::tempfile::tempdir().unwrap();
    let path = dir.path().join("coverage.info");
    write(&path, "SF:x.c\nDA:1,4\nLF:1\nLH:1\nend_of_record\n").unwrap();
    let format = Format::from_path(&path).unwrap();
    let report = format.open(&path).unwrap();
    assert_eq!(report.source_files[0].line_information[0].executions, 4);

    let error = Format::Lcov.open(dir.path().join("missing.info")).unwrap_err();
    assert!(error.kind().is_io());
}
