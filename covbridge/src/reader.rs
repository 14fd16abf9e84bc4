//! Reader of the LCOV text format.
//!
//! An LCOV report is a sequence of `PREFIX:VALUE` records. The records of one source file start with `SF` and end
//! with the terminator line `end_of_record`. The records understood by this reader are:
//!
//! | Record | Meaning |
//! |--------|---------|
//! | `SF:<path>` | Name of the source file |
//! | `FN:<line>,<name>` | A function starting at `line` |
//! | `FNDA:<count>,<name>` | Number of times the function is called |
//! | `FNF:<n>`, `FNH:<n>` | Number of functions found and hit |
//! | `DA:<line>,<count>[,<checksum>]` | Execution count of a line |
//! | `LF:<n>`, `LH:<n>` | Number of lines found and hit |
//! | `BRDA:<line>,<block>,<branch>,<taken>` | Execution count of a branch, `-` when not taken |
//! | `BRF:<n>`, `BRH:<n>` | Number of branches found and hit |
//!
//! Any other prefix (e.g. `TN`) is skipped.

use error::*;
use report::{Branch, Function, FunctionExecution, Line, Report, SourceFile};
use utils::IntoStringLossy;

use std::io::{BufRead, BufReader, Read};
use std::num::ParseIntError;
use std::str::FromStr;

/// The line closing the records of a source file.
pub const END_OF_RECORD: &str = "end_of_record";

/// The `taken` value of a `BRDA` record for a branch which has never been executed.
pub const NOT_TAKEN: &str = "-";

/// Parses an LCOV report.
///
/// The parse is all-or-nothing: the first malformed line aborts it and no partial report is returned. An empty input
/// produces an empty report.
///
/// # Errors
///
/// * Returns [`MalformedRecord`] if a line is not `PREFIX:VALUE`, or has a wrong number of fields.
/// * Returns [`InvalidNumber`] if a numeric field is not an integer. Counts may be negative, line, block and branch
///   numbers may not.
/// * Returns [`Io`] on I/O failure.
///
/// # Examples
///
/// ```rust
/// let lcov = "SF:src/a.c\nDA:3,1\nLF:1\nLH:1\nend_of_record\n";
/// let report = covbridge::reader::parse(lcov.as_bytes()).unwrap();
/// assert_eq!(report.source_files[0].name, "src/a.c");
/// assert_eq!(report.source_files[0].overview.lines_hit, 1);
/// ```
///
/// [`MalformedRecord`]: ../error/enum.ErrorKind.html#variant.MalformedRecord
/// [`InvalidNumber`]: ../error/enum.ErrorKind.html#variant.InvalidNumber
/// [`Io`]: ../error/enum.ErrorKind.html#variant.Io
pub fn parse<R: Read>(input: R) -> Result<Report> {
    Reader::new(BufReader::new(input)).parse()
}

/// The reader of an LCOV report.
#[derive(Debug)]
pub struct Reader<R> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> Reader<R> {
    /// Creates a new LCOV reader.
    pub fn new(reader: R) -> Reader<R> {
        Reader {
            reader,
            line_number: 0,
        }
    }

    /// Reads the next line without the line terminator. Returns `None` at end-of-file.
    ///
    /// The line is decoded as UTF-8 lossily, since source paths are not guaranteed to be valid UTF-8.
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        Ok(Some(buf.into_string_lossy()))
    }

    /// Parses the content of the reader, to produce a [`Report`].
    ///
    /// # Errors
    ///
    /// See [`parse()`].
    ///
    /// [`Report`]: ../report/struct.Report.html
    /// [`parse()`]: ./fn.parse.html
    pub fn parse(&mut self) -> Result<Report> {
        let mut report = Report::new();
        let mut current = SourceFile::default();
        let mut has_pending_records = false;

        while let Some(line) = self.next_line()? {
            if line == END_OF_RECORD {
                trace!("end-of-record @ {}: {}", self.line_number, current.name);
                report.source_files.push(current);
                current = SourceFile::default();
                has_pending_records = false;
                continue;
            }
            if line.is_empty() {
                continue;
            }

            let colon = match line.find(':') {
                Some(colon) => colon,
                None => bail!(self.malformed(&line)),
            };
            let (prefix, value) = (&line[..colon], &line[colon + 1..]);
            trace!("record @ {}: prefix = {}", self.line_number, prefix);
            self.parse_record(&mut current, prefix, value, &line)?;
            has_pending_records = true;
        }

        if has_pending_records {
            warn!("lcov report ends without `{}`, dropping the last record of `{}`", END_OF_RECORD, current.name);
        }
        debug!("parsed lcov report with {} source files", report.source_files.len());
        Ok(report)
    }

    /// Applies a single `PREFIX:VALUE` record to the current source file.
    fn parse_record(&self, current: &mut SourceFile, prefix: &str, value: &str, line: &str) -> Result<()> {
        match prefix {
            "SF" => current.name = value.to_owned(),
            "FNF" => current.overview.functions_found = self.number(value, line)?,
            "FNH" => current.overview.functions_hit = self.number(value, line)?,
            "LF" => current.overview.lines_found = self.number(value, line)?,
            "LH" => current.overview.lines_hit = self.number(value, line)?,
            "BRF" => current.overview.branches_found = self.number(value, line)?,
            "BRH" => current.overview.branches_hit = self.number(value, line)?,
            "FN" => {
                let (line_number, name) = self.split_name(value, line)?;
                current.function_information.push(Function {
                    name: name.to_owned(),
                    line: self.number(line_number, line)?,
                });
            },
            "FNDA" => {
                let (executions, name) = self.split_name(value, line)?;
                current.function_executions.push(FunctionExecution {
                    name: name.to_owned(),
                    executions: self.number(executions, line)?,
                });
            },
            "DA" => {
                // The optional third field is a checksum of the source line, which is ignored.
                let fields = value.split(',').collect::<Vec<_>>();
                if fields.len() != 2 && fields.len() != 3 {
                    bail!(self.malformed(line));
                }
                current.line_information.push(Line {
                    number: self.number(fields[0], line)?,
                    executions: self.number(fields[1], line)?,
                });
            },
            "BRDA" => {
                let fields = value.split(',').collect::<Vec<_>>();
                if fields.len() != 4 {
                    bail!(self.malformed(line));
                }
                let executions = if fields[3] == NOT_TAKEN {
                    0
                } else {
                    self.number(fields[3], line)?
                };
                current.branch_information.push(Branch {
                    line: self.number(fields[0], line)?,
                    block: self.number(fields[1], line)?,
                    number: self.number(fields[2], line)?,
                    executions,
                });
            },
            _ => trace!("skipping unknown record `{}`", prefix),
        }
        Ok(())
    }

    /// Splits the value of `FN` and `FNDA` into the leading number and the function name. The name may itself contain
    /// commas.
    fn split_name<'a>(&self, value: &'a str, line: &str) -> Result<(&'a str, &'a str)> {
        match value.find(',') {
            Some(comma) => Ok((&value[..comma], &value[comma + 1..])),
            None => Err(self.malformed(line).into()),
        }
    }

    /// Parses a numeric field of the current line.
    fn number<T: FromStr<Err = ParseIntError>>(&self, field: &str, line: &str) -> Result<T> {
        field.parse().chain_err(|| ErrorKind::InvalidNumber(self.line_number, line.to_owned()))
    }

    fn malformed(&self, line: &str) -> ErrorKind {
        ErrorKind::MalformedRecord(self.line_number, line.to_owned())
    }
}

#[cfg(test)]
const EXPLORE_ME: &str = "\
SF:com/example/ExploreMe.java
FN:2,exploreMe
FNDA:1,exploreMe
FNF:1
FNH:1
DA:3,1
DA:4,0
DA:5,1
DA:6,1
LF:4
LH:3
BRDA:5,0,0,1
BRDA:5,0,1,-
BRF:2
BRH:1
end_of_record
SF:com/example/ExploreMe2.java
end_of_record";

#[test]
fn test_parse() {
    let report = parse(EXPLORE_ME.as_bytes()).unwrap();
    assert_eq!(report.source_files.len(), 2);
    assert_eq!(report.source_files[1].name, "com/example/ExploreMe2.java");
    assert_eq!(report.source_files[1], SourceFile::new("com/example/ExploreMe2.java"));

    let sf = &report.source_files[0];
    assert_eq!(sf.name, "com/example/ExploreMe.java");
    assert_eq!(
        sf.function_information,
        vec![Function {
            name: "exploreMe".to_owned(),
            line: 2,
        }]
    );
    assert_eq!(
        sf.function_executions,
        vec![FunctionExecution {
            name: "exploreMe".to_owned(),
            executions: 1,
        }]
    );
    assert_eq!(sf.overview.functions_found, 1);
    assert_eq!(sf.overview.functions_hit, 1);

    let lines = sf.line_information.iter().map(|l| (l.number, l.executions)).collect::<Vec<_>>();
    assert_eq!(lines, vec![(3, 1), (4, 0), (5, 1), (6, 1)]);
    assert_eq!(sf.overview.lines_found, 4);
    assert_eq!(sf.overview.lines_hit, 3);

    assert_eq!(
        sf.branch_information,
        vec![
            Branch {
                line: 5,
                block: 0,
                number: 0,
                executions: 1,
            },
            Branch {
                line: 5,
                block: 0,
                number: 1,
                executions: 0,
            },
        ]
    );
    assert_eq!(sf.overview.branches_found, 2);
    assert_eq!(sf.overview.branches_hit, 1);
}

#[test]
fn test_parse_empty() {
    assert!(parse(&b""[..]).unwrap().is_empty());
}

#[test]
fn test_parse_missing_colon() {
    let error = parse(&b"SF:com/example/ExploreMe.java\n123\nend_of_record"[..]).unwrap_err();
    assert!(error.kind().is_format());
    match *error.kind() {
        ErrorKind::MalformedRecord(2, ref content) => assert_eq!(content, "123"),
        ref kind => panic!("unexpected error {:?}", kind),
    }
}

#[test]
fn test_parse_invalid_number() {
    let error = parse(&b"SF:com/example/ExploreMe.java\nFN:2a,exploreMe\nend_of_record"[..]).unwrap_err();
    match *error.kind() {
        ErrorKind::InvalidNumber(2, ref content) => assert_eq!(content, "FN:2a,exploreMe"),
        ref kind => panic!("unexpected error {:?}", kind),
    }
    assert!(error.iter().nth(1).is_some(), "the ParseIntError should be kept as the cause");

    let error = parse(&b"SF:a.c\nLH:+-1\nend_of_record\n"[..]).unwrap_err();
    assert!(error.kind().is_format());
}

#[test]
fn test_parse_negative_counts() {
    let lcov = "SF:a.c\nFNDA:-2,main\nDA:3,-1\nLF:1\nLH:-1\nBRDA:3,0,0,-5\nend_of_record\n";
    let report = parse(lcov.as_bytes()).unwrap();
    let sf = &report.source_files[0];
    assert_eq!(sf.function_executions[0].executions, -2);
    assert_eq!(sf.line_information[0].executions, -1);
    assert_eq!(sf.overview.lines_hit, -1);
    assert_eq!(sf.branch_information[0].executions, -5);
    assert!(!sf.branch_information[0].is_taken());

    let lcov = "SF:a.c\nFNDA:-2,main\nFNF:0\nFNH:0\nDA:3,-1\nLF:1\nLH:-1\nBRF:0\nBRH:0\nend_of_record\n";
    let report = parse(lcov.as_bytes()).unwrap();
    let mut buf = Vec::new();
    report.write_lcov(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), lcov);
}

#[test]
fn test_parse_field_counts() {
    let report = parse(&b"SF:a.c\nDA:7,2,d41d8cd98f00b204e9800998ecf8427e\nend_of_record\n"[..]).unwrap();
    assert_eq!(
        report.source_files[0].line_information,
        vec![Line {
            number: 7,
            executions: 2,
        }]
    );

    for input in &["DA:7", "DA:7,2,abc,def", "BRDA:5,0,1", "BRDA:5,0,1,-,2", "FN:12", "FNDA:3"] {
        let lcov = format!("SF:a.c\n{}\nend_of_record\n", input);
        let error = parse(lcov.as_bytes()).unwrap_err();
        match *error.kind() {
            ErrorKind::MalformedRecord(2, ref content) => assert_eq!(content, input),
            ref kind => panic!("unexpected error {:?} for {}", kind, input),
        }
    }
}

#[test]
fn test_parse_skips_unknown_records() {
    let lcov = "TN:unit\nSF:a.c\nVER:2\nFNL:0,1,2\nDA:1,1\n\nend_of_record\n";
    let report = parse(lcov.as_bytes()).unwrap();
    assert_eq!(report.source_files.len(), 1);
    assert_eq!(report.source_files[0].line_information.len(), 1);
}

#[test]
fn test_parse_crlf_and_unterminated() {
    let lcov = "SF:a.c\r\nDA:1,4\r\nend_of_record\r\nSF:b.c\r\nDA:1,1\r\n";
    let report = parse(lcov.as_bytes()).unwrap();
    assert_eq!(report.source_files.len(), 1);
    assert_eq!(report.source_files[0].name, "a.c");
    assert_eq!(report.source_files[0].line_information[0].executions, 4);
}

#[test]
fn test_parse_function_name_with_commas() {
    let lcov = "SF:a.cpp\nFN:4,max<int, long>\nFNDA:0,max<int, long>\nend_of_record\n";
    let report = parse(lcov.as_bytes()).unwrap();
    let sf = &report.source_files[0];
    assert_eq!(sf.function_information[0].name, "max<int, long>");
    assert_eq!(sf.function_information[0].line, 4);
    assert_eq!(sf.function_executions[0].name, "max<int, long>");
    assert_eq!(sf.function_executions[0].executions, 0);
}

#[test]
fn test_parse_keeps_duplicates() {
    let lcov = "SF:a.c\nend_of_record\nSF:a.c\nend_of_record\n";
    let report = parse(lcov.as_bytes()).unwrap();
    assert_eq!(report.source_files.len(), 2);
}
