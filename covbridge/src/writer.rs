//! Writer of the LCOV text format.
//!
//! The output is accepted by [`reader::parse()`] and by `genhtml`. For each source file, the records are written in
//! this fixed order:
//!
//! ```text
//! SF, FN*, FNDA*, FNF, FNH, DA*, LF, LH, BRDA*, BRF, BRH, end_of_record
//! ```
//!
//! [`reader::parse()`]: ../reader/fn.parse.html

use error::*;
use reader::{END_OF_RECORD, NOT_TAKEN};
use report::{Report, SourceFile};
use utils::with_lcov_extension;

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

impl Report {
    /// Writes the report as LCOV text into `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Io`] on I/O failure.
    ///
    /// [`Io`]: ../error/enum.ErrorKind.html#variant.Io
    pub fn write_lcov<W: Write>(&self, mut writer: W) -> Result<()> {
        for source_file in &self.source_files {
            write_source_file(&mut writer, source_file)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes the report as an LCOV file.
    ///
    /// The extension `.lcov` is appended to `path` if it does not have it already. The file is opened for both reading
    /// and writing, since `genhtml` re-reads it afterwards.
    ///
    /// If the report contains no source files, no file is created and `Ok(None)` is returned. Otherwise returns the
    /// path of the written file.
    ///
    /// # Errors
    ///
    /// Returns [`WriteReport`] if the file cannot be created or written.
    ///
    /// [`WriteReport`]: ../error/enum.ErrorKind.html#variant.WriteReport
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<Option<PathBuf>> {
        if self.is_empty() {
            debug!("lcov report is empty, no file created");
            return Ok(None);
        }

        let requested = path.as_ref();
        let path = with_lcov_extension(requested).into_owned();
        if path != requested {
            debug!("missing extension `.lcov` was appended to {}", requested.display());
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .chain_err(|| ErrorKind::WriteReport(path.clone()))?;
        self.write_lcov(BufWriter::new(file))
            .chain_err(|| ErrorKind::WriteReport(path.clone()))?;

        debug!("wrote lcov report to {}", path.display());
        Ok(Some(path))
    }
}

fn write_source_file<W: Write>(writer: &mut W, source_file: &SourceFile) -> Result<()> {
    let overview = &source_file.overview;

    writeln!(writer, "SF:{}", source_file.name)?;

    for function in &source_file.function_information {
        writeln!(writer, "FN:{},{}", function.line, function.name)?;
    }
    for execution in &source_file.function_executions {
        writeln!(writer, "FNDA:{},{}", execution.executions, execution.name)?;
    }
    writeln!(writer, "FNF:{}", overview.functions_found)?;
    writeln!(writer, "FNH:{}", overview.functions_hit)?;

    for line in &source_file.line_information {
        writeln!(writer, "DA:{},{}", line.number, line.executions)?;
    }
    writeln!(writer, "LF:{}", overview.lines_found)?;
    writeln!(writer, "LH:{}", overview.lines_hit)?;

    for branch in &source_file.branch_information {
        write!(writer, "BRDA:{},{},{},", branch.line, branch.block, branch.number)?;
        if branch.is_taken() {
            writeln!(writer, "{}", branch.executions)?;
        } else {
            writeln!(writer, "{}", NOT_TAKEN)?;
        }
    }
    writeln!(writer, "BRF:{}", overview.branches_found)?;
    writeln!(writer, "BRH:{}", overview.branches_hit)?;

    writeln!(writer, "{}", END_OF_RECORD)?;
    Ok(())
}

#[cfg(test)]
use report::{Branch, Function, FunctionExecution, Line, Overview};

#[cfg(test)]
fn explore_me() -> Report {
    let mut source_file = SourceFile::new("com/example/ExploreMe.java");
    source_file.function_information.push(Function {
        name: "exploreMe".to_owned(),
        line: 2,
    });
    source_file.function_executions.push(FunctionExecution {
        name: "exploreMe".to_owned(),
        executions: 1,
    });
    source_file.line_information = [(3, 1), (4, 0), (5, 1), (6, 1)]
        .iter()
        .map(|&(number, executions)| Line { number, executions })
        .collect();
    source_file.branch_information = vec![
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
    ];
    source_file.overview = Overview {
        functions_found: 1,
        functions_hit: 1,
        lines_found: 4,
        lines_hit: 3,
        branches_found: 2,
        branches_hit: 1,
    };
    Report {
        source_files: vec![source_file],
    }
}

#[cfg(test)]
const EXPLORE_ME_LCOV: &str = "\
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
";

#[test]
fn test_write_lcov() {
    let mut buf = Vec::new();
    explore_me().write_lcov(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), EXPLORE_ME_LCOV);
}

#[test]
fn test_write_to_path() {
    use std::fs::read_to_string;

    let dir = ::tempfile::tempdir().unwrap();
    let path = dir.path().join("report.lcov");
    let written = explore_me().write_to_path(&path).unwrap();
    assert_eq!(written.as_ref(), Some(&path));
    assert_eq!(read_to_string(&path).unwrap(), EXPLORE_ME_LCOV);
}

#[test]
fn test_write_to_path_appends_extension() {
    let dir = ::tempfile::tempdir().unwrap();
    let written = explore_me().write_to_path(dir.path().join("report")).unwrap();
    assert_eq!(written, Some(dir.path().join("report.lcov")));
    assert!(dir.path().join("report.lcov").is_file());
    assert!(!dir.path().join("report").exists());
}

#[test]
fn test_write_to_path_empty_report() {
    let dir = ::tempfile::tempdir().unwrap();
    let path = dir.path().join("report.lcov");
    assert_eq!(Report::new().write_to_path(&path).unwrap(), None);
    assert!(!path.exists());
}

#[test]
fn test_write_to_path_missing_directory() {
    let dir = ::tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.lcov");
    let error = explore_me().write_to_path(&path).unwrap_err();
    assert!(error.kind().is_io());
    match *error.kind() {
        ErrorKind::WriteReport(ref p) => assert_eq!(p, &path),
        ref kind => panic!("unexpected error {:?}", kind),
    }
}

#[test]
fn test_round_trip() {
    use reader::parse;

    let lcov = "SF:a.java\nFN:2,foo\nFNDA:1,foo\nFNF:1\nFNH:1\nDA:3,1\nDA:4,0\nLF:2\nLH:1\nBRDA:5,0,0,1\nBRDA:5,0,1,-\nBRF:2\nBRH:1\nend_of_record\n";
    let report = parse(lcov.as_bytes()).unwrap();
    assert_eq!(report.source_files.len(), 1);
    let sf = &report.source_files[0];
    assert_eq!(sf.name, "a.java");
    assert_eq!(sf.function_information.len(), 1);
    assert_eq!(sf.function_executions[0].executions, 1);
    assert_eq!(sf.line_information.iter().map(|l| l.executions).collect::<Vec<_>>(), vec![1, 0]);
    assert_eq!(sf.branch_information.iter().map(Branch::is_taken).collect::<Vec<_>>(), vec![true, false]);

    let mut buf = Vec::new();
    report.write_lcov(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf.clone()).unwrap(), lcov);
    assert_eq!(parse(&buf[..]).unwrap(), report);
}

#[test]
fn test_round_trip_keeps_branch_blocks() {
    use reader::parse;

    let lcov = "SF:b.c\nFNF:0\nFNH:0\nLF:0\nLH:0\nBRDA:9,3,0,12\nBRDA:9,3,1,-\nBRDA:11,4,0,-\nBRF:3\nBRH:1\nend_of_record\n";
    let report = parse(lcov.as_bytes()).unwrap();
    let mut buf = Vec::new();
    report.write_lcov(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), lcov);
}
