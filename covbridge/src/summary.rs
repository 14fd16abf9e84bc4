//! Per-file and total coverage statistics, for display.

use error::Result;
use reader;
use report::{Overview, Report};

use termcolor::{Color, ColorSpec, WriteColor};

use std::cmp::max;
use std::io::{self, Read};

/// The coverage numbers of one source file.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FileCoverage {
    /// Name of the source file.
    pub filename: String,
    /// Counts of the source file.
    pub coverage: Overview,
}

/// Coverage numbers of all source files of a report, with their total.
///
/// The `total` is always the field-wise sum of the coverage of every file, as long as files are added with
/// [`push()`](#method.push).
#[derive(Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    /// Sum of the coverage of all files.
    pub total: Overview,
    /// Coverage of each file, in report order.
    pub files: Vec<FileCoverage>,
}

impl Summary {
    /// Creates an empty summary.
    pub fn new() -> Summary {
        Summary::default()
    }

    /// Adds a file to the summary, accumulating its coverage into the total.
    pub fn push(&mut self, file: FileCoverage) {
        self.total += file.coverage;
        self.files.push(file);
    }

    /// Summarizes a report from the overview of each source file.
    ///
    /// The per-file lists (functions, lines, branches) are not recounted.
    pub fn from_report(report: &Report) -> Summary {
        let mut summary = Summary::new();
        for source_file in &report.source_files {
            summary.push(FileCoverage {
                filename: source_file.name.clone(),
                coverage: source_file.overview,
            });
        }
        log_summary(&summary);
        summary
    }

    /// Parses LCOV text and summarizes it.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`reader::parse()`].
    ///
    /// [`reader::parse()`]: ../reader/fn.parse.html
    pub fn from_lcov<R: Read>(input: R) -> Result<Summary> {
        let report = reader::parse(input)?;
        Ok(Summary::from_report(&report))
    }

    /// Prints the summary as a right-aligned table.
    ///
    /// Every file gets a row of `hit / found (percent)` cells for functions, lines and branches. A category with
    /// nothing found is displayed as 100%. The table ends with the header repeated, followed by the total row.
    pub fn print_table<W: WriteColor>(&self, mut writer: W) -> io::Result<()> {
        let mut rows = Vec::with_capacity(self.files.len() + 4);
        rows.push(header_row("File"));
        for file in &self.files {
            let c = &file.coverage;
            rows.push([
                file.filename.clone(),
                percent_cell(c.functions_hit, c.functions_found),
                percent_cell(c.lines_hit, c.lines_found),
                percent_cell(c.branches_hit, c.branches_found),
            ]);
        }
        rows.push(Default::default());
        rows.push(header_row(""));
        let t = &self.total;
        rows.push([
            "Total".to_owned(),
            count_cell(t.functions_hit, t.functions_found),
            count_cell(t.lines_hit, t.lines_found),
            count_cell(t.branches_hit, t.branches_found),
        ]);

        let mut widths = [0; 4];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = max(*width, cell.chars().count());
            }
        }

        let mut bold = ColorSpec::new();
        bold.set_bold(true);

        writeln!(writer)?;
        writer.set_color(bold.clone().set_fg(Some(Color::Green)))?;
        writeln!(writer, "Coverage Report:")?;
        writer.reset()?;

        let repeated_header = rows.len() - 2;
        for (i, row) in rows.iter().enumerate() {
            let is_header = i == 0 || i == repeated_header;
            if is_header {
                writer.set_color(&bold)?;
            }
            for (column, cell) in row.iter().enumerate() {
                if column > 0 {
                    write!(writer, " | ")?;
                }
                write!(writer, "{:>width$}", cell, width = widths[column])?;
            }
            if is_header {
                writer.reset()?;
            }
            writeln!(writer)?;
        }
        writeln!(writer)
    }
}

impl<'a> From<&'a Report> for Summary {
    fn from(report: &'a Report) -> Summary {
        Summary::from_report(report)
    }
}

const HEADERS: [&str; 3] = ["Functions Hit/Found", "Lines Hit/Found", "Branches Hit/Found"];

fn header_row(first: &str) -> [String; 4] {
    [first.to_owned(), HEADERS[0].to_owned(), HEADERS[1].to_owned(), HEADERS[2].to_owned()]
}

fn count_cell(hit: i64, found: i64) -> String {
    format!("{} / {}", hit, found)
}

fn percent_cell(hit: i64, found: i64) -> String {
    let percent = if found == 0 {
        100.0
    } else {
        hit as f64 * 100.0 / found as f64
    };
    format!("{} {:>8}", count_cell(hit, found), format!("({:.1}%)", percent))
}

/// Dumps the summary to the debug log.
#[cfg(all(feature = "serde", feature = "serde_json"))]
pub(crate) fn log_summary(summary: &Summary) {
    if !log_enabled!(::log::Level::Debug) {
        return;
    }
    match ::serde_json::to_string_pretty(summary) {
        Ok(json) => debug!("created coverage summary: {}", json),
        Err(e) => warn!("unable to convert coverage summary to json: {}", e),
    }
}

/// Dumps the summary to the debug log.
#[cfg(not(all(feature = "serde", feature = "serde_json")))]
pub(crate) fn log_summary(summary: &Summary) {
    debug!("created coverage summary: {:?}", summary);
}

#[cfg(test)]
fn overview(f: (i64, i64), l: (i64, i64), b: (i64, i64)) -> Overview {
    Overview {
        functions_found: f.1,
        functions_hit: f.0,
        lines_found: l.1,
        lines_hit: l.0,
        branches_found: b.1,
        branches_hit: b.0,
    }
}

#[test]
fn test_total_is_sum() {
    assert_eq!(Summary::from_report(&Report::new()).total, Overview::default());

    let mut report = Report::new();
    for (i, &(f, l, b)) in [((1, 2), (3, 4), (0, 0)), ((0, 0), (5, 5), (1, 3)), ((2, 2), (0, 7), (2, 2))].iter().enumerate() {
        let mut sf = ::report::SourceFile::new(format!("f{}.c", i));
        sf.overview = overview(f, l, b);
        report.source_files.push(sf);
    }
    let summary = Summary::from(&report);
    assert_eq!(summary.files.len(), 3);
    assert_eq!(summary.files[1].filename, "f1.c");
    assert_eq!(summary.total, overview((3, 4), (8, 16), (3, 5)));
}

#[test]
fn test_total_saturates() {
    let mut report = Report::new();
    for &lines_found in &[i64::max_value(), 1] {
        let mut sf = ::report::SourceFile::new("huge.c");
        sf.overview.lines_found = lines_found;
        report.source_files.push(sf);
    }
    assert_eq!(Summary::from_report(&report).total.lines_found, i64::max_value());
}

#[test]
fn test_from_lcov() {
    let lcov = "SF:a.c\nFNF:2\nFNH:1\nLF:10\nLH:4\nend_of_record\nSF:b.c\nLF:1\nLH:1\nBRF:2\nBRH:2\nend_of_record\n";
    let summary = Summary::from_lcov(lcov.as_bytes()).unwrap();
    assert_eq!(summary.files.len(), 2);
    assert_eq!(summary.files[0].coverage, overview((1, 2), (4, 10), (0, 0)));
    assert_eq!(summary.total, overview((1, 2), (5, 11), (2, 2)));

    assert!(Summary::from_lcov(&b"garbage\n"[..]).unwrap_err().kind().is_format());
}

#[test]
fn test_percent_cell() {
    assert_eq!(percent_cell(1, 1), "1 / 1 (100.0%)");
    assert_eq!(percent_cell(3, 4), "3 / 4  (75.0%)");
    assert_eq!(percent_cell(2, 3), "2 / 3  (66.7%)");
    assert_eq!(percent_cell(0, 0), "0 / 0 (100.0%)");
    assert_eq!(percent_cell(0, 9), "0 / 9   (0.0%)");
}

#[test]
fn test_print_table() {
    use termcolor::NoColor;

    let mut summary = Summary::new();
    summary.push(FileCoverage {
        filename: "a.c".to_owned(),
        coverage: overview((1, 1), (3, 4), (1, 2)),
    });

    let mut output = NoColor::new(Vec::new());
    summary.print_table(&mut output).unwrap();
    let output = String::from_utf8(output.into_inner()).unwrap();
    let lines = output.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Coverage Report:");
    assert_eq!(lines[2], " File | Functions Hit/Found | Lines Hit/Found | Branches Hit/Found");
    assert_eq!(lines[3], "  a.c |      1 / 1 (100.0%) |  3 / 4  (75.0%) |     1 / 2  (50.0%)");
    assert_eq!(lines[4], format!("{} | {} | {} | {}", " ".repeat(5), " ".repeat(19), " ".repeat(15), " ".repeat(18)));
    assert_eq!(lines[5], format!("{} | Functions Hit/Found | Lines Hit/Found | Branches Hit/Found", " ".repeat(5)));
    assert_eq!(
        lines[6],
        format!("Total | {}1 / 1 | {}3 / 4 | {}1 / 2", " ".repeat(14), " ".repeat(10), " ".repeat(13))
    );
    assert_eq!(lines[7], "");
    assert_eq!(lines.len(), 8);
}
