//! Coverage report.
//!
//! The [`Report`] structure contains format-independent information about the coverage of every function, line and
//! branch of each source file. Every parser in this crate produces a `Report`, and [`Report::write_lcov()`] turns it
//! back into LCOV text.
//!
//! Each [`SourceFile`] stores its per-item lists and an aggregated [`Overview`] side by side. The two come from
//! different places of the input (LCOV has explicit `LF`/`LH`/... records, JaCoCo has `<counter>` elements), and they
//! are never reconciled. A corrupt input may therefore produce a source file whose overview disagrees with the length
//! of its lists.
//!
//! [`Report`]: ./struct.Report.html
//! [`SourceFile`]: ./struct.SourceFile.html
//! [`Overview`]: ./struct.Overview.html
//! [`Report::write_lcov()`]: ./struct.Report.html#method.write_lcov

use std::ops::{Add, AddAssign};

/// A coverage report, the canonical model shared by all parsers.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    /// Source files in the order they were parsed. The same name may appear more than once.
    pub source_files: Vec<SourceFile>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Report {
        Report::default()
    }

    /// Whether the report contains no source files.
    pub fn is_empty(&self) -> bool {
        self.source_files.is_empty()
    }
}

/// Coverage information about a source file.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceFile {
    /// Path of the source file, as written by the producer of the report.
    pub name: String,

    /// Functions declared in the file, in declaration order.
    pub function_information: Vec<Function>,

    /// How many times each function has been called.
    pub function_executions: Vec<FunctionExecution>,

    /// Instrumented lines.
    pub line_information: Vec<Line>,

    /// Branches of every decision point.
    pub branch_information: Vec<Branch>,

    /// Aggregated counts.
    pub overview: Overview,
}

impl SourceFile {
    /// Creates an empty source file with the given name.
    pub fn new<S: Into<String>>(name: S) -> SourceFile {
        SourceFile {
            name: name.into(),
            ..SourceFile::default()
        }
    }
}

/// A function declaration.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Function {
    /// Name of the function.
    pub name: String,

    /// The line number where the function starts.
    pub line: u32,
}

/// Execution count of a function.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionExecution {
    /// Name of the function.
    pub name: String,

    /// Number of times the function is called.
    pub executions: i64,
}

/// Execution count of an instrumented line.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    /// The line number.
    pub number: u32,

    /// Number of times the line is executed. Some gcov versions emit negative counts, which are kept as-is.
    pub executions: i64,
}

/// Coverage information about a branch.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Branch {
    /// The line number of the decision point.
    pub line: u32,

    /// Groups the branches belonging to the same decision point.
    pub block: u32,

    /// Distinguishes the branches within a block.
    pub number: u32,

    /// Number of times this branch is taken. Zero if the branch was never taken.
    pub executions: i64,
}

impl Branch {
    /// Whether the branch has been taken at least once.
    pub fn is_taken(&self) -> bool {
        self.executions > 0
    }
}

/// Statistical summary of a source file, or of a whole run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Overview {
    /// Number of functions found.
    pub functions_found: i64,

    /// Number of functions that has been called.
    pub functions_hit: i64,

    /// Number of instrumented lines.
    pub lines_found: i64,

    /// Number of lines with a non-zero execution count.
    pub lines_hit: i64,

    /// Number of branches found.
    pub branches_found: i64,

    /// Number of branches that has been taken.
    pub branches_hit: i64,
}

impl Add for Overview {
    type Output = Overview;

    fn add(mut self, other: Overview) -> Overview {
        self += other;
        self
    }
}

impl AddAssign for Overview {
    /// Sums field by field, saturating at the bounds of `i64`.
    fn add_assign(&mut self, other: Overview) {
        self.functions_found = self.functions_found.saturating_add(other.functions_found);
        self.functions_hit = self.functions_hit.saturating_add(other.functions_hit);
        self.lines_found = self.lines_found.saturating_add(other.lines_found);
        self.lines_hit = self.lines_hit.saturating_add(other.lines_hit);
        self.branches_found = self.branches_found.saturating_add(other.branches_found);
        self.branches_hit = self.branches_hit.saturating_add(other.branches_hit);
    }
}

#[test]
fn test_overview_add() {
    let a = Overview {
        functions_found: 1,
        functions_hit: 1,
        lines_found: 4,
        lines_hit: 3,
        branches_found: 2,
        branches_hit: 1,
    };
    let b = Overview {
        functions_found: 2,
        functions_hit: 0,
        lines_found: 10,
        lines_hit: 5,
        branches_found: 0,
        branches_hit: 0,
    };
    let sum = a + b;
    assert_eq!(sum.functions_found, 3);
    assert_eq!(sum.functions_hit, 1);
    assert_eq!(sum.lines_found, 14);
    assert_eq!(sum.lines_hit, 8);
    assert_eq!(sum.branches_found, 2);
    assert_eq!(sum.branches_hit, 1);
    assert_eq!(Overview::default() + a, a);
}

#[test]
fn test_overview_add_saturates() {
    let huge = Overview {
        lines_found: i64::max_value(),
        lines_hit: i64::min_value(),
        ..Overview::default()
    };
    let one = Overview {
        lines_found: 1,
        lines_hit: -1,
        ..Overview::default()
    };
    let sum = huge + one;
    assert_eq!(sum.lines_found, i64::max_value());
    assert_eq!(sum.lines_hit, i64::min_value());
}
