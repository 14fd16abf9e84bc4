//! Converts code coverage reports between LCOV tracefiles and JaCoCo XML reports.
//!
//! Both formats are read into the same in-memory [`Report`], which can be written back as LCOV text or reduced into a
//! per-file [`Summary`] for display.
//!
//! ```rust
//! use covbridge::{Format, Summary};
//!
//! let report = Format::Lcov.parse(&b"SF:main.c\nDA:1,1\nDA:2,0\nLF:2\nLH:1\nend_of_record\n"[..]).unwrap();
//! let summary = Summary::from(&report);
//! assert_eq!(summary.total.lines_hit, 1);
//!
//! let mut lcov = Vec::new();
//! report.write_lcov(&mut lcov).unwrap();
//! assert!(lcov.starts_with(b"SF:main.c\n"));
//! ```
//!
//! [`Report`]: ./report/struct.Report.html
//! [`Summary`]: ./summary/struct.Summary.html

#![recursion_limit="128"] // needed for error_chain.

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(feature = "serde_json")]
extern crate serde_json;
extern crate quick_xml;
extern crate termcolor;
#[cfg(test)]
extern crate tempfile;

mod utils;
pub mod error;
pub mod report;
pub mod reader;
mod writer;
pub mod jacoco;
pub mod format;
pub mod summary;

pub use error::{Error, ErrorKind, Result};
pub use format::{Format, LcovParser, Parser};
pub use jacoco::JacocoParser;
pub use reader::Reader;
pub use report::{Overview, Report, SourceFile};
pub use summary::{FileCoverage, Summary};
