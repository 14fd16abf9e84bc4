//! Errors related to the `covbridge` crate.
//!
//! Please see documentation of the [`error-chain` crate](https://docs.rs/error-chain/0.12.4/error_chain/) for detailed
//! usage.
//!
//! Every error falls into one of three kinds:
//!
//! * I/O errors ([`is_io()`]), raised when reading the input or writing the LCOV file fails.
//! * Format errors ([`is_format()`]), raised when LCOV text violates the record grammar.
//! * XML errors ([`is_xml()`]), raised when a JaCoCo report is not well-formed.
//!
//! [`is_io()`]: ./enum.ErrorKind.html#method.is_io
//! [`is_format()`]: ./enum.ErrorKind.html#method.is_format
//! [`is_xml()`]: ./enum.ErrorKind.html#method.is_xml

use std::io;
use std::path::PathBuf;

error_chain! {
    foreign_links {
        Io(io::Error) /** Wrapper of standard I/O error. */;
        Xml(::quick_xml::Error) /** Wrapper of a syntax error reported by the XML reader. */;
        Json(::serde_json::Error) #[cfg(feature="serde_json")] /** Wrapper of JSON error. */;
    }

    errors {
        /// An LCOV line which is not of the shape `PREFIX:VALUE`, or whose value has the wrong number of fields.
        MalformedRecord(line: usize, content: String) {
            description("malformed lcov record")
            display("line {}: `{}` is not a valid lcov record", line, content)
        }

        /// A numeric field of an LCOV record cannot be parsed as a non-negative integer.
        InvalidNumber(line: usize, content: String) {
            description("invalid number in lcov record")
            display("line {}: failed to parse number in lcov record `{}`", line, content)
        }

        /// The LCOV report cannot be created or written. The underlying I/O error is the cause.
        WriteReport(path: PathBuf) {
            description("cannot write lcov report")
            display("cannot write lcov report to `{}`", path.display())
        }

        /// A numeric attribute of a JaCoCo element is not an integer.
        InvalidAttribute(element: String, attribute: String, value: String) {
            description("invalid xml attribute")
            display("attribute `{}` of <{}> should be an integer, found \"{}\"", attribute, element, value)
        }

        /// The JaCoCo document ended before the element was closed.
        UnclosedElement(element: String) {
            description("unclosed xml element")
            display("unexpected end of document, <{}> is not closed", element)
        }

        /// The name given to [`Format::from_str()`] is not a known report format.
        ///
        /// [`Format::from_str()`]: ../format/enum.Format.html
        UnknownFormat(name: String) {
            description("unknown report format")
            display("unknown report format \"{}\", expecting \"lcov\" or \"jacoco\"", name)
        }
    }
}

impl ErrorKind {
    /// Checks whether the error comes from reading or writing a stream.
    pub fn is_io(&self) -> bool {
        match *self {
            ErrorKind::Io(_) | ErrorKind::WriteReport(_) => true,
            ErrorKind::Xml(::quick_xml::Error::Io(_)) => true,
            _ => false,
        }
    }

    /// Checks whether the error is a violation of the LCOV record grammar.
    pub fn is_format(&self) -> bool {
        match *self {
            ErrorKind::MalformedRecord(..) | ErrorKind::InvalidNumber(..) => true,
            _ => false,
        }
    }

    /// Checks whether the error is caused by a malformed JaCoCo XML document.
    pub fn is_xml(&self) -> bool {
        match *self {
            ErrorKind::Xml(ref e) => match *e {
                ::quick_xml::Error::Io(_) => false,
                _ => true,
            },
            ErrorKind::InvalidAttribute(..) | ErrorKind::UnclosedElement(_) => true,
            _ => false,
        }
    }
}

#[test]
fn test_error_kinds() {
    let format = Error::from(ErrorKind::MalformedRecord(2, "123".to_owned()));
    assert!(format.kind().is_format());
    assert!(!format.kind().is_xml());
    assert_eq!(format.to_string(), "line 2: `123` is not a valid lcov record");

    let xml = Error::from(ErrorKind::UnclosedElement("report".to_owned()));
    assert!(xml.kind().is_xml());
    assert!(!xml.kind().is_io());

    let io = Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
    assert!(io.kind().is_io());
    assert!(!io.kind().is_format());
}
