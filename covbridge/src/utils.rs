//! Additional methods for libstd and external crates.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Suffix of an LCOV report file name.
pub const LCOV_SUFFIX: &str = ".lcov";

/// Adds the `into_string_lossy` method to `Vec<u8>`.
pub trait IntoStringLossy {
    /// Consumes the ownership and converts the string-like object into a real string. Unconvertible characters are
    /// replaced by U+FFFD.
    fn into_string_lossy(self) -> String;
}

impl IntoStringLossy for Vec<u8> {
    fn into_string_lossy(self) -> String {
        String::from_utf8(self).unwrap_or_else(|e| String::from_utf8_lossy(&e.into_bytes()).into_owned())
    }
}

/// Returns `path` with the `.lcov` extension appended, unless its file name already ends with it.
///
/// The extension is appended rather than substituted, so `report.info` becomes `report.info.lcov`. A file named just
/// `.lcov` is kept as-is.
pub fn with_lcov_extension(path: &Path) -> Cow<Path> {
    let file_name = path.file_name().map(OsStr::to_string_lossy);
    if file_name.map_or(false, |name| name.ends_with(LCOV_SUFFIX)) {
        Cow::Borrowed(path)
    } else {
        let mut appended = path.as_os_str().to_owned();
        appended.push(LCOV_SUFFIX);
        Cow::Owned(PathBuf::from(appended))
    }
}

#[test]
fn test_with_lcov_extension() {
    assert_eq!(&*with_lcov_extension(Path::new("out/report.lcov")), Path::new("out/report.lcov"));
    assert_eq!(&*with_lcov_extension(Path::new("out/report")), Path::new("out/report.lcov"));
    assert_eq!(&*with_lcov_extension(Path::new("report.info")), Path::new("report.info.lcov"));
    assert_eq!(&*with_lcov_extension(Path::new("lcov")), Path::new("lcov.lcov"));
    assert_eq!(&*with_lcov_extension(Path::new("out/.lcov")), Path::new("out/.lcov"));
    assert_eq!(&*with_lcov_extension(Path::new("out/report.LCOV")), Path::new("out/report.LCOV.lcov"));
}

#[test]
fn test_into_string_lossy() {
    assert_eq!(b"SF:a.c".to_vec().into_string_lossy(), "SF:a.c");
    assert_eq!(b"SF:\xffa.c".to_vec().into_string_lossy(), "SF:\u{fffd}a.c");
}
