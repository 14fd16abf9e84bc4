//! Reader of JaCoCo XML reports.
//!
//! A JaCoCo report separates per-line coverage from per-method coverage:
//!
//! ```text
//! report
//!     package name
//!         class name sourcefilename
//!             method name line
//!                 counter type missed covered
//!         sourcefile name
//!             line nr mi ci mb cb
//!             counter type missed covered
//! ```
//!
//! Lines and branches are read from `<sourcefile>`, while functions are read from the `<class>` whose name matches the
//! source file. The [`Overview`] of each source file is summed from the `<counter>` elements of the `<sourcefile>`
//! only, independent of the lists built from `<line>` and `<method>`.
//!
//! [`Overview`]: ../report/struct.Overview.html

use error::*;
use format::Parser;
use report::{Branch, Function, FunctionExecution, Line, Overview, Report, SourceFile};
use summary::{log_summary, FileCoverage, Summary};
use utils::IntoStringLossy;

use quick_xml::Reader as XmlReader;
use quick_xml::events::{BytesStart, Event};

use std::io::{BufRead, Read};
use std::str::FromStr;

/// The directory, relative to the project root, where the sources of JaCoCo reports are assumed to live.
pub const DEFAULT_SOURCE_ROOT: &str = "src/main/java";

//----------------------------------------------------------------------------------------------------------------------
//{{{ JacocoParser

/// Converts JaCoCo XML reports into [`Report`]s.
///
/// JaCoCo only records the package path of a source file. The parser prefixes it with a source root to produce a path
/// relative to the project, `src/main/java` by default.
///
/// # Examples
///
/// ```rust
/// use covbridge::JacocoParser;
/// use covbridge::format::Parser;
///
/// let xml = r#"<report name="demo">
///     <package name="com/example">
///         <sourcefile name="App.kt"><line nr="3" mi="0" ci="2" mb="0" cb="0"/></sourcefile>
///     </package>
/// </report>"#;
///
/// let report = JacocoParser::with_source_root("src/main/kotlin").parse(xml.as_bytes()).unwrap();
/// assert_eq!(report.source_files[0].name, "src/main/kotlin/com/example/App.kt");
/// ```
///
/// [`Report`]: ../report/struct.Report.html
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct JacocoParser {
    source_root: String,
}

impl Default for JacocoParser {
    fn default() -> JacocoParser {
        JacocoParser::with_source_root(DEFAULT_SOURCE_ROOT)
    }
}

impl JacocoParser {
    /// Creates a parser which places source files under `source_root`. An empty root keeps the package path as-is.
    pub fn with_source_root<S: Into<String>>(source_root: S) -> JacocoParser {
        JacocoParser {
            source_root: source_root.into(),
        }
    }

    /// The directory prepended to the package path of every source file.
    pub fn source_root(&self) -> &str {
        &self.source_root
    }

    fn convert(&self, document: Document) -> Report {
        let mut report = Report::new();
        for package in &document.packages {
            for source_file in &package.source_files {
                report.source_files.push(self.convert_source_file(package, source_file));
            }
        }
        report
    }

    fn convert_source_file(&self, package: &PackageElement, source_file: &SourceFileElement) -> SourceFile {
        let package_path = join_path(&[&package.name, &source_file.name]);
        let mut result = SourceFile::new(join_path(&[&self.source_root, &package_path]));

        for line in &source_file.lines {
            // A line is executed once any of its instructions is covered.
            result.line_information.push(Line {
                number: line.nr,
                executions: (line.ci > 0) as i64,
            });

            let covered = (0..line.cb).map(|number| (number, 1));
            let missed = (0..line.mb).map(|number| (number, 0));
            result.branch_information.extend(covered.chain(missed).map(|(number, executions)| Branch {
                line: line.nr,
                block: 0,
                number,
                executions,
            }));
        }

        let class_name = strip_extension(&package_path);
        for class in package.classes.iter().filter(|class| class.name == class_name) {
            for method in &class.methods {
                result.function_information.push(Function {
                    name: method.name.clone(),
                    line: method.line,
                });
                let is_covered = method.counters.iter().any(|c| c.ty == CounterType::Method && c.covered > 0);
                result.function_executions.push(FunctionExecution {
                    name: method.name.clone(),
                    executions: is_covered as i64,
                });
            }
        }

        for counter in &source_file.counters {
            add_counter(&mut result.overview, counter);
        }

        trace!("converted {} with {} lines", result.name, result.line_information.len());
        result
    }
}

impl Parser for JacocoParser {
    /// Parses a JaCoCo XML report. An empty input produces an empty report.
    ///
    /// # Errors
    ///
    /// * Returns [`Xml`] if the document is not well-formed.
    /// * Returns [`UnclosedElement`] if the document ends inside an element.
    /// * Returns [`InvalidAttribute`] if a numeric attribute is not an integer.
    /// * Returns [`Io`] on I/O failure.
    ///
    /// [`Xml`]: ../error/enum.ErrorKind.html#variant.Xml
    /// [`UnclosedElement`]: ../error/enum.ErrorKind.html#variant.UnclosedElement
    /// [`InvalidAttribute`]: ../error/enum.ErrorKind.html#variant.InvalidAttribute
    /// [`Io`]: ../error/enum.ErrorKind.html#variant.Io
    fn parse<R: Read>(&self, mut input: R) -> Result<Report> {
        let mut content = Vec::new();
        input.read_to_end(&mut content)?;
        if content.is_empty() {
            debug!("empty jacoco report, returning empty report");
            return Ok(Report::new());
        }
        let document = Document::read(&content[..])?;
        Ok(self.convert(document))
    }
}

/// Parses a JaCoCo XML report with the default source root.
///
/// See [`JacocoParser`] for details.
///
/// [`JacocoParser`]: ./struct.JacocoParser.html
pub fn parse<R: Read>(input: R) -> Result<Report> {
    JacocoParser::default().parse(input)
}

/// Summarizes a JaCoCo XML report directly from its `<counter>` elements, without building a [`Report`].
///
/// Each file is named `<package>/<sourcefile>`. This function never fails: this summary is only meant for display, so
/// any error is logged as a warning and an empty summary is returned.
///
/// [`Report`]: ../report/struct.Report.html
pub fn summarize<R: Read>(mut input: R) -> Summary {
    let mut summary = Summary::new();

    let mut content = Vec::new();
    if let Err(e) = input.read_to_end(&mut content) {
        warn!("unable to read jacoco report: {}", e);
        return summary;
    }
    if content.is_empty() {
        debug!("empty jacoco report, returning empty coverage summary");
        return summary;
    }

    let document = match Document::read(&content[..]) {
        Ok(document) => document,
        Err(e) => {
            warn!("unable to parse jacoco report: {}", e);
            return summary;
        },
    };

    for package in &document.packages {
        for source_file in &package.source_files {
            let mut coverage = Overview::default();
            for counter in &source_file.counters {
                add_counter(&mut coverage, counter);
            }
            summary.push(FileCoverage {
                filename: join_path(&[&package.name, &source_file.name]),
                coverage,
            });
        }
    }

    log_summary(&summary);
    summary
}

/// Accumulates a JaCoCo counter into the matching fields of an overview. Counters other than `LINE`, `BRANCH` and
/// `METHOD` are ignored.
fn add_counter(overview: &mut Overview, counter: &Counter) {
    let (found, hit) = match counter.ty {
        CounterType::Line => (&mut overview.lines_found, &mut overview.lines_hit),
        CounterType::Branch => (&mut overview.branches_found, &mut overview.branches_hit),
        CounterType::Method => (&mut overview.functions_found, &mut overview.functions_hit),
        CounterType::Other => return,
    };
    *found = found.saturating_add(counter.covered.saturating_add(counter.missed));
    *hit = hit.saturating_add(counter.covered);
}

/// Joins path components with `/`, skipping empty ones.
fn join_path(components: &[&str]) -> String {
    components
        .iter()
        .map(|c| c.trim_matches('/'))
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Removes the extension of the last component of a `/`-separated path.
fn strip_extension(path: &str) -> &str {
    let start = path.rfind('/').map_or(0, |s| s + 1);
    match path[start..].rfind('.') {
        Some(dot) if dot > 0 => &path[..start + dot],
        _ => path,
    }
}

#[test]
fn test_join_path() {
    assert_eq!(join_path(&["src/main/java", "com/example/A.java"]), "src/main/java/com/example/A.java");
    assert_eq!(join_path(&["src/main/java/", "", "A.java"]), "src/main/java/A.java");
    assert_eq!(join_path(&["", "com/example/A.java"]), "com/example/A.java");
}

#[test]
fn test_strip_extension() {
    assert_eq!(strip_extension("com/example/ExploreMe.java"), "com/example/ExploreMe");
    assert_eq!(strip_extension("com/example/App.kt"), "com/example/App");
    assert_eq!(strip_extension("com/exa.mple/Main"), "com/exa.mple/Main");
    assert_eq!(strip_extension("Main.java"), "Main");
}

//}}}
//----------------------------------------------------------------------------------------------------------------------
//{{{ Document

/// The parts of a JaCoCo document needed to build a report.
#[derive(Default, Debug)]
struct Document {
    packages: Vec<PackageElement>,
}

#[derive(Default, Debug)]
struct PackageElement {
    name: String,
    classes: Vec<ClassElement>,
    source_files: Vec<SourceFileElement>,
}

#[derive(Default, Debug)]
struct ClassElement {
    name: String,
    methods: Vec<MethodElement>,
}

#[derive(Default, Debug)]
struct MethodElement {
    name: String,
    line: u32,
    counters: Vec<Counter>,
}

#[derive(Default, Debug)]
struct SourceFileElement {
    name: String,
    lines: Vec<LineElement>,
    counters: Vec<Counter>,
}

/// A `<line>` element. `ci` is the number of covered instructions, `mb`/`cb` are missed/covered branches. The missed
/// instructions `mi` are validated but not stored.
#[derive(Default, Debug)]
struct LineElement {
    nr: u32,
    ci: u32,
    mb: u32,
    cb: u32,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum CounterType {
    Line,
    Branch,
    Method,
    Other,
}

#[derive(Copy, Clone, Debug)]
struct Counter {
    ty: CounterType,
    missed: i64,
    covered: i64,
}

/// An element which is still open while reading the document.
#[derive(Debug)]
enum Open {
    Package(PackageElement),
    Class(ClassElement),
    Method(MethodElement),
    SourceFile(SourceFileElement),
    Other(String),
}

impl Document {
    /// Reads a document from an XML stream.
    ///
    /// Elements found outside of their expected parent are dropped.
    fn read<R: BufRead>(input: R) -> Result<Document> {
        let mut reader = XmlReader::from_reader(input);
        reader.trim_text(true);

        let mut document = Document::default();
        let mut stack = Vec::new();
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    let open = open_element(&mut stack, e)?;
                    stack.push(open);
                },
                Event::Empty(ref e) => {
                    let open = open_element(&mut stack, e)?;
                    close_element(&mut document, &mut stack, open);
                },
                Event::End(_) => {
                    if let Some(open) = stack.pop() {
                        close_element(&mut document, &mut stack, open);
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            bail!(ErrorKind::UnclosedElement(open_name(open).to_owned()));
        }

        debug!("read jacoco report with {} packages", document.packages.len());
        Ok(document)
    }
}

/// Handles the start of an element. `<line>` and `<counter>` are attached to their parent immediately, other
/// elements are returned to be pushed onto the stack.
fn open_element(stack: &mut Vec<Open>, e: &BytesStart) -> Result<Open> {
    let name = e.name();
    trace!("open <{}>", String::from_utf8_lossy(name.as_ref()));
    Ok(match name.as_ref() {
        b"package" => Open::Package(PackageElement {
            name: string_attribute(e, "name")?,
            ..PackageElement::default()
        }),
        b"class" => Open::Class(ClassElement {
            name: string_attribute(e, "name")?,
            ..ClassElement::default()
        }),
        b"method" => Open::Method(MethodElement {
            name: string_attribute(e, "name")?,
            line: number_attribute(e, "line")?,
            ..MethodElement::default()
        }),
        b"sourcefile" => Open::SourceFile(SourceFileElement {
            name: string_attribute(e, "name")?,
            ..SourceFileElement::default()
        }),
        b"line" => {
            number_attribute::<u32>(e, "mi")?;
            let line = LineElement {
                nr: number_attribute(e, "nr")?,
                ci: number_attribute(e, "ci")?,
                mb: number_attribute(e, "mb")?,
                cb: number_attribute(e, "cb")?,
            };
            if let Some(&mut Open::SourceFile(ref mut source_file)) = stack.last_mut() {
                source_file.lines.push(line);
            }
            Open::Other("line".to_owned())
        },
        b"counter" => {
            let ty = match &*string_attribute(e, "type")? {
                "LINE" => CounterType::Line,
                "BRANCH" => CounterType::Branch,
                "METHOD" => CounterType::Method,
                _ => CounterType::Other,
            };
            let counter = Counter {
                ty,
                missed: number_attribute(e, "missed")?,
                covered: number_attribute(e, "covered")?,
            };
            match stack.last_mut() {
                Some(&mut Open::Method(ref mut method)) => method.counters.push(counter),
                Some(&mut Open::SourceFile(ref mut source_file)) => source_file.counters.push(counter),
                _ => {},
            }
            Open::Other("counter".to_owned())
        },
        other => Open::Other(other.to_vec().into_string_lossy()),
    })
}

/// Handles the end of an element, moving it into its parent.
fn close_element(document: &mut Document, stack: &mut Vec<Open>, open: Open) {
    match (open, stack.last_mut()) {
        (Open::Package(package), _) => document.packages.push(package),
        (Open::Class(class), Some(&mut Open::Package(ref mut package))) => package.classes.push(class),
        (Open::SourceFile(source_file), Some(&mut Open::Package(ref mut package))) => package.source_files.push(source_file),
        (Open::Method(method), Some(&mut Open::Class(ref mut class))) => class.methods.push(method),
        (open, _) => trace!("close {:?}", open_name(&open)),
    }
}

fn open_name(open: &Open) -> &str {
    match *open {
        Open::Package(_) => "package",
        Open::Class(_) => "class",
        Open::Method(_) => "method",
        Open::SourceFile(_) => "sourcefile",
        Open::Other(ref name) => name,
    }
}

/// Reads an attribute as a string, unescaping entities. A missing attribute is read as an empty string.
fn string_attribute(e: &BytesStart, key: &str) -> Result<String> {
    match e.try_get_attribute(key).map_err(::quick_xml::Error::from)? {
        Some(attribute) => Ok(attribute.unescape_value()?.into_owned()),
        None => Ok(String::new()),
    }
}

/// Reads an attribute as an integer. A missing attribute is read as zero.
fn number_attribute<T: FromStr + Default>(e: &BytesStart, key: &str) -> Result<T> {
    let value = string_attribute(e, key)?;
    if value.is_empty() {
        return Ok(T::default());
    }
    match value.trim().parse() {
        Ok(number) => Ok(number),
        Err(_) => {
            let element = e.name().as_ref().to_vec().into_string_lossy();
            bail!(ErrorKind::InvalidAttribute(element, key.to_owned(), value))
        },
    }
}

//}}}
//----------------------------------------------------------------------------------------------------------------------
//{{{ Tests

#[cfg(test)]
const EXPLORE_ME: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<!DOCTYPE report PUBLIC "-//JACOCO//DTD Report 1.1//EN" "report.dtd">
<report name="gradle">
    <sessioninfo id="host-1a2b3c" start="1675085476000" dump="1675085477000"/>
    <package name="com/example">
        <class name="com/example/ExploreMe" sourcefilename="ExploreMe.java">
            <method line="3" name="&lt;init&gt;" desc="()V">
                <counter covered="1" missed="0" type="LINE"/>
                <counter covered="1" missed="0" type="METHOD"/>
            </method>
            <method line="5" name="exploreMe" desc="(II)V">
                <counter covered="3" missed="3" type="BRANCH"/>
                <counter covered="4" missed="2" type="LINE"/>
                <counter covered="1" missed="0" type="METHOD"/>
            </method>
            <counter covered="3" missed="3" type="BRANCH"/>
            <counter covered="5" missed="2" type="LINE"/>
            <counter covered="2" missed="0" type="METHOD"/>
        </class>
        <sourcefile name="ExploreMe.java">
            <line cb="0" ci="3" mb="0" mi="0" nr="3"/>
            <line cb="1" ci="2" mb="1" mi="0" nr="5"/>
            <line cb="2" ci="3" mb="0" mi="0" nr="6"/>
            <line cb="0" ci="5" mb="0" mi="0" nr="7"/>
            <line cb="0" ci="0" mb="2" mi="3" nr="10"/>
            <line cb="0" ci="0" mb="0" mi="5" nr="11"/>
            <line cb="0" ci="1" mb="0" mi="0" nr="14"/>
            <counter covered="3" missed="3" type="BRANCH"/>
            <counter covered="5" missed="2" type="LINE"/>
            <counter covered="2" missed="0" type="METHOD"/>
        </sourcefile>
        <counter covered="3" missed="3" type="BRANCH"/>
        <counter covered="5" missed="2" type="LINE"/>
        <counter covered="2" missed="0" type="METHOD"/>
    </package>
    <counter covered="3" missed="3" type="BRANCH"/>
    <counter covered="5" missed="2" type="LINE"/>
    <counter covered="2" missed="0" type="METHOD"/>
</report>
"#;

#[test]
fn test_parse() {
    let report = parse(EXPLORE_ME.as_bytes()).unwrap();
    assert_eq!(report.source_files.len(), 1);

    let sf = &report.source_files[0];
    assert_eq!(sf.name, "src/main/java/com/example/ExploreMe.java");

    let functions = sf.function_information.iter().map(|f| (&*f.name, f.line)).collect::<Vec<_>>();
    assert_eq!(functions, vec![("<init>", 3), ("exploreMe", 5)]);
    let executions = sf.function_executions.iter().map(|f| (&*f.name, f.executions)).collect::<Vec<_>>();
    assert_eq!(executions, vec![("<init>", 1), ("exploreMe", 1)]);

    let lines = sf.line_information.iter().map(|l| (l.number, l.executions)).collect::<Vec<_>>();
    assert_eq!(lines, vec![(3, 1), (5, 1), (6, 1), (7, 1), (10, 0), (11, 0), (14, 1)]);

    let branches = sf.branch_information.iter().map(|b| (b.line, b.number, b.executions)).collect::<Vec<_>>();
    assert_eq!(branches, vec![(5, 0, 1), (5, 0, 0), (6, 0, 1), (6, 1, 1), (10, 0, 0), (10, 1, 0)]);
    assert!(sf.branch_information.iter().all(|b| b.block == 0));

    assert_eq!(
        sf.overview,
        Overview {
            functions_found: 2,
            functions_hit: 2,
            lines_found: 7,
            lines_hit: 5,
            branches_found: 6,
            branches_hit: 3,
        }
    );
}

#[test]
fn test_parse_empty() {
    assert!(parse(&b""[..]).unwrap().is_empty());
    assert!(parse(&b"<report name=\"empty\"/>"[..]).unwrap().is_empty());
}

#[test]
fn test_parse_line_executions_are_boolean() {
    let xml = r#"<report><package name="p"><sourcefile name="A.java">
        <line nr="1" mi="0" ci="3" mb="0" cb="0"/>
        <line nr="2" mi="4" ci="0" mb="0" cb="0"/>
        <line nr="3" mi="1" ci="1000"/>
    </sourcefile></package></report>"#;
    let report = parse(xml.as_bytes()).unwrap();
    let lines = report.source_files[0].line_information.iter().map(|l| (l.number, l.executions)).collect::<Vec<_>>();
    assert_eq!(lines, vec![(1, 1), (2, 0), (3, 1)]);
    assert!(report.source_files[0].branch_information.is_empty());
}

#[test]
fn test_parse_method_executions() {
    let xml = r#"<report><package name="p">
        <class name="p/A" sourcefilename="A.java">
            <method name="hit" line="3"><counter type="METHOD" missed="0" covered="1"/></method>
            <method name="missed" line="9"><counter type="LINE" missed="0" covered="2"/><counter type="METHOD" missed="1" covered="0"/></method>
            <method name="bare" line="12"/>
        </class>
        <class name="p/B" sourcefilename="B.java">
            <method name="other" line="1"><counter type="METHOD" missed="0" covered="1"/></method>
        </class>
        <sourcefile name="A.java"/>
        <sourcefile name="B.java"/>
    </package></report>"#;
    let report = parse(xml.as_bytes()).unwrap();
    assert_eq!(report.source_files.len(), 2);

    let a = &report.source_files[0];
    assert_eq!(a.name, "src/main/java/p/A.java");
    let executions = a.function_executions.iter().map(|f| (&*f.name, f.executions)).collect::<Vec<_>>();
    assert_eq!(executions, vec![("hit", 1), ("missed", 0), ("bare", 0)]);
    assert_eq!(a.overview, Overview::default());

    let b = &report.source_files[1];
    assert_eq!(b.function_information.len(), 1);
    assert_eq!(b.function_information[0].name, "other");
}

#[test]
fn test_parse_default_package_and_source_root() {
    let xml = r#"<report><package name=""><class name="Main"><method name="main" line="2"/></class><sourcefile name="Main.java"/></package></report>"#;
    let report = parse(xml.as_bytes()).unwrap();
    assert_eq!(report.source_files[0].name, "src/main/java/Main.java");
    assert_eq!(report.source_files[0].function_information.len(), 1);

    let report = JacocoParser::with_source_root("").parse(xml.as_bytes()).unwrap();
    assert_eq!(report.source_files[0].name, "Main.java");
}

#[test]
fn test_parse_grouped_packages() {
    let xml = r#"<report><group name="module"><package name="a/b"><sourcefile name="C.java"/></package></group></report>"#;
    let report = parse(xml.as_bytes()).unwrap();
    assert_eq!(report.source_files.len(), 1);
    assert_eq!(report.source_files[0].name, "src/main/java/a/b/C.java");
}

#[test]
fn test_parse_malformed() {
    let error = parse(&b"<report><package name=\"p\"></report>"[..]).unwrap_err();
    assert!(error.kind().is_xml(), "{:?}", error.kind());

    let error = parse(&b"<report><package name=\"p\">"[..]).unwrap_err();
    assert!(error.kind().is_xml(), "{:?}", error.kind());
    if let ErrorKind::UnclosedElement(ref name) = *error.kind() {
        assert_eq!(name, "package");
    }

    let error = parse(&b"<report><package name=\"p\"><sourcefile name=\"A.java\"><line nr=\"x\"/></sourcefile></package></report>"[..]).unwrap_err();
    match *error.kind() {
        ErrorKind::InvalidAttribute(ref element, ref attribute, ref value) => {
            assert_eq!((&**element, &**attribute, &**value), ("line", "nr", "x"));
        },
        ref kind => panic!("unexpected error {:?}", kind),
    }
}

#[test]
fn test_parse_validates_missed_instructions() {
    let xml = r#"<report><package name="p"><sourcefile name="A.java"><line nr="1" mi="many" ci="1"/></sourcefile></package></report>"#;
    match *parse(xml.as_bytes()).unwrap_err().kind() {
        ErrorKind::InvalidAttribute(_, ref attribute, ref value) => assert_eq!((&**attribute, &**value), ("mi", "many")),
        ref kind => panic!("unexpected error {:?}", kind),
    }
}

#[test]
fn test_summarize() {
    let summary = summarize(EXPLORE_ME.as_bytes());
    assert_eq!(summary.files.len(), 1);
    assert_eq!(summary.files[0].filename, "com/example/ExploreMe.java");
    assert_eq!(summary.files[0].coverage, parse(EXPLORE_ME.as_bytes()).unwrap().source_files[0].overview);
    assert_eq!(summary.total, summary.files[0].coverage);
}

#[test]
fn test_summarize_totals() {
    let xml = r#"<report>
        <package name="a">
            <sourcefile name="A.java"><counter type="LINE" missed="1" covered="2"/><counter type="INSTRUCTION" missed="9" covered="9"/></sourcefile>
            <sourcefile name="B.java"><counter type="BRANCH" missed="4" covered="0"/></sourcefile>
        </package>
        <package name="c"><sourcefile name="D.java"><counter type="METHOD" missed="0" covered="3"/><counter type="LINE" missed="0" covered="1"/></sourcefile></package>
    </report>"#;
    let summary = summarize(xml.as_bytes());
    let names = summary.files.iter().map(|f| &*f.filename).collect::<Vec<_>>();
    assert_eq!(names, vec!["a/A.java", "a/B.java", "c/D.java"]);
    let sum = summary.files.iter().fold(Overview::default(), |acc, f| acc + f.coverage);
    assert_eq!(summary.total, sum);
    assert_eq!(summary.total.lines_found, 4);
    assert_eq!(summary.total.lines_hit, 3);
    assert_eq!(summary.total.branches_found, 4);
    assert_eq!(summary.total.functions_hit, 3);
}

#[test]
fn test_summarize_is_fail_soft() {
    assert!(summarize(&b""[..]).files.is_empty());
    let summary = summarize(&b"<report><package name=\"p\">"[..]);
    assert!(summary.files.is_empty());
    assert_eq!(summary.total, Overview::default());
}

//}}}
