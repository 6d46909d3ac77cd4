//! Report assembly (Builder pattern).
//!
//! # Roles (for beginners)
//!
//! ```text
//! ReportDirector ──drives──► dyn ReportBuilder ──produces──► Report
//!                               ├─ TextReportBuilder
//!                               └─ HtmlReportBuilder
//! ```
//!
//! - The **director** knows *which* steps make up a report and in what order.
//! - A **builder** knows *how* to format each step.
//! - The **product** ([`Report`]) is plain data.
//!
//! Adding a new output format means writing one more builder; the director
//! does not change.

use std::fmt;

/// A three-part report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    header: String,
    content: String,
    footer: String,
}

impl Report {
    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_footer(&mut self, footer: impl Into<String>) {
        self.footer = footer.into();
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Header: {}", self.header)?;
        writeln!(f, "Content: {}", self.content)?;
        write!(f, "Footer: {}", self.footer)
    }
}

/// Step-by-step construction of a [`Report`] in one output format.
#[cfg_attr(test, mockall::automock)]
pub trait ReportBuilder {
    fn set_header(&mut self, header: &str);
    fn set_content(&mut self, content: &str);
    fn set_footer(&mut self, footer: &str);
    /// Returns a copy of the report built so far.
    fn report(&self) -> Report;
}

/// Builds reports with `Text …:` labels on each section.
#[derive(Debug, Default)]
pub struct TextReportBuilder {
    report: Report,
}

impl TextReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportBuilder for TextReportBuilder {
    fn set_header(&mut self, header: &str) {
        self.report.set_header(format!("Text Header: {header}"));
    }

    fn set_content(&mut self, content: &str) {
        self.report.set_content(format!("Text Content: {content}"));
    }

    fn set_footer(&mut self, footer: &str) {
        self.report.set_footer(format!("Text Footer: {footer}"));
    }

    fn report(&self) -> Report {
        self.report.clone()
    }
}

/// Builds reports whose sections are wrapped in HTML elements.
///
/// Section text is inserted verbatim; it is not HTML-escaped.
#[derive(Debug, Default)]
pub struct HtmlReportBuilder {
    report: Report,
}

impl HtmlReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportBuilder for HtmlReportBuilder {
    fn set_header(&mut self, header: &str) {
        self.report.set_header(format!("<h1>{header}</h1>"));
    }

    fn set_content(&mut self, content: &str) {
        self.report.set_content(format!("<p>{content}</p>"));
    }

    fn set_footer(&mut self, footer: &str) {
        self.report.set_footer(format!("<footer>{footer}</footer>"));
    }

    fn report(&self) -> Report {
        self.report.clone()
    }
}

/// Drives a builder through the standard header → content → footer sequence.
#[derive(Debug, Default)]
pub struct ReportDirector;

impl ReportDirector {
    pub const HEADER: &'static str = "Report Header";
    pub const CONTENT: &'static str = "This is the report content.";
    pub const FOOTER: &'static str = "Report Footer";

    pub fn new() -> Self {
        Self
    }

    /// Runs every build step on `builder` and returns the finished report.
    pub fn construct(&self, builder: &mut dyn ReportBuilder) -> Report {
        builder.set_header(Self::HEADER);
        builder.set_content(Self::CONTENT);
        builder.set_footer(Self::FOOTER);
        builder.report()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use mockall::Sequence;

    #[test]
    fn test_text_builder_prefixes_each_section() {
        // Arrange
        let mut builder = TextReportBuilder::new();

        // Act
        builder.set_header("H");
        builder.set_content("C");
        builder.set_footer("F");
        let report = builder.report();

        // Assert
        assert_eq!(report.header(), "Text Header: H");
        assert_eq!(report.content(), "Text Content: C");
        assert_eq!(report.footer(), "Text Footer: F");
    }

    #[test]
    fn test_html_builder_wraps_each_section() {
        let mut builder = HtmlReportBuilder::new();
        builder.set_header("H");
        builder.set_content("C");
        builder.set_footer("F");
        let report = builder.report();

        assert_eq!(report.header(), "<h1>H</h1>");
        assert_eq!(report.content(), "<p>C</p>");
        assert_eq!(report.footer(), "<footer>F</footer>");
    }

    #[test]
    fn test_director_builds_full_text_report() {
        // Arrange
        let director = ReportDirector::new();
        let mut builder = TextReportBuilder::new();

        // Act
        let report = director.construct(&mut builder);

        // Assert
        assert_eq!(
            report.to_string(),
            "Header: Text Header: Report Header\n\
             Content: Text Content: This is the report content.\n\
             Footer: Text Footer: Report Footer"
        );
    }

    #[test]
    fn test_director_builds_full_html_report() {
        let report = ReportDirector::new().construct(&mut HtmlReportBuilder::new());
        assert_eq!(
            report.to_string(),
            "Header: <h1>Report Header</h1>\n\
             Content: <p>This is the report content.</p>\n\
             Footer: <footer>Report Footer</footer>"
        );
    }

    #[test]
    fn test_director_calls_builder_steps_in_order() {
        // Arrange
        let mut seq = Sequence::new();
        let mut builder = MockReportBuilder::new();
        builder
            .expect_set_header()
            .with(eq("Report Header"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        builder
            .expect_set_content()
            .with(eq("This is the report content."))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        builder
            .expect_set_footer()
            .with(eq("Report Footer"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let mut canned = Report::default();
        canned.set_header("canned");
        builder
            .expect_report()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(canned.clone());

        // Act
        let report = ReportDirector::new().construct(&mut builder);

        // Assert – the director returns exactly what the builder produced
        assert_eq!(report, canned);
    }

    #[test]
    fn test_builder_report_is_a_snapshot() {
        // Arrange
        let mut builder = TextReportBuilder::new();
        builder.set_header("first");
        let snapshot = builder.report();

        // Act
        builder.set_header("second");

        // Assert
        assert_eq!(snapshot.header(), "Text Header: first");
        assert_eq!(builder.report().header(), "Text Header: second");
    }

    #[test]
    fn test_default_report_renders_empty_sections() {
        assert_eq!(
            Report::default().to_string(),
            "Header: \nContent: \nFooter: "
        );
    }
}
