//! Error rendering using ariadne
//!
//! Diagnostics are printed with the offending line of input and a label
//! under the token that caused them.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use shisoku::{calculate, render_error};
///
/// if let Err(e) = calculate("5 / 0") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Compilation {
            diagnostics,
            source,
        } => render_diagnostics(source, diagnostics, writer, use_color),
        Error::Runtime { diagnostic, source } => {
            render_diagnostics(source, std::slice::from_ref(diagnostic), writer, use_color)
        }
        Error::ResourceExceeded(msg) => {
            writeln!(writer, "Resource limit exceeded: {}", msg)
        }
    }
}

fn render_diagnostics(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
        };

        let mut report = Report::build(kind, (SOURCE_ID, diag.span.0.clone()))
            .with_message(&diag.message)
            .with_config(ariadne::Config::default().with_color(use_color));

        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        let color = colors.next();
        report = report.with_label(
            Label::new((SOURCE_ID, diag.span.0.clone()))
                .with_message(&diag.message)
                .with_color(color),
        );

        if let Some(help) = &diag.help {
            report = report.with_help(help);
        }

        // Render to the writer (need to reborrow to avoid moving)
        report
            .finish()
            .write((SOURCE_ID, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;

    #[test]
    fn test_render_parse_error() {
        let source = "2 + + 3";
        let e = calculate(source).unwrap_err();
        let output = render_error_to_string_no_color(&e);

        assert!(output.contains("Error"));
        assert!(output.contains("P005"));
        assert!(output.contains(source));
    }

    #[test]
    fn test_render_division_by_zero() {
        let e = calculate("1 + 5 / 0").unwrap_err();
        let output = render_error_to_string_no_color(&e);

        assert!(output.contains("Division by zero"));
        assert!(output.contains("R001"));
        assert!(output.lines().count() > 1);
    }

    #[test]
    fn test_render_resource_error() {
        let e = Error::ResourceExceeded("stack".to_string());
        assert_eq!(
            render_error_to_string_no_color(&e),
            "Resource limit exceeded: stack\n"
        );
    }

    #[test]
    fn test_render_help() {
        let e = calculate("2 3").unwrap_err();
        let output = render_error_to_string_no_color(&e);
        assert!(output.contains("Insert an operator between the operands"));
    }
}
