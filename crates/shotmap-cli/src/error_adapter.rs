//! Error adapter for converting ShotMapError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! Malformed JSON input is reported with a snippet of the offending document
//! and a pointer at the position serde_json stopped at.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use shotmap::ShotMapError;

/// Adapter for a JSON document that failed to parse.
pub struct JsonDiagnosticAdapter<'a> {
    document: &'static str,
    err: &'a serde_json::Error,
    src: &'a str,
}

impl<'a> JsonDiagnosticAdapter<'a> {
    pub fn new(document: &'static str, err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { document, err, src }
    }

    /// Byte span of the position the parser stopped at.
    fn span(&self) -> SourceSpan {
        let offset = line_column_to_offset(self.src, self.err.line(), self.err.column());
        let len = usize::from(offset < self.src.len());
        SourceSpan::new(offset.into(), len)
    }
}

impl fmt::Debug for JsonDiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonDiagnosticAdapter")
            .field("document", &self.document)
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for JsonDiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Malformed {} data", self.document)
    }
}

impl std::error::Error for JsonDiagnosticAdapter<'_> {}

impl MietteDiagnostic for JsonDiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("shotmap::data"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!(
            "expected a StatsBomb {} JSON document",
            self.document
        )))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_primary_with_span(Some(self.err.to_string()), self.span());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`ShotMapError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a ShotMapError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ShotMapError::Io(_) => "shotmap::io",
            ShotMapError::Data { .. } => "shotmap::data",
            ShotMapError::InvalidData(_) => "shotmap::invalid_data",
            ShotMapError::Layout(_) => "shotmap::layout",
            ShotMapError::Config(_) => "shotmap::config",
            ShotMapError::Export(_) => "shotmap::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ShotMapError::InvalidData(_) => Some(Box::new(
                "shot events need a location, minute, player, possession team, xG and outcome",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// Malformed JSON with a pointer into the document.
    Json(JsonDiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Json(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Json(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Json(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Json(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Json(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Json(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Byte offset of a 1-based line and column, clamped to the source length.
///
/// serde_json reports column 0 when it fails right after a newline.
fn line_column_to_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}

/// Convert a [`ShotMapError`] into a list of reportable errors.
pub fn to_reportables(err: &ShotMapError) -> Vec<Reportable<'_>> {
    match err {
        ShotMapError::Data { document, err, src } => vec![Reportable::Json(
            JsonDiagnosticAdapter::new(*document, err, src),
        )],
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_error(src: &str) -> ShotMapError {
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        ShotMapError::new_data_error("events", err, src)
    }

    #[test]
    fn test_line_column_to_offset() {
        let src = "ab\ncde\nf";
        assert_eq!(line_column_to_offset(src, 1, 1), 0);
        assert_eq!(line_column_to_offset(src, 2, 2), 4);
        assert_eq!(line_column_to_offset(src, 3, 1), 7);
        // Column 0 points at the line start
        assert_eq!(line_column_to_offset(src, 2, 0), 3);
        assert_eq!(line_column_to_offset(src, 9, 9), src.len());
    }

    #[test]
    fn test_json_error_points_into_source() {
        let src = "[\n  {\"index\": 1,,}\n]";
        let err = data_error(src);

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        let Reportable::Json(adapter) = &reportables[0] else {
            panic!("Expected Json");
        };
        assert_eq!(adapter.to_string(), "Malformed events data");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        // The span lands at the doubled comma on the second line
        let comma = src.find(",,").unwrap() + 1;
        assert!(labels[0].offset().abs_diff(comma) <= 1);
    }

    #[test]
    fn test_truncated_json_span_at_end() {
        let src = "[{\"index\": 1";
        let err = data_error(src);

        let reportables = to_reportables(&err);
        let Reportable::Json(adapter) = &reportables[0] else {
            panic!("Expected Json");
        };
        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert!(labels[0].offset() <= src.len());
    }

    #[test]
    fn test_non_data_error() {
        let err = ShotMapError::InvalidData("event a1 has no minute".to_string());

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Invalid match data: event a1 has no minute");
                assert_eq!(e.code().unwrap().to_string(), "shotmap::invalid_data");
            }
            Reportable::Json(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_config_error_code() {
        let err = ShotMapError::Config("bad".to_string());
        let reportables = to_reportables(&err);
        assert_eq!(
            reportables[0].code().unwrap().to_string(),
            "shotmap::config"
        );
    }
}
