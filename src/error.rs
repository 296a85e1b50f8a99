use crate::Span;
use std::fmt::{self, Debug, Display};

#[cfg(test)]
#[path = "./error_tests.rs"]
mod tests;

/// Error returned when a string cannot be parsed.
///
/// No partial value is ever exposed alongside an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The error kind
    pub kind: ErrorKind,
    /// The byte range of the input responsible for the error.
    ///
    /// For [`ErrorKind::InvalidNumber`] this is the first unexpected byte, or
    /// the trailing bytes left after the digits. For [`ErrorKind::OutOfRange`]
    /// it covers the numeric text, sign included, without the trailing newline.
    pub span: Span,
}

impl std::error::Error for Error {}

impl From<(ErrorKind, Span)> for Error {
    fn from((kind, span): (ErrorKind, Span)) -> Self {
        Self { kind, span }
    }
}

/// The two ways a parse can fail.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No valid parse exists: empty input, a non-digit where a digit was
    /// required, a sign the target does not accept, an unsupported base or
    /// characters left over after the number.
    InvalidNumber,

    /// The text is a well formed number whose value cannot be represented by
    /// the named type.
    OutOfRange(&'static str),
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InvalidNumber => "invalid-number",
            Self::OutOfRange(_) => "out-of-range",
        };
        f.write_str(text)
    }
}

impl Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InvalidNumber => f.write_str("invalid number"),
            ErrorKind::OutOfRange(kind) => write!(f, "number out of range of '{kind}'"),
        }
    }
}

#[cfg(feature = "reporting")]
#[cfg_attr(docsrs, doc(cfg(feature = "reporting")))]
impl Error {
    /// Converts this [`Error`] into a [`codespan_reporting::diagnostic::Diagnostic`]
    pub fn to_diagnostic<FileId: Copy + PartialEq>(
        &self,
        fid: FileId,
    ) -> codespan_reporting::diagnostic::Diagnostic<FileId> {
        use codespan_reporting::diagnostic::{Diagnostic, Label};

        let diag = Diagnostic::error().with_code(self.kind.to_string());

        match &self.kind {
            ErrorKind::InvalidNumber => diag
                .with_message(self.to_string())
                .with_labels(vec![
                    Label::primary(fid, self.span).with_message("unable to parse number"),
                ]),
            ErrorKind::OutOfRange(kind) => diag
                .with_message(format!("number is out of range of '{kind}'"))
                .with_labels(vec![Label::primary(fid, self.span)]),
        }
    }
}
