use std::error::Error;
use std::fmt::{self, Display};

use codemap::{CodeMap, Span, SpanLoc};

pub type AstResult<T> = Result<T, AstError>;

/// The ordering rules enforced while appending to
/// [`Parameters`](crate::Parameters) and [`Arguments`](crate::Arguments).
///
/// Each rule is checked in constant time against the list's running flags,
/// so a violation is always attributable to the element being appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingViolation {
    /// A required parameter appeared after a parameter with a default value.
    RequiredAfterOptional,
    /// A parameter appeared after the rest parameter.
    ParameterAfterRest,
    /// A single parameter carried both a default value and the rest flag.
    DefaultOnRestParameter,
    /// A positional argument appeared after a named one.
    PositionalAfterNamed,
    /// An argument appeared after the rest argument.
    ArgumentAfterRest,
    /// A single argument was both named and flagged as rest.
    NamedRestArgument,
    /// A named argument's name was the empty string.
    EmptyArgumentName,
}

impl OrderingViolation {
    fn describe(self, name: Option<&str>, index: usize) -> String {
        let subject = match name {
            Some(name) => format!("${}", name),
            None => format!("element at position {}", index),
        };

        match self {
            Self::RequiredAfterOptional => {
                format!("Required parameter {subject} must come before any optional parameters.")
            }
            Self::ParameterAfterRest => {
                format!("Parameter {subject} may not follow a rest parameter.")
            }
            Self::DefaultOnRestParameter => {
                format!("Rest parameter {subject} may not have a default value.")
            }
            Self::PositionalAfterNamed => {
                format!("Positional argument ({subject}) must come before any named arguments.")
            }
            Self::ArgumentAfterRest => {
                format!("Argument ({subject}) may not follow a rest argument.")
            }
            Self::NamedRestArgument => {
                format!("Argument {subject} may not be both named and a rest argument.")
            }
            Self::EmptyArgumentName => {
                format!("Named argument ({subject}) must have a non-empty name.")
            }
        }
    }
}

#[derive(Debug)]
pub struct AstError {
    kind: AstErrorKind,
}

#[derive(Debug)]
enum AstErrorKind {
    /// A raw error with no additional metadata. It contains only a `String`
    /// message and a span.
    Raw(String, Span),
    /// An append to a parameter or argument list broke an ordering rule.
    Ordering {
        violation: OrderingViolation,
        name: Option<String>,
        index: usize,
        span: Span,
    },
    /// An error whose span has been resolved against a `CodeMap`.
    Located { message: String, loc: SpanLoc },
}

impl AstError {
    pub(crate) fn ordering(
        violation: OrderingViolation,
        name: Option<String>,
        index: usize,
        span: Span,
    ) -> Self {
        AstError {
            kind: AstErrorKind::Ordering {
                violation,
                name,
                index,
                span,
            },
        }
    }

    /// The ordering rule that was broken, if this is an ordering error.
    pub fn violation(&self) -> Option<OrderingViolation> {
        match &self.kind {
            AstErrorKind::Ordering { violation, .. } => Some(*violation),
            _ => None,
        }
    }

    /// The 0-based position of the offending parameter or argument.
    pub fn index(&self) -> Option<usize> {
        match &self.kind {
            AstErrorKind::Ordering { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match &self.kind {
            AstErrorKind::Raw(_, span) | AstErrorKind::Ordering { span, .. } => Some(*span),
            AstErrorKind::Located { .. } => None,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            AstErrorKind::Raw(message, ..) => message.clone(),
            AstErrorKind::Ordering {
                violation,
                name,
                index,
                ..
            } => violation.describe(name.as_deref(), *index),
            AstErrorKind::Located { message, .. } => message.clone(),
        }
    }

    /// Resolve this error's span against the `CodeMap` the producing parser
    /// built, so that `Display` can report `path:line:column`.
    pub fn with_loc(self, map: &CodeMap) -> Self {
        let message = self.message();
        match self.span() {
            Some(span) => AstError {
                kind: AstErrorKind::Located {
                    message,
                    loc: map.look_up_span(span),
                },
            },
            None => self,
        }
    }
}

impl Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (message, loc) = match &self.kind {
            AstErrorKind::Located { message, loc } => (message, loc),
            _ => return write!(f, "Error: {}", self.message()),
        };
        let line = loc.begin.line + 1;
        let col = loc.begin.column + 1;
        writeln!(f, "Error: {}", message)?;
        let padding = " ".repeat(format!("{}", line).len() + 1);
        writeln!(f, "{}|", padding)?;
        writeln!(f, "{} | {}", line, loc.file.source_line(loc.begin.line))?;
        writeln!(
            f,
            "{}| {}{}",
            padding,
            " ".repeat(loc.begin.column),
            "^".repeat(loc.end.column.saturating_sub(loc.begin.column).max(1))
        )?;
        writeln!(f, "{}|", padding)?;
        write!(f, "./{}:{}:{}", loc.file.name(), line, col)
    }
}

impl From<(&str, Span)> for AstError {
    #[inline]
    fn from(error: (&str, Span)) -> AstError {
        AstError {
            kind: AstErrorKind::Raw(error.0.to_owned(), error.1),
        }
    }
}

impl From<(String, Span)> for AstError {
    #[inline]
    fn from(error: (String, Span)) -> AstError {
        AstError {
            kind: AstErrorKind::Raw(error.0, error.1),
        }
    }
}

impl Error for AstError {
    fn description(&self) -> &'static str {
        "AST construction error"
    }
}
