use std::fmt::{self, Display};

use crate::interner::InternedString;

/// The operators that may appear inside a binary expression.
///
/// Operator identity is part of the node's shape: the set is closed, so
/// downstream dispatch can be exhaustive.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BinaryOp {
    And,
    Or,
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanEqual,
    LessThan,
    LessThanEqual,
    Plus,
    Minus,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn precedence(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Equal | Self::NotEqual => 3,
            Self::GreaterThan | Self::GreaterThanEqual | Self::LessThan | Self::LessThanEqual => 4,
            Self::Plus | Self::Minus => 5,
            Self::Mul | Self::Div => 6,
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::And => write!(f, "and"),
            BinaryOp::Or => write!(f, "or"),
            BinaryOp::Equal => write!(f, "=="),
            BinaryOp::NotEqual => write!(f, "!="),
            BinaryOp::GreaterThan => write!(f, ">"),
            BinaryOp::GreaterThanEqual => write!(f, ">="),
            BinaryOp::LessThan => write!(f, "<"),
            BinaryOp::LessThanEqual => write!(f, "<="),
            BinaryOp::Plus => write!(f, "+"),
            BinaryOp::Minus => write!(f, "-"),
            BinaryOp::Mul => write!(f, "*"),
            BinaryOp::Div => write!(f, "/"),
        }
    }
}

/// How the elements of a [`ListValue`](crate::ListValue) are joined.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ListSeparator {
    Space,
    Comma,
}

impl ListSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Comma => ", ",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Comma => "comma",
        }
    }
}

/// The flavor of an unparsed numeric or color literal.
///
/// Textual values keep their source text until the evaluator decides on a
/// representation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TextualKind {
    Number,
    Percentage,
    Dimension,
    HexColor,
}

/// Distinguishes mixin definitions from function definitions.
///
/// Both share one declaration shape; mixins are invoked for the statements
/// they emit, functions for the value they return.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CallableKind {
    Mixin,
    Function,
}

/// Underscores and hyphens are considered equal inside identifiers.
///
/// This struct protects that invariant by normalizing all underscores into
/// hyphens.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Copy)]
pub struct Identifier(InternedString);

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identifier")
            .field(&self.0.to_string())
            .finish()
    }
}

impl Identifier {
    fn from_str(s: &str) -> Self {
        if s.contains('_') {
            Identifier(InternedString::get_or_intern(s.replace('_', "-")))
        } else {
            Identifier(InternedString::get_or_intern(s))
        }
    }

    pub fn resolve(self) -> String {
        self.0.resolve()
    }

    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    pub fn is_public(self) -> bool {
        !self.resolve().starts_with('-')
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Identifier {
        Self::from_str(&s)
    }
}

impl From<&String> for Identifier {
    fn from(s: &String) -> Identifier {
        Self::from_str(s)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Identifier {
        Self::from_str(s)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
