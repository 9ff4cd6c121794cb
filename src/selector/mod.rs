use std::fmt;

use codemap::{Span, Spanned};

use crate::ast::StringValue;

pub use complex::*;
pub use compound::*;
pub use list::*;
pub use simple::*;

mod complex;
mod compound;
mod list;
mod simple;

/// A selector whose text contains interpolation. It is expanded and
/// re-parsed into a normal selector structure once its embedded expressions
/// have been evaluated.
#[derive(Debug, Clone)]
pub struct InterpolatedSelector {
    pub contents: StringValue,
    pub span: Span,
}

/// A node in the selector family.
///
/// Selectors model CSS selector syntax independently of the statement and
/// value sides. The set is closed; consumers dispatch by exhaustive
/// matching.
#[derive(Debug, Clone)]
pub enum Selector {
    /// Re-parsed after interpolation resolves; bridges the value side and
    /// the selector side.
    Interpolated(InterpolatedSelector),
    Simple(Spanned<SimpleSelector>),
    Compound(CompoundSelector),
    Complex(ComplexSelector),
    List(SelectorList),
}

impl Selector {
    pub fn span(&self) -> Span {
        match self {
            Self::Interpolated(s) => s.span,
            Self::Simple(s) => s.span,
            Self::Compound(s) => s.span,
            Self::Complex(s) => s.span,
            Self::List(s) => s.span,
        }
    }

    /// Whether this subtree contains the parent reference `&`, in which case
    /// it needs nesting resolution before emission.
    ///
    /// An interpolated selector reports `false`: its contents are unknown
    /// until re-parse.
    pub fn has_parent_reference(&self) -> bool {
        match self {
            Self::Interpolated(..) => false,
            Self::Simple(s) => s.node.is_parent(),
            Self::Compound(s) => s.has_parent_reference(),
            Self::Complex(s) => s.has_parent_reference(),
            Self::List(s) => s.has_parent_reference(),
        }
    }

    /// Whether this subtree contains a placeholder selector, in which case
    /// the extend pass must run before emission.
    pub fn has_placeholder(&self) -> bool {
        match self {
            Self::Interpolated(..) => false,
            Self::Simple(s) => s.node.is_placeholder(),
            Self::Compound(s) => s.has_placeholder(),
            Self::Complex(s) => s.has_placeholder(),
            Self::List(s) => s.has_placeholder(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // interpolated contents have no text until evaluation
            Self::Interpolated(..) => Ok(()),
            Self::Simple(s) => write!(f, "{}", s.node),
            Self::Compound(s) => write!(f, "{}", s),
            Self::Complex(s) => write!(f, "{}", s),
            Self::List(s) => write!(f, "{}", s),
        }
    }
}
