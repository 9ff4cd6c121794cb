use std::fmt::{self, Display, Write};

use codemap::Span;

use super::CompoundSelector;

/// One of the four CSS selector relationship operators.
#[derive(Clone, Debug, Eq, PartialEq, Copy, Hash)]
pub enum Combinator {
    /// Matches the right-hand selector anywhere inside the left-hand
    /// selector's subtree. Written as whitespace.
    Descendant,

    /// Matches the right-hand selector if it's a direct child of the
    /// left-hand selector in the DOM tree.
    ///
    /// `'>'`
    Child,

    /// Matches the right-hand selector if it comes after the left-hand
    /// selector in the DOM tree.
    ///
    /// `'~'`
    FollowingSibling,

    /// Matches the right-hand selector if it's immediately adjacent to the
    /// left-hand selector in the DOM tree.
    ///
    /// `'+'`
    NextSibling,
}

impl Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::FollowingSibling => '~',
            Self::NextSibling => '+',
        })
    }
}

/// One step of a left-associative combinator chain.
///
/// `a > b c` is a `ComplexSelector` whose compound is `c`, whose combinator
/// is descendant, and whose context is the chain for `a > b`. The context
/// chain runs strictly backward within one comma alternative and terminates
/// at a step with no context, so it is acyclic by construction.
///
/// The combinator, context, and flags are fixed at construction; rewriting a
/// step means building a new one.
#[derive(Debug, Clone)]
pub struct ComplexSelector {
    combinator: Combinator,
    context: Option<Box<ComplexSelector>>,
    compound: CompoundSelector,
    has_parent_reference: bool,
    has_placeholder: bool,
    pub span: Span,
}

impl ComplexSelector {
    pub fn new(
        span: Span,
        combinator: Combinator,
        context: Option<Box<ComplexSelector>>,
        compound: CompoundSelector,
    ) -> Self {
        let has_parent_reference = context
            .as_deref()
            .map_or(false, ComplexSelector::has_parent_reference)
            || compound.has_parent_reference();
        let has_placeholder = context
            .as_deref()
            .map_or(false, ComplexSelector::has_placeholder)
            || compound.has_placeholder();

        Self {
            combinator,
            context,
            compound,
            has_parent_reference,
            has_placeholder,
            span,
        }
    }

    /// A chain of length one: a bare compound selector.
    pub fn leaf(span: Span, compound: CompoundSelector) -> Self {
        Self::new(span, Combinator::Descendant, None, compound)
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn context(&self) -> Option<&ComplexSelector> {
        self.context.as_deref()
    }

    pub fn compound(&self) -> &CompoundSelector {
        &self.compound
    }

    pub fn has_parent_reference(&self) -> bool {
        self.has_parent_reference
    }

    pub fn has_placeholder(&self) -> bool {
        self.has_placeholder
    }
}

impl Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(context) = &self.context {
            write!(f, "{}", context)?;
            match self.combinator {
                Combinator::Descendant => f.write_char(' ')?,
                combinator => write!(f, " {} ", combinator)?,
            }
        }
        write!(f, "{}", self.compound)
    }
}
