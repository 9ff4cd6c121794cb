use std::fmt;
use std::ops::Index;
use std::slice::Iter;

use codemap::{Span, Spanned};

use super::SimpleSelector;

/// A compound selector: an ordered sequence of simple selectors with no
/// combinators between them, e.g. `div.foo:hover`.
///
/// The parent-reference and placeholder flags are accumulated as members are
/// appended, so later passes (nesting resolution, extend) can read them
/// without re-walking the tree. They are derived state and can only grow
/// through [`push`](Self::push).
#[derive(Debug, Clone)]
pub struct CompoundSelector {
    components: Vec<Spanned<SimpleSelector>>,
    has_parent_reference: bool,
    has_placeholder: bool,
    pub span: Span,
}

impl CompoundSelector {
    pub fn new(span: Span) -> Self {
        Self {
            components: Vec::new(),
            has_parent_reference: false,
            has_placeholder: false,
            span,
        }
    }

    pub fn with_capacity(span: Span, capacity: usize) -> Self {
        Self {
            components: Vec::with_capacity(capacity),
            has_parent_reference: false,
            has_placeholder: false,
            span,
        }
    }

    pub fn push(&mut self, simple: Spanned<SimpleSelector>) {
        self.has_parent_reference |= simple.node.is_parent();
        self.has_placeholder |= simple.node.is_placeholder();
        self.components.push(simple);
    }

    /// Move every member of `other` to the end, re-accumulating the flags.
    pub fn append(&mut self, other: CompoundSelector) {
        for simple in other.components {
            self.push(simple);
        }
    }

    pub fn has_parent_reference(&self) -> bool {
        self.has_parent_reference
    }

    pub fn has_placeholder(&self) -> bool {
        self.has_placeholder
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Spanned<SimpleSelector>> {
        self.components.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Spanned<SimpleSelector>> {
        self.components.iter()
    }
}

impl Index<usize> for CompoundSelector {
    type Output = Spanned<SimpleSelector>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for simple in &self.components {
            write!(f, "{}", simple.node)?;
        }
        Ok(())
    }
}
