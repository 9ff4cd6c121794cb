use std::fmt::{self, Write};
use std::ops::Index;
use std::slice::Iter;

use codemap::Span;

use super::ComplexSelector;

/// A comma-separated selector list, e.g. `a > b, .foo`.
///
/// It matches an element that matches any of its component selectors. The
/// parent-reference and placeholder flags are the OR across all members,
/// accumulated incrementally so they never require a full re-scan.
#[derive(Debug, Clone)]
pub struct SelectorList {
    components: Vec<ComplexSelector>,
    has_parent_reference: bool,
    has_placeholder: bool,
    pub span: Span,
}

impl SelectorList {
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

    pub fn push(&mut self, complex: ComplexSelector) {
        self.has_parent_reference |= complex.has_parent_reference();
        self.has_placeholder |= complex.has_placeholder();
        self.components.push(complex);
    }

    /// Move every alternative of `other` to the end. Members go through
    /// [`push`](Self::push) so the flag accumulation holds, rather than
    /// merely copying `other`'s flag bits.
    pub fn append(&mut self, other: SelectorList) {
        for complex in other.components {
            self.push(complex);
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

    pub fn get(&self, index: usize) -> Option<&ComplexSelector> {
        self.components.get(index)
    }

    pub fn iter(&self) -> Iter<'_, ComplexSelector> {
        self.components.iter()
    }
}

impl Index<usize> for SelectorList {
    type Output = ComplexSelector;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for complex in &self.components {
            if first {
                first = false;
            } else {
                f.write_char(',')?;
                f.write_char(' ')?;
            }
            write!(f, "{}", complex)?;
        }
        Ok(())
    }
}
