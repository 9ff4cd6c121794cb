use std::ops::Index;
use std::slice::Iter;

use codemap::Span;

use crate::ast::AstStmt;

/// An ordered, appendable sequence of statements.
///
/// Blocks are the structural backbone of the tree: every statement that owns
/// nested statements owns them through exactly one `Block`. Order is
/// semantically significant (later declarations override earlier ones,
/// control directives execute in sequence), so the only mutators append at
/// the end.
#[derive(Debug, Clone)]
pub struct Block {
    statements: Vec<AstStmt>,
    is_root: bool,
    pub span: Span,
}

impl Block {
    pub fn new(span: Span) -> Self {
        Self {
            statements: Vec::new(),
            is_root: false,
            span,
        }
    }

    pub fn with_capacity(span: Span, capacity: usize) -> Self {
        Self {
            statements: Vec::with_capacity(capacity),
            is_root: false,
            span,
        }
    }

    /// The block holding an entire document.
    pub fn root(span: Span) -> Self {
        Self {
            statements: Vec::new(),
            is_root: true,
            span,
        }
    }

    pub fn push(&mut self, stmt: AstStmt) {
        self.statements.push(stmt);
    }

    /// Move every statement of `other` to the end of this block, preserving
    /// order. Taking `other` by value enforces the ownership transfer: no
    /// statement ever has two parents.
    pub fn append(&mut self, mut other: Block) {
        self.statements.append(&mut other.statements);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn get(&self, index: usize) -> Option<&AstStmt> {
        self.statements.get(index)
    }

    pub fn iter(&self) -> Iter<'_, AstStmt> {
        self.statements.iter()
    }
}

impl Index<usize> for Block {
    type Output = AstStmt;

    fn index(&self, index: usize) -> &Self::Output {
        &self.statements[index]
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a AstStmt;
    type IntoIter = Iter<'a, AstStmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
