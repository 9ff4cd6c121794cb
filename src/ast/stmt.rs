use codemap::Span;

use crate::{
    ast::{Arguments, Block, ListValue, Parameters, StringValue, Value},
    common::{CallableKind, Identifier},
    selector::Selector,
};

/// A set of styles headed by a selector list.
///
/// Rulesets are unnestable: once the nesting pass has hoisted one, later
/// passes must not re-nest it.
#[derive(Debug, Clone)]
pub struct AstRuleSet {
    pub selector: Selector,
    pub body: Block,
    pub span: Span,
}

/// A namespaced property group, e.g. `font: { family: serif; }`.
#[derive(Debug, Clone)]
pub struct AstPropertySet {
    pub name: StringValue,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct AstMedia {
    pub query: Value,
    pub body: Block,
    pub span: Span,
}

/// An arbitrary `@`-rule this layer does not model further.
#[derive(Debug, Clone)]
pub struct AstUnknownAtRule {
    pub name: String,
    pub selector: Option<Selector>,
    pub body: Option<Block>,
    pub span: Span,
}

/// A style declaration: a property name and its values. No block.
#[derive(Debug, Clone)]
pub struct AstStyle {
    pub property: StringValue,
    pub value: ListValue,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct AstVariableDecl {
    pub name: Identifier,
    pub value: Value,
    /// A guarded assignment (`!default`) only takes effect if the variable
    /// is currently unset or falsy.
    pub is_guarded: bool,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct AstImport {
    pub location: StringValue,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct AstWarn {
    pub message: StringValue,
    pub span: Span,
}

/// A CSS comment. The text may contain interpolation.
#[derive(Debug, Clone)]
pub struct AstComment {
    pub text: StringValue,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct AstIf {
    pub condition: Value,
    pub body: Block,
    pub else_body: Option<Block>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct AstFor {
    pub variable: Identifier,
    pub from: Value,
    pub to: Value,
    pub is_inclusive: bool,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct AstEach {
    pub variable: Identifier,
    pub list: Value,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct AstWhile {
    pub condition: Value,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct AstExtendRule {
    pub selector: Selector,
    pub span: Span,
}

/// A mixin or function definition. The two share one shape, distinguished by
/// [`CallableKind`], so parameter validation is written once.
#[derive(Debug, Clone)]
pub struct AstCallableDecl {
    pub kind: CallableKind,
    pub name: Identifier,
    pub parameters: Parameters,
    pub body: Block,
    pub span: Span,
}

/// A mixin invocation (`@include`). The optional content block is passed to
/// the mixin's `@content`.
#[derive(Debug, Clone)]
pub struct AstInclude {
    pub name: Identifier,
    pub arguments: Arguments,
    pub content: Option<Block>,
    pub span: Span,
}

/// A node in an expansion context.
///
/// Statements exist to be rewritten and macro-expanded in a top-down pass
/// over a document. The set is closed; every traversal dispatches by
/// exhaustive matching, so a new pass is a compile-time exhaustiveness
/// obligation.
#[derive(Debug, Clone)]
pub enum AstStmt {
    RuleSet(AstRuleSet),
    PropertySet(AstPropertySet),
    Media(AstMedia),
    UnknownAtRule(AstUnknownAtRule),
    Style(AstStyle),
    VariableDecl(AstVariableDecl),
    Import(AstImport),
    Warn(AstWarn),
    Comment(AstComment),
    If(AstIf),
    For(AstFor),
    Each(AstEach),
    While(AstWhile),
    Extend(AstExtendRule),
    CallableDecl(AstCallableDecl),
    Include(AstInclude),
}

impl AstStmt {
    pub fn span(&self) -> Span {
        match self {
            Self::RuleSet(s) => s.span,
            Self::PropertySet(s) => s.span,
            Self::Media(s) => s.span,
            Self::UnknownAtRule(s) => s.span,
            Self::Style(s) => s.span,
            Self::VariableDecl(s) => s.span,
            Self::Import(s) => s.span,
            Self::Warn(s) => s.span,
            Self::Comment(s) => s.span,
            Self::If(s) => s.span,
            Self::For(s) => s.span,
            Self::Each(s) => s.span,
            Self::While(s) => s.span,
            Self::Extend(s) => s.span,
            Self::CallableDecl(s) => s.span,
            Self::Include(s) => s.span,
        }
    }

    /// Whether the emission pass must leave this statement where the nesting
    /// pass put it. Derived from the variant so it can never disagree with
    /// the node's shape.
    pub fn is_unnestable(&self) -> bool {
        matches!(self, Self::RuleSet(..))
    }
}
