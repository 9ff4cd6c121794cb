/*!
This crate provides the abstract syntax tree shared by the passes of a
Sass-like CSS preprocessor: the parser produces these nodes, the evaluator
expands control directives and substitutes variables, the extend engine
rewrites selector lists, and the emitter serializes the finished tree.

Three node families share one diagnostic base (every node carries a
[`codemap::Span`]):

 - statements ([`AstStmt`]): rulesets, control directives, declarations,
   mixin and function definitions and calls
 - values ([`Value`]): literals, lists, interpolated strings, and
   expressions, held unevaluated
 - selectors ([`Selector`]): simple selectors, compound sequences,
   combinator chains, and comma-separated lists, with parent-reference and
   placeholder flags derived bottom-up

Trees are built strictly bottom-up and append-only. The appends that can
produce a malformed tree (parameter and argument lists) are fallible and
report [ordering violations](OrderingViolation) at construction time.

```
use sass_ast::{
    AstStmt, AstStyle, Block, ListSeparator, ListValue, StringValue, Value, ValueKind,
};

let mut map = codemap::CodeMap::new();
let file = map.add_file("a.scss".to_owned(), "a { color: red; }\n".to_owned());
let span = file.span;

let mut values = ListValue::new(ListSeparator::Space);
values.push(Value::new(ValueKind::Token("red".to_owned()), span.subspan(11, 14)));

let mut body = Block::new(span.subspan(2, 17));
body.push(AstStmt::Style(AstStyle {
    property: StringValue::plain("color".to_owned(), span.subspan(4, 9)),
    value: values,
    span: span.subspan(4, 15),
}));

assert_eq!(body.len(), 1);
assert!(!body.is_root());
```
*/

#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    clippy::new_without_default,
    clippy::multiple_crate_versions,
    clippy::single_match_else
)]

pub use codemap;

pub use crate::{
    ast::*,
    common::{BinaryOp, CallableKind, Identifier, ListSeparator, TextualKind},
    error::{AstError, AstResult, OrderingViolation},
    selector::*,
};

mod ast;
mod common;
mod error;
mod interner;
mod selector;
