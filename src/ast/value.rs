use std::ops::Index;
use std::slice::Iter;

use codemap::Span;

use crate::{
    ast::Arguments,
    common::{BinaryOp, Identifier, ListSeparator, TextualKind},
};

/// A node in an evaluation context.
///
/// Values exist to be evaluated to a final scalar or compound value by the
/// evaluator; this layer only records their shape. The two cross-cutting
/// flags are shared by every kind: `is_delayed` defers evaluation inside
/// unevaluated contexts, and `is_parenthesized` records explicit grouping in
/// the source, which affects list flattening.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub kind: ValueKind,
    pub span: Span,
    pub is_delayed: bool,
    pub is_parenthesized: bool,
}

impl Value {
    pub fn new(kind: ValueKind, span: Span) -> Self {
        Self {
            kind,
            span,
            is_delayed: false,
            is_parenthesized: false,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.kind, ValueKind::Variable(..))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    List(ListValue),
    BinaryOp(Box<BinaryExpr>),
    /// Arithmetic sign flip. Logical negation is an ordinary function call.
    Negation(Box<Value>),
    FunctionCall(FunctionCall),
    /// A variable reference, resolved against a scope by the evaluator.
    Variable(Identifier),
    /// Unevaluated numeric or color text, kept verbatim until the evaluator
    /// decides on a representation.
    Textual(TextualKind, String),
    Number(f64),
    Percentage(f64),
    Dimension(Dimension),
    Color(Color),
    Boolean(bool),
    String(StringValue),
    /// Raw unparsed text, the leaf case.
    Token(String),
}

/// A binary operation, held purely structurally. The operator set is closed
/// so the evaluator's dispatch over it is exhaustive.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub lhs: Value,
    pub rhs: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// The name may contain interpolation, so it is a string value rather
    /// than an identifier.
    pub name: StringValue,
    pub arguments: Arguments,
}

/// An ordered list of values, space- or comma-separated.
///
/// Also used to represent variable-length argument bundles; `is_arglist`
/// marks that case, which affects how the list is later splatted into call
/// arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ListValue {
    elems: Vec<Value>,
    pub separator: ListSeparator,
    pub is_arglist: bool,
}

impl ListValue {
    pub fn new(separator: ListSeparator) -> Self {
        Self {
            elems: Vec::new(),
            separator,
            is_arglist: false,
        }
    }

    pub fn with_capacity(separator: ListSeparator, capacity: usize) -> Self {
        Self {
            elems: Vec::with_capacity(capacity),
            separator,
            is_arglist: false,
        }
    }

    pub fn push(&mut self, value: Value) {
        self.elems.push(value);
    }

    /// Move every element of `other` to the end, preserving order.
    pub fn append(&mut self, mut other: ListValue) {
        self.elems.append(&mut other.elems);
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elems.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Value> {
        self.elems.iter()
    }
}

impl Index<usize> for ListValue {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elems[index]
    }
}

/// Literal textual data: quoted strings, identifiers, and concatenations.
///
/// A string is an ordered sequence of fragments, each itself a value, which
/// lets literal text mix with embedded expressions. The quoting and
/// interpolation flags are fixed at construction and never recomputed from
/// the fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct StringValue {
    fragments: Vec<Value>,
    is_quoted: bool,
    is_interpolated: bool,
}

impl StringValue {
    pub fn new(is_quoted: bool, is_interpolated: bool) -> Self {
        Self {
            fragments: Vec::new(),
            is_quoted,
            is_interpolated,
        }
    }

    pub fn with_capacity(is_quoted: bool, is_interpolated: bool, capacity: usize) -> Self {
        Self {
            fragments: Vec::with_capacity(capacity),
            is_quoted,
            is_interpolated,
        }
    }

    /// An unquoted, uninterpolated string holding a single token fragment.
    pub fn plain(text: String, span: Span) -> Self {
        Self {
            fragments: vec![Value::new(ValueKind::Token(text), span)],
            is_quoted: false,
            is_interpolated: false,
        }
    }

    pub fn push(&mut self, fragment: Value) {
        self.fragments.push(fragment);
    }

    /// Move every fragment of `other` to the end, preserving order. The
    /// receiver's quoting and interpolation flags are unchanged.
    pub fn append(&mut self, mut other: StringValue) {
        self.fragments.append(&mut other.fragments);
    }

    pub fn is_quoted(&self) -> bool {
        self.is_quoted
    }

    pub fn is_interpolated(&self) -> bool {
        self.is_interpolated
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.fragments.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Value> {
        self.fragments.iter()
    }
}

impl Index<usize> for StringValue {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        &self.fragments[index]
    }
}

/// A numeric magnitude carrying unit provenance as separate numerator and
/// denominator unit sequences, enabling unit algebra such as
/// `px*s/px` reducing to `s`.
///
/// Cancellation and conversion belong to the evaluator; this layer only
/// guarantees the unit lists are accurate, order-preserving, and immutable
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    value: f64,
    numerator_units: Vec<String>,
    denominator_units: Vec<String>,
}

impl Dimension {
    pub fn new(value: f64, unit: String) -> Self {
        Self {
            value,
            numerator_units: vec![unit],
            denominator_units: Vec::new(),
        }
    }

    pub fn with_units(value: f64, numerator_units: Vec<String>, denominator_units: Vec<String>) -> Self {
        Self {
            value,
            numerator_units,
            denominator_units,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn numerator_units(&self) -> &[String] {
        &self.numerator_units
    }

    pub fn denominator_units(&self) -> &[String] {
        &self.denominator_units
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    pub fn with_alpha(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}
