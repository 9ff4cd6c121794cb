use std::ops::Index;
use std::slice::Iter;

use codemap::Span;

use crate::{
    ast::Value,
    common::Identifier,
    error::{AstError, AstResult, OrderingViolation},
};

/// A formal parameter of a mixin or function definition.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: Identifier,
    pub default: Option<Value>,
    /// A rest parameter captures all trailing arguments.
    pub is_rest: bool,
    pub span: Span,
}

/// A definition's formal parameter list.
///
/// Ordering is validated incrementally as parameters are appended: required
/// parameters precede optional ones, and nothing follows the rest parameter.
/// The running flags make each check O(1). A failed append leaves the list
/// untouched, so a partially valid list is never observable.
#[derive(Debug, Clone)]
pub struct Parameters {
    list: Vec<Parameter>,
    has_optional_parameters: bool,
    has_rest_parameter: bool,
    pub span: Span,
}

impl Parameters {
    pub fn new(span: Span) -> Self {
        Self {
            list: Vec::new(),
            has_optional_parameters: false,
            has_rest_parameter: false,
            span,
        }
    }

    pub fn with_capacity(span: Span, capacity: usize) -> Self {
        Self {
            list: Vec::with_capacity(capacity),
            has_optional_parameters: false,
            has_rest_parameter: false,
            span,
        }
    }

    fn check(
        parameter: &Parameter,
        has_optional_parameters: bool,
        has_rest_parameter: bool,
        index: usize,
    ) -> AstResult<()> {
        let violation = if parameter.default.is_some() && parameter.is_rest {
            Some(OrderingViolation::DefaultOnRestParameter)
        } else if has_rest_parameter {
            Some(OrderingViolation::ParameterAfterRest)
        } else if parameter.default.is_none() && !parameter.is_rest && has_optional_parameters {
            Some(OrderingViolation::RequiredAfterOptional)
        } else {
            None
        };

        match violation {
            Some(violation) => Err(AstError::ordering(
                violation,
                Some(parameter.name.resolve()),
                index,
                parameter.span,
            )),
            None => Ok(()),
        }
    }

    pub fn push(&mut self, parameter: Parameter) -> AstResult<()> {
        Self::check(
            &parameter,
            self.has_optional_parameters,
            self.has_rest_parameter,
            self.list.len(),
        )?;

        if parameter.default.is_some() {
            self.has_optional_parameters = true;
        } else if parameter.is_rest {
            self.has_rest_parameter = true;
        }

        self.list.push(parameter);
        Ok(())
    }

    /// Move every parameter of `other` to the end, preserving order.
    ///
    /// The whole concatenation is validated against this list's state before
    /// any element is committed, so on error neither list's contents have
    /// moved and this list is unchanged.
    pub fn append(&mut self, other: Parameters) -> AstResult<()> {
        let mut has_optional_parameters = self.has_optional_parameters;
        let mut has_rest_parameter = self.has_rest_parameter;

        for (offset, parameter) in other.iter().enumerate() {
            Self::check(
                parameter,
                has_optional_parameters,
                has_rest_parameter,
                self.list.len() + offset,
            )?;
            if parameter.default.is_some() {
                has_optional_parameters = true;
            } else if parameter.is_rest {
                has_rest_parameter = true;
            }
        }

        self.has_optional_parameters = has_optional_parameters;
        self.has_rest_parameter = has_rest_parameter;
        self.list.extend(other.list);
        Ok(())
    }

    pub fn has_optional_parameters(&self) -> bool {
        self.has_optional_parameters
    }

    pub fn has_rest_parameter(&self) -> bool {
        self.has_rest_parameter
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Parameter> {
        self.list.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Parameter> {
        self.list.iter()
    }
}

impl Index<usize> for Parameters {
    type Output = Parameter;

    fn index(&self, index: usize) -> &Self::Output {
        &self.list[index]
    }
}

/// An actual argument at a mixin or function call site.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub value: Value,
    /// `Some` for named (keyword) arguments, `None` for positional ones.
    pub name: Option<Identifier>,
    /// A rest argument spreads a list value into multiple arguments.
    pub is_rest: bool,
    pub span: Span,
}

/// A call site's actual argument list.
///
/// Mirrors [`Parameters`]: positional arguments precede named ones, nothing
/// follows the rest argument, and an argument cannot be both named and rest.
/// A failed append leaves the list untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments {
    list: Vec<Argument>,
    has_named_arguments: bool,
    has_rest_argument: bool,
    pub span: Span,
}

impl Arguments {
    pub fn new(span: Span) -> Self {
        Self {
            list: Vec::new(),
            has_named_arguments: false,
            has_rest_argument: false,
            span,
        }
    }

    pub fn with_capacity(span: Span, capacity: usize) -> Self {
        Self {
            list: Vec::with_capacity(capacity),
            has_named_arguments: false,
            has_rest_argument: false,
            span,
        }
    }

    fn check(
        argument: &Argument,
        has_named_arguments: bool,
        has_rest_argument: bool,
        index: usize,
    ) -> AstResult<()> {
        let violation = match &argument.name {
            Some(name) => {
                if argument.is_rest {
                    Some(OrderingViolation::NamedRestArgument)
                } else if name.is_empty() {
                    Some(OrderingViolation::EmptyArgumentName)
                } else if has_rest_argument {
                    Some(OrderingViolation::ArgumentAfterRest)
                } else {
                    None
                }
            }
            None => {
                if has_rest_argument {
                    Some(OrderingViolation::ArgumentAfterRest)
                } else if !argument.is_rest && has_named_arguments {
                    Some(OrderingViolation::PositionalAfterNamed)
                } else {
                    None
                }
            }
        };

        match violation {
            Some(violation) => Err(AstError::ordering(
                violation,
                argument.name.map(Identifier::resolve),
                index,
                argument.span,
            )),
            None => Ok(()),
        }
    }

    pub fn push(&mut self, argument: Argument) -> AstResult<()> {
        Self::check(
            &argument,
            self.has_named_arguments,
            self.has_rest_argument,
            self.list.len(),
        )?;

        if argument.name.is_some() {
            self.has_named_arguments = true;
        } else if argument.is_rest {
            self.has_rest_argument = true;
        }

        self.list.push(argument);
        Ok(())
    }

    /// Move every argument of `other` to the end, preserving order.
    ///
    /// Validated in full against this list's state before any element is
    /// committed; on error this list is unchanged.
    pub fn append(&mut self, other: Arguments) -> AstResult<()> {
        let mut has_named_arguments = self.has_named_arguments;
        let mut has_rest_argument = self.has_rest_argument;

        for (offset, argument) in other.iter().enumerate() {
            Self::check(
                argument,
                has_named_arguments,
                has_rest_argument,
                self.list.len() + offset,
            )?;
            if argument.name.is_some() {
                has_named_arguments = true;
            } else if argument.is_rest {
                has_rest_argument = true;
            }
        }

        self.has_named_arguments = has_named_arguments;
        self.has_rest_argument = has_rest_argument;
        self.list.extend(other.list);
        Ok(())
    }

    pub fn has_named_arguments(&self) -> bool {
        self.has_named_arguments
    }

    pub fn has_rest_argument(&self) -> bool {
        self.has_rest_argument
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Argument> {
        self.list.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Argument> {
        self.list.iter()
    }
}

impl Index<usize> for Arguments {
    type Output = Argument;

    fn index(&self, index: usize) -> &Self::Output {
        &self.list[index]
    }
}
