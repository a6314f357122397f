//! Statement nodes.
use std::fmt;

use super::{Expression, Identifier};

/// Any Jeff statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Binding(BindingStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Binding(node) => write!(f, "{node}"),
            Statement::Return(node) => write!(f, "{node}"),
            Statement::Expression(node) => write!(f, "{node}"),
            Statement::Block(node) => write!(f, "{node}"),
        }
    }
}

/// `jeff's NAME is VALUE;` — introduces a new name in the current scope.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingStatement {
    pub name: Identifier,
    pub value: Expression,
}

impl fmt::Display for BindingStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "jeff's {} is {};", self.name, self.value)
    }
}

/// `return VALUE;`. A bare `return;` is represented as `value: None` and
/// evaluates to [`crate::object::Object::Null`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "return {value};"),
            None => write!(f, "return;"),
        }
    }
}

/// An expression used in statement position, e.g. a bare call or literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// A brace-delimited ordered sequence of statements. Renders as the plain
/// concatenation of its statements' renderings, with no delimiters —
/// matching spec's canonical form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
