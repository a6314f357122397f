//! The tree-walking evaluator. `eval_*` functions recursively dispatch over
//! AST variants and return an [`Object`], threading an [`Environment`].
//!
//! Two propagation rules hold throughout: an [`Object::Error`] returned by
//! any subevaluation is returned immediately by its caller (no recovery in
//! the core), and an [`Object::Return`] is passed up through nested blocks
//! unwrapped only at the function-call or top-level-program boundary.
use std::rc::Rc;

use crate::ast::{
    BlockStatement, Expression, IfExpression, InfixExpression, PrefixExpression, Program,
    Statement,
};
use crate::builtins;
use crate::environment::Environment;
use crate::object::{native_bool_to_object, Object, NULL};

/// Evaluates every top-level statement in order. A `Return` result is
/// unwrapped here — it may never escape the program boundary.
pub fn eval_program(program: &Program, env: &Environment) -> Rc<Object> {
    let mut result = NULL.clone();

    for statement in &program.statements {
        result = eval_statement(statement, env);

        match result.as_ref() {
            Object::Return(value) => return value.clone(),
            Object::Error(_) => return result,
            _ => {}
        }
    }

    result
}

fn eval_statement(statement: &Statement, env: &Environment) -> Rc<Object> {
    match statement {
        Statement::Expression(stmt) => eval_expression(&stmt.expression, env),
        Statement::Binding(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            env.set(&stmt.name.value, value);
            NULL.clone()
        }
        Statement::Return(stmt) => {
            let value = match &stmt.value {
                Some(expression) => eval_expression(expression, env),
                None => NULL.clone(),
            };
            if value.is_error() {
                return value;
            }
            Rc::new(Object::Return(value))
        }
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

/// Unlike [`eval_program`], a block does *not* unwrap `Return` — it passes
/// it up untouched so an enclosing function call (possibly several blocks
/// up, e.g. through a nested `if`) can strip it instead.
fn eval_block_statement(block: &BlockStatement, env: &Environment) -> Rc<Object> {
    let mut result = NULL.clone();

    for statement in &block.statements {
        result = eval_statement(statement, env);

        if matches!(result.as_ref(), Object::Return(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_expression(expression: &Expression, env: &Environment) -> Rc<Object> {
    match expression {
        Expression::IntegerLiteral(node) => Rc::new(Object::Integer(node.value)),
        Expression::BooleanLiteral(node) => native_bool_to_object(node.value),
        Expression::StringLiteral(node) => Rc::new(Object::String(node.value.clone())),
        Expression::Identifier(node) => eval_identifier(&node.value, env),
        Expression::Prefix(node) => eval_prefix_expression(node, env),
        Expression::Infix(node) => eval_infix_expression(node, env),
        Expression::If(node) => eval_if_expression(node, env),
        Expression::FunctionLiteral(node) => Rc::new(Object::Function(crate::object::FunctionObject {
            parameters: node.parameters.clone(),
            body: node.body.clone(),
            env: env.clone(),
        })),
        Expression::Call(node) => eval_call_expression(node, env),
    }
}

/// Looks the name up in the environment chain first; only on a miss does
/// it fall back to the builtin registry.
pub fn eval_identifier(name: &str, env: &Environment) -> Rc<Object> {
    if let Some(value) = env.get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return Rc::new(Object::Builtin(builtin));
    }
    Rc::new(Object::Error(format!("identifier not found: {name}")))
}

fn eval_prefix_expression(node: &PrefixExpression, env: &Environment) -> Rc<Object> {
    let right = eval_expression(&node.right, env);
    if right.is_error() {
        return right;
    }

    match node.operator.as_str() {
        "!" => native_bool_to_object(!right.is_truthy()),
        "-" => match right.as_ref() {
            Object::Integer(value) => Rc::new(Object::Integer(-value)),
            other => Rc::new(Object::Error(format!(
                "unknown operator: -{}",
                other.type_tag()
            ))),
        },
        operator => Rc::new(Object::Error(format!(
            "unknown operator: {operator}{}",
            right.type_tag()
        ))),
    }
}

fn eval_infix_expression(node: &InfixExpression, env: &Environment) -> Rc<Object> {
    let left = eval_expression(&node.left, env);
    if left.is_error() {
        return left;
    }
    let right = eval_expression(&node.right, env);
    if right.is_error() {
        return right;
    }

    match (left.as_ref(), right.as_ref()) {
        (Object::Integer(l), Object::Integer(r)) => {
            eval_integer_infix(&node.operator, *l, *r)
        }
        (Object::Boolean(l), Object::Boolean(r)) => match node.operator.as_str() {
            "==" => native_bool_to_object(l == r),
            "!=" => native_bool_to_object(l != r),
            operator => Rc::new(Object::Error(format!(
                "unknown operator: BOOLEAN {operator} BOOLEAN"
            ))),
        },
        (Object::String(l), Object::String(r)) => match node.operator.as_str() {
            "+" => Rc::new(Object::String(format!("{l}{r}"))),
            operator => Rc::new(Object::Error(format!(
                "unknown operator: STRING {operator} STRING"
            ))),
        },
        (l, r) => Rc::new(Object::Error(format!(
            "type mismatch: {} {} {}",
            l.type_tag(),
            node.operator,
            r.type_tag()
        ))),
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Rc<Object> {
    match operator {
        "+" => Rc::new(Object::Integer(left + right)),
        "-" => Rc::new(Object::Integer(left - right)),
        "*" => Rc::new(Object::Integer(left * right)),
        "/" => {
            if right == 0 {
                Rc::new(Object::Error("division by zero".to_owned()))
            } else {
                Rc::new(Object::Integer(left / right))
            }
        }
        "<" => native_bool_to_object(left < right),
        ">" => native_bool_to_object(left > right),
        "==" => native_bool_to_object(left == right),
        "!=" => native_bool_to_object(left != right),
        operator => Rc::new(Object::Error(format!(
            "unknown operator: INTEGER {operator} INTEGER"
        ))),
    }
}

fn eval_if_expression(node: &IfExpression, env: &Environment) -> Rc<Object> {
    let condition = eval_expression(&node.condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block_statement(&node.consequence, env)
    } else if let Some(alternative) = &node.alternative {
        eval_block_statement(alternative, env)
    } else {
        NULL.clone()
    }
}

fn eval_call_expression(node: &crate::ast::CallExpression, env: &Environment) -> Rc<Object> {
    let function = eval_expression(&node.function, env);
    if function.is_error() {
        return function;
    }

    let mut arguments = Vec::with_capacity(node.arguments.len());
    for argument in &node.arguments {
        let value = eval_expression(argument, env);
        if value.is_error() {
            return value;
        }
        arguments.push(value);
    }

    apply_function(&function, &arguments)
}

fn apply_function(function: &Object, arguments: &[Rc<Object>]) -> Rc<Object> {
    match function {
        Object::Function(func) => {
            if func.parameters.len() != arguments.len() {
                return Rc::new(Object::Error(format!(
                    "wrong number of arguments. got={}, want={}",
                    arguments.len(),
                    func.parameters.len()
                )));
            }

            let call_env = Environment::new_enclosed(&func.env);
            for (parameter, argument) in func.parameters.iter().zip(arguments) {
                call_env.set(&parameter.value, argument.clone());
            }

            let evaluated = eval_block_statement(&func.body, &call_env);
            match evaluated.as_ref() {
                Object::Return(value) => value.clone(),
                _ => evaluated,
            }
        }
        Object::Builtin(builtin) => Rc::new((builtin.func)(arguments)),
        other => Rc::new(Object::Error(format!("not a function: {}", other.type_tag()))),
    }
}
