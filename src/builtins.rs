//! The two built-in functions the core requires: `len` and `jeffsays`.
//!
//! Consulted by [`crate::evaluator::eval_identifier`] only once ordinary
//! environment lookup has failed, per spec's Identifier evaluation rule.
use std::rc::Rc;

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::object::{BuiltinObject, Object};

fn len(args: &[Rc<Object>]) -> Object {
    if args.len() != 1 {
        return Object::Error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }

    match args[0].as_ref() {
        Object::String(value) => Object::Integer(value.len() as i64),
        other => Object::Error(format!(
            "argument to `len` not supported, got {}",
            other.type_tag()
        )),
    }
}

fn jeffsays(args: &[Rc<Object>]) -> Object {
    for arg in args {
        println!("{}", arg.inspect());
    }
    Object::String(String::new())
}

pub static BUILTINS: Lazy<HashMap<&'static str, BuiltinObject>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "len",
        BuiltinObject {
            name: "len",
            func: len,
        },
    );
    m.insert(
        "jeffsays",
        BuiltinObject {
            name: "jeffsays",
            func: jeffsays,
        },
    );
    m
});

/// Looks up `name` among the registered builtins.
pub fn lookup(name: &str) -> Option<BuiltinObject> {
    BUILTINS.get(name).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_of_string() {
        let args = vec![Rc::new(Object::String("hello world".into()))];
        assert_eq!(len(&args), Object::Integer(11));
    }

    #[test]
    fn len_rejects_non_string() {
        let args = vec![Rc::new(Object::Integer(1))];
        assert_eq!(
            len(&args),
            Object::Error("argument to `len` not supported, got INTEGER".into())
        );
    }

    #[test]
    fn len_rejects_wrong_arity() {
        let args = vec![];
        assert_eq!(
            len(&args),
            Object::Error("wrong number of arguments. got=0, want=1".into())
        );
    }

    #[test]
    fn jeffsays_returns_empty_string() {
        let args = vec![Rc::new(Object::Integer(1))];
        assert_eq!(jeffsays(&args), Object::String(String::new()));
    }
}
