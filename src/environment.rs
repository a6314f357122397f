//! Lexically scoped name-to-value mapping.
//!
//! An [`Environment`] is a chained `HashMap<String, Object>` with a parent
//! pointer. Lookup walks the chain to the root; `set` writes only to the
//! local frame. Environments are reference-counted so that a closure's
//! defining scope outlives the call that created the closure, per the
//! "Closure environment lifetime" design note.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::object::Object;

#[derive(Debug, Clone)]
pub struct Environment(Rc<RefCell<Inner>>);

#[derive(Debug)]
struct Inner {
    store: HashMap<String, Rc<Object>>,
    outer: Option<Environment>,
}

impl Environment {
    /// An empty environment with no outer scope.
    pub fn new_root() -> Self {
        Self(Rc::new(RefCell::new(Inner {
            store: HashMap::new(),
            outer: None,
        })))
    }

    /// An empty environment enclosed by `outer`, used for function call
    /// frames and block scopes.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            store: HashMap::new(),
            outer: Some(outer.clone()),
        })))
    }

    /// Looks up `name` in this frame, then walks the outer chain.
    pub fn get(&self, name: &str) -> Option<Rc<Object>> {
        let inner = self.0.borrow();
        if let Some(value) = inner.store.get(name) {
            return Some(value.clone());
        }
        inner.outer.as_ref()?.get(name)
    }

    /// Binds `name` to `value` in this frame only. Always succeeds; an
    /// existing binding of the same name in this frame is overwritten,
    /// there is no shadowing detection.
    pub fn set(&self, name: &str, value: Rc<Object>) {
        self.0.borrow_mut().store.insert(name.to_owned(), value);
    }
}
