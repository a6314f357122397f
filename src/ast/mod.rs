//! The abstract syntax tree Jeff programs parse into.
//!
//! Two polymorphic families — [`Statement`] and [`Expression`] — form a
//! tree rooted at [`Program`]. Every node can render itself back to a
//! canonical source string via its `Display` impl; this is what the golden
//! parser tests compare against.
mod expression;
mod identifier;
mod program;
mod statement;

pub use expression::*;
pub use identifier::*;
pub use program::*;
pub use statement::*;
