//! AST node model and traversal protocol
//!
//! The node hierarchy is closed: every variant is a concrete struct here,
//! and the polymorphic seams ([`Expression`], [`TypeNode`]) are exhaustive
//! enums. Composite nodes own their children outright, so dropping a root
//! releases the whole tree exactly once. The single sanctioned exception is
//! the pointer type edge: a [`Pointer`]'s type and the type inside its
//! variable's value chain may be the same node, shared through
//! [`std::rc::Rc`] on that edge only.
//!
//! Traversal is double dispatch: nodes expose [`AstNode::accept`], passes
//! implement [`Visitor`] with one method per variant. Adding a variant
//! without updating every visitor fails to compile.
//!
//! - [`node`]: location, program structure, expression, memory/pointer and
//!   value nodes
//! - [`types`]: the type node pair and its primitive/user-defined split
//! - [`visitor`]: the traversal contract
//! - [`printer`]: the first pass, an indented tree dump

pub mod node;
pub mod printer;
pub mod types;
pub mod visitor;

pub use node::{
    Allocation, AllocationStatement, Body, End, Expression, InitializationStatement, Location,
    Memory, Pointer, Program, ProgramInit, Range, Start, Value, Variable, VariableDeclaration,
};
pub use printer::AstPrinter;
pub use types::{PrimitiveType, TypeNode, UserDefinedType};
pub use visitor::{AstNode, Visitor};
