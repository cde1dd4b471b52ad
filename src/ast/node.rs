//! AST node definitions
//!
//! Nodes are grouped the way the language manual presents them: source
//! locations, program structure, expressions, memory/pointer constructs,
//! and values. Construction is bottom-up (children first), and every
//! composite owns its children by value — see the module docs for the one
//! shared edge.

use std::rc::Rc;

use super::types::TypeNode;
use crate::memory::AllocationRequest;

/* Location nodes */

/// First character of a source region, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Start {
    pub line: usize,
    pub column: usize,
}

impl Start {
    pub fn new(line: usize, column: usize) -> Self {
        Start { line, column }
    }
}

/// Last boundary of a source region, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct End {
    pub line: usize,
    pub column: usize,
}

impl End {
    pub fn new(line: usize, column: usize) -> Self {
        End { line, column }
    }
}

/// A start/end pair delimiting a source region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub start: Start,
    pub end: End,
}

impl Location {
    pub fn new(start: Start, end: End) -> Self {
        Location { start, end }
    }
}

/// Byte offsets into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub offset_start: usize,
    pub offset_end: usize,
}

impl Range {
    pub fn new(offset_start: usize, offset_end: usize) -> Self {
        Range {
            offset_start,
            offset_end,
        }
    }
}

/* Program structure */

/// The `:package` header naming the program.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramInit {
    pub package_name: String,
}

impl ProgramInit {
    pub fn new(package_name: impl Into<String>) -> Self {
        ProgramInit {
            package_name: package_name.into(),
        }
    }
}

/// The program body: its initialization header and top-level expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub program_init: ProgramInit,
    pub expressions: Vec<Expression>,
}

impl Body {
    pub fn new(program_init: ProgramInit, expressions: Vec<Expression>) -> Self {
        Body {
            program_init,
            expressions,
        }
    }
}

/// Root of a parsed program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Body,
    pub location: Location,
    pub range: Range,
}

impl Program {
    pub fn new(body: Body, location: Location, range: Range) -> Self {
        Program {
            body,
            location,
            range,
        }
    }
}

/* Expressions */

/// A top-level expression. Closed set; traversals match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Allocation(AllocationStatement),
    VariableDeclaration(VariableDeclaration),
}

/// An allocation statement: `int! var = allot(int)->42;`
///
/// `initialization` is absent when the statement carries no `->`
/// initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationStatement {
    pub location: Location,
    pub allocation: Allocation,
    pub initialization: Option<InitializationStatement>,
}

impl AllocationStatement {
    pub fn new(
        location: Location,
        allocation: Allocation,
        initialization: Option<InitializationStatement>,
    ) -> Self {
        AllocationStatement {
            location,
            allocation,
            initialization,
        }
    }
}

/// A plain variable declaration with its assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub location: Location,
    pub assignment: Variable,
}

impl VariableDeclaration {
    pub fn new(location: Location, assignment: Variable) -> Self {
        VariableDeclaration {
            location,
            assignment,
        }
    }
}

/// The `->` initializer attached to an allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct InitializationStatement {
    pub location: Location,
    pub pointer: Pointer,
}

impl InitializationStatement {
    pub fn new(location: Location, pointer: Pointer) -> Self {
        InitializationStatement { location, pointer }
    }
}

/* Memory and pointer nodes */

/// The `allot(…)` construct itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub location: Location,
    pub pointer: Pointer,
}

impl Allocation {
    pub fn new(location: Location, pointer: Pointer) -> Self {
        Allocation { location, pointer }
    }
}

/// A requested allocation, as the AST describes it.
///
/// This is the compile-time descriptor only. The runtime acquisition of the
/// bytes is [`crate::memory::Allocator`]'s job; the node never holds live
/// memory. `location` may be absent for synthesized nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Memory {
    pub location: Option<Location>,
    pub request: AllocationRequest,
}

impl Memory {
    pub fn new(location: Option<Location>, request: AllocationRequest) -> Self {
        Memory { location, request }
    }
}

/// A declared pointer: its type, the memory it refers to, and the variable
/// bound to it.
///
/// `ty` is the one shared edge in the tree: it may be the same node as the
/// type inside `variable`'s value, so it is held through [`Rc`]. Everything
/// else is owned outright.
#[derive(Debug, Clone, PartialEq)]
pub struct Pointer {
    pub location: Location,
    pub ty: Rc<TypeNode>,
    pub memory: Memory,
    pub variable: Variable,
}

impl Pointer {
    pub fn new(location: Location, ty: Rc<TypeNode>, memory: Memory, variable: Variable) -> Self {
        Pointer {
            location,
            ty,
            memory,
            variable,
        }
    }
}

/* Value nodes */

/// A named variable, optionally carrying its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub location: Location,
    pub value: Option<Box<Value>>,
}

impl Variable {
    pub fn new(name: impl Into<String>, location: Location, value: Option<Box<Value>>) -> Self {
        Variable {
            name: name.into(),
            location,
            value,
        }
    }
}

/// A literal value with its type.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub literal: String,
    pub location: Location,
    pub ty: Rc<TypeNode>,
}

impl Value {
    pub fn new(literal: impl Into<String>, location: Location, ty: Rc<TypeNode>) -> Self {
        Value {
            literal: literal.into(),
            location,
            ty,
        }
    }
}
