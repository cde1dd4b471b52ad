//! Visitor protocol
//!
//! Double dispatch over the closed node set: a pass implements [`Visitor`]
//! with one method per variant, and entry is through [`AstNode::accept`] on
//! any node. Visitors decide themselves whether to recurse into children
//! (by calling `accept` on them), so shallow and deep traversals use the
//! same contract.
//!
//! Every method is required. Adding a node variant therefore breaks every
//! existing visitor at compile time, which is the point: traversals must
//! handle the whole hierarchy or not compile at all.

use super::node::{
    Allocation, AllocationStatement, Body, End, Expression, InitializationStatement, Location,
    Memory, Pointer, Program, ProgramInit, Range, Start, Value, Variable, VariableDeclaration,
};
use super::types::{PrimitiveType, TypeNode, UserDefinedType};

/// One method per node variant; no defaults.
pub trait Visitor {
    // Location
    fn visit_start(&mut self, node: &Start);
    fn visit_end(&mut self, node: &End);
    fn visit_location(&mut self, node: &Location);
    fn visit_range(&mut self, node: &Range);

    // Program structure
    fn visit_program_init(&mut self, node: &ProgramInit);
    fn visit_body(&mut self, node: &Body);
    fn visit_program(&mut self, node: &Program);

    // Expressions
    fn visit_allocation_statement(&mut self, node: &AllocationStatement);
    fn visit_variable_declaration(&mut self, node: &VariableDeclaration);

    // Initialization
    fn visit_initialization_statement(&mut self, node: &InitializationStatement);

    // Types
    fn visit_primitive_type(&mut self, node: &PrimitiveType);
    fn visit_user_defined_type(&mut self, node: &UserDefinedType);

    // Memory
    fn visit_allocation(&mut self, node: &Allocation);
    fn visit_pointer(&mut self, node: &Pointer);
    fn visit_memory(&mut self, node: &Memory);

    // Values
    fn visit_variable(&mut self, node: &Variable);
    fn visit_value(&mut self, node: &Value);
}

/// The double-dispatch entry point every node variant implements.
pub trait AstNode {
    fn accept(&self, visitor: &mut dyn Visitor);
}

impl AstNode for Start {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_start(self);
    }
}

impl AstNode for End {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_end(self);
    }
}

impl AstNode for Location {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_location(self);
    }
}

impl AstNode for Range {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_range(self);
    }
}

impl AstNode for ProgramInit {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_program_init(self);
    }
}

impl AstNode for Body {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_body(self);
    }
}

impl AstNode for Program {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_program(self);
    }
}

impl AstNode for AllocationStatement {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_allocation_statement(self);
    }
}

impl AstNode for VariableDeclaration {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_variable_declaration(self);
    }
}

impl AstNode for InitializationStatement {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_initialization_statement(self);
    }
}

impl AstNode for PrimitiveType {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_primitive_type(self);
    }
}

impl AstNode for UserDefinedType {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_user_defined_type(self);
    }
}

impl AstNode for Allocation {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_allocation(self);
    }
}

impl AstNode for Pointer {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_pointer(self);
    }
}

impl AstNode for Memory {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_memory(self);
    }
}

impl AstNode for Variable {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_variable(self);
    }
}

impl AstNode for Value {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_value(self);
    }
}

// The closed enums dispatch on their variant. An exhaustive match keeps the
// compile-time guarantee when a variant is added.

impl AstNode for Expression {
    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Expression::Allocation(node) => visitor.visit_allocation_statement(node),
            Expression::VariableDeclaration(node) => visitor.visit_variable_declaration(node),
        }
    }
}

impl AstNode for TypeNode {
    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            TypeNode::Primitive(node) => visitor.visit_primitive_type(node),
            TypeNode::UserDefined(node) => visitor.visit_user_defined_type(node),
        }
    }
}
