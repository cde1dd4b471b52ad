//! AST pretty-printer
//!
//! The first concrete [`Visitor`]: dumps a tree as one indented line per
//! node. Used by tests to pin traversal order and available to tools that
//! want a readable view of a parse result.

use super::node::{
    Allocation, AllocationStatement, Body, End, InitializationStatement, Location, Memory, Pointer,
    Program, ProgramInit, Range, Start, Value, Variable, VariableDeclaration,
};
use super::types::{PrimitiveType, UserDefinedType};
use super::visitor::{AstNode, Visitor};

/// Indented tree-dump visitor.
#[derive(Debug, Default)]
pub struct AstPrinter {
    output: String,
    depth: usize,
}

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter::default()
    }

    /// Render a single tree rooted at `node`.
    pub fn print(node: &dyn AstNode) -> String {
        let mut printer = AstPrinter::new();
        node.accept(&mut printer);
        printer.finish()
    }

    /// The accumulated dump.
    pub fn finish(self) -> String {
        self.output
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str("  ");
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }
}

impl Visitor for AstPrinter {
    fn visit_start(&mut self, node: &Start) {
        self.line(&format!("Start line={} column={}", node.line, node.column));
    }

    fn visit_end(&mut self, node: &End) {
        self.line(&format!("End line={} column={}", node.line, node.column));
    }

    fn visit_location(&mut self, node: &Location) {
        self.line("Location");
        self.nested(|p| {
            node.start.accept(p);
            node.end.accept(p);
        });
    }

    fn visit_range(&mut self, node: &Range) {
        self.line(&format!(
            "Range offsets={}..{}",
            node.offset_start, node.offset_end
        ));
    }

    fn visit_program_init(&mut self, node: &ProgramInit) {
        self.line(&format!("ProgramInit package={}", node.package_name));
    }

    fn visit_body(&mut self, node: &Body) {
        self.line("Body");
        self.nested(|p| {
            node.program_init.accept(p);
            for expression in &node.expressions {
                expression.accept(p);
            }
        });
    }

    fn visit_program(&mut self, node: &Program) {
        self.line("Program");
        self.nested(|p| {
            node.body.accept(p);
            node.location.accept(p);
            node.range.accept(p);
        });
    }

    fn visit_allocation_statement(&mut self, node: &AllocationStatement) {
        self.line("AllocationStatement");
        self.nested(|p| {
            node.location.accept(p);
            node.allocation.accept(p);
            if let Some(initialization) = &node.initialization {
                initialization.accept(p);
            }
        });
    }

    fn visit_variable_declaration(&mut self, node: &VariableDeclaration) {
        self.line("VariableDeclaration");
        self.nested(|p| {
            node.location.accept(p);
            node.assignment.accept(p);
        });
    }

    fn visit_initialization_statement(&mut self, node: &InitializationStatement) {
        self.line("InitializationStatement");
        self.nested(|p| {
            node.location.accept(p);
            node.pointer.accept(p);
        });
    }

    fn visit_primitive_type(&mut self, node: &PrimitiveType) {
        self.line(&format!("PrimitiveType {}", node.name));
    }

    fn visit_user_defined_type(&mut self, node: &UserDefinedType) {
        self.line(&format!("UserDefinedType {}", node.name));
    }

    fn visit_allocation(&mut self, node: &Allocation) {
        self.line("Allocation");
        self.nested(|p| {
            node.location.accept(p);
            node.pointer.accept(p);
        });
    }

    fn visit_pointer(&mut self, node: &Pointer) {
        self.line("Pointer");
        self.nested(|p| {
            node.location.accept(p);
            node.ty.accept(p);
            node.memory.accept(p);
            node.variable.accept(p);
        });
    }

    fn visit_memory(&mut self, node: &Memory) {
        self.line(&format!("Memory size={}", node.request.size));
        self.nested(|p| {
            if let Some(location) = &node.location {
                location.accept(p);
            }
        });
    }

    fn visit_variable(&mut self, node: &Variable) {
        self.line(&format!("Variable {}", node.name));
        self.nested(|p| {
            node.location.accept(p);
            if let Some(value) = &node.value {
                value.accept(p);
            }
        });
    }

    fn visit_value(&mut self, node: &Value) {
        self.line(&format!(
            "Value {} : {}",
            node.literal,
            node.ty.type_name()
        ));
        self.nested(|p| {
            node.location.accept(p);
        });
    }
}
