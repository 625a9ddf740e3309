//! Expression and term compilation, including subroutine calls.

use std::io::Write;

use jackc_lex::{Keyword, TokenKind};
use jackc_vm::{Segment, VmCommand};

use crate::{CompilationEngine, CompileError, OPS};

impl<W: Write> CompilationEngine<W> {
    /// `term (op term)*` with no precedence: operators apply strictly left
    /// to right, in token order.
    pub(crate) fn compile_expression(&mut self) -> Result<(), CompileError> {
        self.compile_term()?;
        while OPS.contains(&self.raw()) {
            let op = self.tokens.symbol();
            self.advance();
            self.compile_term()?;
            match op {
                "*" => self.writer.write_call("Math.multiply", 2)?,
                "/" => self.writer.write_call("Math.divide", 2)?,
                _ => {
                    let command = self.ops[op];
                    self.writer.write_arithmetic(command)?;
                }
            }
        }
        Ok(())
    }

    /// Compiles one term, dispatching on the current token's kind.
    pub(crate) fn compile_term(&mut self) -> Result<(), CompileError> {
        match self.tokens.token_kind() {
            TokenKind::IntConst => {
                let value = self.tokens.int_val();
                self.writer.write_push(Segment::Constant, value)?;
                self.advance();
            }
            TokenKind::StringConst => self.compile_string_constant()?,
            TokenKind::Keyword => self.compile_keyword_constant()?,
            TokenKind::Symbol => self.compile_symbol_term()?,
            TokenKind::Identifier => self.compile_identifier_term()?,
        }
        Ok(())
    }

    /// A string literal builds a `String` object at runtime: one `new` for
    /// the length, then one `appendChar` per 8-bit code point. The object
    /// is left on the stack.
    fn compile_string_constant(&mut self) -> Result<(), CompileError> {
        let value = self.tokens.string_val().to_string();
        self.writer
            .write_push(Segment::Constant, value.len() as u16)?;
        self.writer.write_call("String.new", 1)?;
        for byte in value.bytes() {
            self.writer.write_push(Segment::Constant, u16::from(byte))?;
            self.writer.write_call("String.appendChar", 2)?;
        }
        self.advance();
        Ok(())
    }

    /// `true`, `false`, `null`, `this`. True is all ones, so it is built by
    /// negating 1 rather than pushed directly.
    fn compile_keyword_constant(&mut self) -> Result<(), CompileError> {
        match self.tokens.keyword() {
            Keyword::True => {
                self.writer.write_push(Segment::Constant, 1)?;
                self.writer.write_arithmetic(VmCommand::Neg)?;
            }
            Keyword::False | Keyword::Null => {
                self.writer.write_push(Segment::Constant, 0)?;
            }
            Keyword::This => {
                self.writer.write_push(Segment::Pointer, 0)?;
            }
            _ => {}
        }
        self.advance();
        Ok(())
    }

    /// A parenthesized expression or a unary operator applied to a term.
    fn compile_symbol_term(&mut self) -> Result<(), CompileError> {
        match self.raw().chars().next().unwrap_or('\0') {
            '(' => {
                self.advance(); // (
                self.compile_expression()?;
                self.advance(); // )
            }
            '-' => {
                self.advance();
                self.compile_term()?;
                self.writer.write_arithmetic(VmCommand::Neg)?;
            }
            '~' => {
                self.advance();
                self.compile_term()?;
                self.writer.write_arithmetic(VmCommand::Not)?;
            }
            '#' => {
                self.advance();
                self.compile_term()?;
                self.writer.write_arithmetic(VmCommand::ShiftRight)?;
            }
            '^' => {
                self.advance();
                self.compile_term()?;
                self.writer.write_arithmetic(VmCommand::ShiftLeft)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// An identifier begins a scalar read, an array read, or a subroutine
    /// call; one token of lookahead decides which.
    fn compile_identifier_term(&mut self) -> Result<(), CompileError> {
        let name = self.tokens.identifier().to_string();
        self.advance();
        match self.raw().chars().next().unwrap_or('\0') {
            '(' | '.' => self.compile_subroutine_call(&name)?,
            '[' => self.compile_array_read(&name)?,
            _ => self.push_variable(&name)?,
        }
        Ok(())
    }

    /// `name[index]` leaves the element value on the stack.
    fn compile_array_read(&mut self, name: &str) -> Result<(), CompileError> {
        self.advance(); // [
        self.compile_expression()?;
        self.advance(); // ]
        self.push_variable(name)?;
        self.writer.write_arithmetic(VmCommand::Add)?;
        self.writer.write_pop(Segment::Pointer, 1)?;
        self.writer.write_push(Segment::That, 0)?;
        Ok(())
    }

    /// A subroutine call term. `first` is the identifier before the `(` or
    /// `.` the cursor rests on.
    ///
    /// Three shapes:
    /// - `f(...)`: a method on the current object; `pointer 0` is the
    ///   implicit receiver;
    /// - `var.m(...)` where `var` is a known variable: a method on that
    ///   object; its value is pushed as the implicit first argument and the
    ///   callee class comes from the variable's declared type;
    /// - `Class.f(...)` otherwise: a plain function call, no receiver.
    fn compile_subroutine_call(&mut self, first: &str) -> Result<(), CompileError> {
        let mut n_args: u16 = 0;
        let callee = if self.raw() == "(" {
            n_args += 1;
            self.writer.write_push(Segment::Pointer, 0)?;
            format!("{}.{}", self.class_name, first)
        } else {
            self.advance(); // .
            let second = self.tokens.identifier().to_string();
            let callee = match self.table.kind_of(first) {
                None => format!("{}.{}", first, second),
                Some(kind) => {
                    let index = self.table.index_of(first)?;
                    self.writer.write_push(Self::segment_of(kind), index)?;
                    n_args += 1;
                    format!("{}.{}", self.table.type_of(first)?, second)
                }
            };
            self.advance(); // onto (
            callee
        };
        self.advance(); // (
        n_args += self.compile_expression_list()?;
        self.advance(); // )
        self.writer.write_call(&callee, n_args)?;
        Ok(())
    }

    /// `( (expr (, expr)*)? )` without the parens; returns how many
    /// expressions were compiled.
    fn compile_expression_list(&mut self) -> Result<u16, CompileError> {
        let mut count = 0;
        if self.raw() != ")" {
            count += 1;
            self.compile_expression()?;
        }
        while self.raw() == "," {
            self.advance();
            self.compile_expression()?;
            count += 1;
        }
        Ok(count)
    }
}
