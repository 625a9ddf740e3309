//! Statement compilation: `let`, `if`, `while`, `do`, `return`.

use std::io::Write;

use jackc_lex::{Keyword, TokenKind};
use jackc_sym::SymbolError;
use jackc_vm::{Segment, VmCommand};

use crate::{CompilationEngine, CompileError};

impl<W: Write> CompilationEngine<W> {
    /// Compiles statements up to the enclosing `}`.
    ///
    /// Each statement is preceded by a `// <keyword> <next>` comment line in
    /// the output, a debugging breadcrumb downstream tooling skips.
    pub(crate) fn compile_statements(&mut self) -> Result<(), CompileError> {
        loop {
            if self.raw() == "}" {
                return Ok(());
            }
            if self.tokens.token_kind() != TokenKind::Keyword {
                return Ok(());
            }
            let note = format!("{} {}", self.raw(), self.tokens.peek());
            self.writer.write_comment(&note)?;
            match self.tokens.keyword() {
                Keyword::Let => self.compile_let()?,
                Keyword::If => self.compile_if()?,
                Keyword::While => self.compile_while()?,
                Keyword::Do => self.compile_do()?,
                Keyword::Return => self.compile_return()?,
                _ => return Ok(()),
            }
        }
    }

    /// `let name ([index])? = expr ;`
    fn compile_let(&mut self) -> Result<(), CompileError> {
        self.advance(); // let
        let name = self.raw().to_string();
        self.advance();

        let kind = self
            .table
            .kind_of(&name)
            .ok_or_else(|| SymbolError::UnknownSymbol { name: name.clone() })?;
        let index = self.table.index_of(&name)?;
        let segment = Self::segment_of(kind);

        if self.raw() == "[" {
            self.advance(); // [
            self.compile_expression()?;
            self.writer.write_push(segment, index)?;
            self.writer.write_arithmetic(VmCommand::Add)?;
            self.advance(); // ]
            self.advance(); // =
            self.compile_expression()?;
            // park the value so base+index survives on top for pointer 1
            self.writer.write_pop(Segment::Temp, 0)?;
            self.writer.write_pop(Segment::Pointer, 1)?;
            self.writer.write_push(Segment::Temp, 0)?;
            self.writer.write_pop(Segment::That, 0)?;
        } else {
            self.advance(); // =
            self.compile_expression()?;
            self.writer.write_pop(segment, index)?;
        }
        self.advance(); // ;
        Ok(())
    }

    /// `if ( cond ) { then } (else { else })?`
    ///
    /// Translated with the two-goto pattern: jump to the true label on a
    /// truthy condition, fall through to an unconditional jump past the
    /// then-block otherwise. The condition itself is never negated.
    fn compile_if(&mut self) -> Result<(), CompileError> {
        self.advance(); // if
        self.compile_expression()?; // the parenthesized condition is one term

        let k = self.fresh_label();
        let label_true = format!("TrueIf{}", k);
        let label_false = format!("FalseIf{}", k);
        let label_end = format!("EndIf{}", k);

        self.writer.write_if_goto(&label_true)?;
        self.writer.write_goto(&label_false)?;
        self.writer.write_label(&label_true)?;

        self.advance(); // {
        self.compile_statements()?;
        self.writer.write_goto(&label_end)?;

        // decide the optional else branch while still on the closing brace
        let has_else = self.tokens.peek() == "else";
        self.advance(); // past }, tolerated when nothing follows
        self.writer.write_label(&label_false)?;
        if has_else {
            self.advance(); // {
            self.advance();
            self.compile_statements()?;
            self.advance(); // past }
        }
        self.writer.write_label(&label_end)?;
        Ok(())
    }

    /// `while ( cond ) { body }`
    fn compile_while(&mut self) -> Result<(), CompileError> {
        // both labels are taken before the body compiles, so a nested loop
        // can never reuse them
        let label_top = format!("L{}", self.fresh_label());
        let label_end = format!("L{}", self.fresh_label());

        self.writer.write_label(&label_top)?;
        self.advance(); // while
        self.compile_expression()?;
        self.writer.write_arithmetic(VmCommand::Not)?;
        self.writer.write_if_goto(&label_end)?;

        self.advance(); // {
        self.compile_statements()?;
        self.writer.write_goto(&label_top)?;
        self.writer.write_label(&label_end)?;
        self.advance(); // }
        Ok(())
    }

    /// `do call ;`. The call's result is discarded.
    fn compile_do(&mut self) -> Result<(), CompileError> {
        self.advance(); // do
        self.compile_expression()?;
        self.writer.write_pop(Segment::Temp, 0)?;
        self.advance(); // ;
        Ok(())
    }

    /// `return expr? ;`. A bare return pushes 0 for the caller to discard.
    fn compile_return(&mut self) -> Result<(), CompileError> {
        self.advance(); // return
        if self.raw() == ";" {
            self.writer.write_push(Segment::Constant, 0)?;
        } else {
            self.compile_expression()?;
        }
        self.writer.write_return()?;
        self.advance(); // ;
        Ok(())
    }
}
