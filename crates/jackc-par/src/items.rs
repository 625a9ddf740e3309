//! Class-level constructs: the class itself, variable declarations, and
//! subroutines.

use std::io::Write;

use jackc_lex::Keyword;
use jackc_sym::Kind;
use jackc_vm::Segment;

use crate::{CompilationEngine, CompileError, SubroutineKind};

impl<W: Write> CompilationEngine<W> {
    /// Compiles a complete class: `class <Name> { members }`.
    ///
    /// Consumes the whole token stream and writes the whole VM output
    /// before returning.
    pub fn compile_class(&mut self) -> Result<(), CompileError> {
        self.advance(); // class
        self.advance();
        self.class_name = self.raw().to_string();
        self.advance(); // {
        self.advance();

        while self.raw() != "}" {
            match self.tokens.keyword() {
                Keyword::Static | Keyword::Field => self.compile_class_var_dec(),
                Keyword::Constructor | Keyword::Function | Keyword::Method => {
                    self.compile_subroutine()?;
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// `(static|field) type name (, name)* ;`
    fn compile_class_var_dec(&mut self) {
        let kind = if self.tokens.keyword() == Keyword::Static {
            Kind::Static
        } else {
            Kind::Field
        };
        self.advance();
        let ty = self.raw().to_string();
        self.advance();
        let name = self.raw().to_string();
        self.table.define(&name, &ty, kind);
        self.advance();

        while self.raw() != ";" {
            self.advance(); // ,
            let name = self.raw().to_string();
            self.table.define(&name, &ty, kind);
            self.advance();
        }
        self.advance(); // ;
    }

    /// `(constructor|function|method) returnType name ( params ) { vars statements }`
    ///
    /// The `function` line is only written once the locals are counted, and
    /// the prologue that follows it depends on the subroutine flavor.
    fn compile_subroutine(&mut self) -> Result<(), CompileError> {
        self.table.start_subroutine();
        let kind = match self.tokens.keyword() {
            Keyword::Constructor => SubroutineKind::Constructor,
            Keyword::Method => SubroutineKind::Method,
            _ => SubroutineKind::Function,
        };
        self.subroutine_kind = Some(kind);

        self.advance(); // return type
        self.advance();
        let full_name = format!("{}.{}", self.class_name, self.raw());
        self.advance(); // (

        if self.subroutine_kind == Some(SubroutineKind::Method) {
            // the receiver occupies argument 0, ahead of declared parameters
            let class_name = self.class_name.clone();
            self.table.define("this", &class_name, Kind::Arg);
        }
        self.compile_parameter_list();
        self.advance(); // {

        while self.at_keyword(Keyword::Var) {
            self.compile_var_dec();
        }

        self.writer
            .write_function(&full_name, self.table.count_of(Kind::Var))?;

        match self.subroutine_kind {
            Some(SubroutineKind::Method) => {
                self.writer.write_push(Segment::Argument, 0)?;
                self.writer.write_pop(Segment::Pointer, 0)?;
            }
            Some(SubroutineKind::Constructor) => {
                self.writer
                    .write_push(Segment::Constant, self.table.count_of(Kind::Field))?;
                self.writer.write_call("Memory.alloc", 1)?;
                self.writer.write_pop(Segment::Pointer, 0)?;
            }
            _ => {}
        }

        self.compile_statements()?;
        self.advance(); // }
        Ok(())
    }

    /// `( (type name (, type name)*)? )`, defining each parameter as an arg.
    fn compile_parameter_list(&mut self) {
        self.advance(); // (
        while self.raw() != ")" {
            let ty = self.raw().to_string();
            self.advance();
            let name = self.raw().to_string();
            self.table.define(&name, &ty, Kind::Arg);
            self.advance();
            if self.raw() != ")" {
                self.advance(); // ,
            }
        }
        self.advance(); // )
    }

    /// `var type name (, name)* ;`
    fn compile_var_dec(&mut self) {
        self.advance(); // var
        let ty = self.raw().to_string();
        self.advance();
        let name = self.raw().to_string();
        self.table.define(&name, &ty, Kind::Var);
        self.advance();

        while self.raw() != ";" {
            self.advance(); // ,
            let name = self.raw().to_string();
            self.table.define(&name, &ty, Kind::Var);
            self.advance();
        }
        self.advance(); // ;
    }
}
