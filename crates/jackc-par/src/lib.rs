//! jackc-par - Compilation Engine
//!
//! ============================================================================
//! ONE-PASS TRANSLATION
//! ============================================================================
//!
//! The engine is a recursive-descent translator over the token stream. There
//! is no AST: VM instructions are emitted while the grammar is walked, which
//! is enough because the target VM is itself evaluated in source order.
//!
//! ```text
//! TokenStream ──▶ [CompilationEngine] ──▶ VmWriter
//!                        │
//!                        ▼
//!                   SymbolTable
//! ```
//!
//! The engine drives the tokenizer forward with one-token lookahead, declares
//! and resolves names through the symbol table, and owns the three pieces of
//! per-class state: the class name, the current subroutine flavor, and the
//! label counter.
//!
//! TRUSTED INPUT:
//! --------------
//! The engine assumes a syntactically valid program. There is no recovery
//! and no resynchronization; malformed source may produce wrong output or
//! stop at an accessor precondition. Two failures are surfaced as errors
//! rather than bugs: references to undefined names, and write failures on
//! the output sink.
//!
//! CALLING CONVENTION:
//! -------------------
//! - a `method` receives its object as `argument 0` and binds `pointer 0`
//!   from it in the prologue; call sites push the receiver first;
//! - a `constructor` allocates `count(field)` words through `Memory.alloc`
//!   and binds `pointer 0` to the fresh block;
//! - a `function` has no receiver and no prologue.

use std::io::Write;

use jackc_lex::{Keyword, TokenKind, TokenStream};
use jackc_sym::{Kind, SymbolError, SymbolTable};
use jackc_vm::{Segment, VmCommand, VmWriter};
use rustc_hash::FxHashMap;
use thiserror::Error;

mod expr;
mod items;
mod stmt;

/// Errors surfaced while compiling a class.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The compiled source referenced a name with no definition.
    #[error(transparent)]
    Symbol(#[from] SymbolError),

    /// The output sink failed; propagated unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The three subroutine flavors of the source language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SubroutineKind {
    Constructor,
    Function,
    Method,
}

/// Binary operators, tested on the raw lexeme to decide whether an
/// expression continues.
const OPS: [&str; 9] = ["+", "-", "*", "/", "&", "|", "<", ">", "="];

/// Grammar-directed code generator for one class.
///
/// # Example
///
/// ```
/// use jackc_lex::TokenStream;
/// use jackc_par::CompilationEngine;
///
/// let source = "class C { function void f() { return; } }";
/// let mut engine = CompilationEngine::new(TokenStream::new(source), Vec::new());
/// engine.compile_class().unwrap();
/// let vm = String::from_utf8(engine.into_output()).unwrap();
/// assert!(vm.contains("function C.f 0"));
/// ```
pub struct CompilationEngine<W: Write> {
    tokens: TokenStream,
    table: SymbolTable,
    writer: VmWriter<W>,
    /// Binary operator table, keyed on the encoded form `symbol()` returns.
    /// `*` and `/` are absent: they lower to runtime calls instead.
    ops: FxHashMap<&'static str, VmCommand>,
    class_name: String,
    subroutine_kind: Option<SubroutineKind>,
    /// Monotonic within one class compilation; never rewinds, so labels
    /// taken by nested constructs cannot collide.
    label_counter: u32,
}

impl<W: Write> CompilationEngine<W> {
    /// Creates an engine over `tokens`, writing VM code to `out`. The next
    /// call must be [`CompilationEngine::compile_class`].
    pub fn new(tokens: TokenStream, out: W) -> CompilationEngine<W> {
        let mut ops = FxHashMap::default();
        ops.insert("+", VmCommand::Add);
        ops.insert("-", VmCommand::Sub);
        ops.insert("&amp;", VmCommand::And);
        ops.insert("|", VmCommand::Or);
        ops.insert("&lt;", VmCommand::Lt);
        ops.insert("&gt;", VmCommand::Gt);
        ops.insert("=", VmCommand::Eq);
        CompilationEngine {
            tokens,
            table: SymbolTable::new(),
            writer: VmWriter::new(out),
            ops,
            class_name: String::new(),
            subroutine_kind: None,
            label_counter: 0,
        }
    }

    /// Returns the output sink.
    pub fn into_output(self) -> W {
        self.writer.into_inner()
    }

    /// The VM segment backing a symbol kind.
    fn segment_of(kind: Kind) -> Segment {
        match kind {
            Kind::Static => Segment::Static,
            Kind::Field => Segment::This,
            Kind::Arg => Segment::Argument,
            Kind::Var => Segment::Local,
        }
    }

    /// Takes the next value of the label counter.
    fn fresh_label(&mut self) -> u32 {
        self.label_counter += 1;
        self.label_counter
    }

    fn raw(&self) -> &str {
        self.tokens.raw()
    }

    fn advance(&mut self) {
        self.tokens.advance();
    }

    /// Whether the current token is the keyword `keyword`.
    fn at_keyword(&self, keyword: Keyword) -> bool {
        self.tokens.token_kind() == TokenKind::Keyword && self.tokens.keyword() == keyword
    }

    /// Pushes the value of the named variable.
    fn push_variable(&mut self, name: &str) -> Result<(), CompileError> {
        let kind = self
            .table
            .kind_of(name)
            .ok_or_else(|| SymbolError::UnknownSymbol {
                name: name.to_string(),
            })?;
        let index = self.table.index_of(name)?;
        self.writer.write_push(Self::segment_of(kind), index)?;
        Ok(())
    }
}
