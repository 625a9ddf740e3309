//! The two-scope symbol table.

use indexmap::IndexMap;
use thiserror::Error;

/// Storage class of a variable.
///
/// `Static` and `Field` belong to class scope; `Arg` and `Var` to
/// subroutine scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Static,
    Field,
    Arg,
    Var,
}

impl Kind {
    /// Slot in the per-kind counter array.
    fn slot(self) -> usize {
        match self {
            Kind::Static => 0,
            Kind::Field => 1,
            Kind::Arg => 2,
            Kind::Var => 3,
        }
    }

    fn is_class_scope(self) -> bool {
        matches!(self, Kind::Static | Kind::Field)
    }
}

/// Errors surfaced by symbol lookups.
#[derive(Debug, Error)]
pub enum SymbolError {
    /// A lookup that requires a definition found none in either scope.
    #[error("unknown symbol {name}")]
    UnknownSymbol { name: String },
}

/// A declared variable: its kind, declared type, and per-kind index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolEntry {
    pub kind: Kind,
    /// A primitive type keyword (`int`, `char`, `boolean`) or a class name.
    pub ty: String,
    pub index: u16,
}

/// Two-scope mapping from identifier names to [`SymbolEntry`] triples.
///
/// # Example
///
/// ```
/// use jackc_sym::{Kind, SymbolTable};
///
/// let mut table = SymbolTable::new();
/// table.define("size", "int", Kind::Field);
/// table.define("s", "Square", Kind::Var);
/// assert_eq!(table.kind_of("s"), Some(Kind::Var));
/// assert_eq!(table.count_of(Kind::Field), 1);
/// ```
#[derive(Debug, Default)]
pub struct SymbolTable {
    class_scope: IndexMap<String, SymbolEntry>,
    subroutine_scope: IndexMap<String, SymbolEntry>,
    counters: [u16; 4],
}

impl SymbolTable {
    /// Creates an empty table with all counters at zero.
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    /// Starts a new subroutine scope.
    ///
    /// Clears the subroutine scope and resets the `arg` and `var` counters;
    /// class scope and its counters are untouched.
    pub fn start_subroutine(&mut self) {
        self.subroutine_scope.clear();
        self.counters[Kind::Arg.slot()] = 0;
        self.counters[Kind::Var.slot()] = 0;
    }

    /// Defines `name` with the next index of `kind`, then bumps that
    /// counter. The kind selects the scope the entry lands in.
    pub fn define(&mut self, name: &str, ty: &str, kind: Kind) {
        let entry = SymbolEntry {
            kind,
            ty: ty.to_string(),
            index: self.counters[kind.slot()],
        };
        if kind.is_class_scope() {
            self.class_scope.insert(name.to_string(), entry);
        } else {
            self.subroutine_scope.insert(name.to_string(), entry);
        }
        self.counters[kind.slot()] += 1;
    }

    /// Subroutine scope first, then class scope.
    fn lookup(&self, name: &str) -> Option<&SymbolEntry> {
        self.subroutine_scope
            .get(name)
            .or_else(|| self.class_scope.get(name))
    }

    /// The kind of `name`, or `None` when it is defined in neither scope.
    ///
    /// The `None` case is meaningful to callers: in a dotted subroutine
    /// call it tells a class name apart from a receiver variable.
    pub fn kind_of(&self, name: &str) -> Option<Kind> {
        self.lookup(name).map(|entry| entry.kind)
    }

    /// The declared type of `name`.
    pub fn type_of(&self, name: &str) -> Result<&str, SymbolError> {
        self.lookup(name)
            .map(|entry| entry.ty.as_str())
            .ok_or_else(|| SymbolError::UnknownSymbol {
                name: name.to_string(),
            })
    }

    /// The per-kind index of `name`.
    pub fn index_of(&self, name: &str) -> Result<u16, SymbolError> {
        self.lookup(name)
            .map(|entry| entry.index)
            .ok_or_else(|| SymbolError::UnknownSymbol {
                name: name.to_string(),
            })
    }

    /// Number of definitions of `kind` seen so far.
    pub fn count_of(&self, kind: Kind) -> u16 {
        self.counters[kind.slot()]
    }
}
