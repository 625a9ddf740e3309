//! jackc-sym - Symbol Table
//!
//! Name resolution for the Jack compiler uses exactly two flat scopes: one
//! for the class being compiled (`static` and `field` variables) and one for
//! the subroutine currently being compiled (`arg` and `var` variables). The
//! subroutine scope shadows the class scope on lookup and is thrown away
//! when the next subroutine starts; the class scope lives for the whole
//! class compilation.
//!
//! Indices are dense per kind and assigned in declaration order, which is
//! why the scopes are insertion-ordered maps: the index of a name is the
//! number of same-kind names declared before it, and the per-kind counters
//! double as frame sizes (locals for `function` lines, fields for
//! constructor allocation).

mod table;

pub use table::{Kind, SymbolEntry, SymbolError, SymbolTable};
