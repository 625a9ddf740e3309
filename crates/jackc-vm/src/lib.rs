//! jackc-vm - Stack VM Instruction Emitter
//!
//! The last stage of the pipeline is a thin sink: it turns typed segment and
//! command values into the textual VM instruction set, one line per
//! instruction, in emission order. Nothing here is validated; callers are
//! responsible for emitting a well-formed program.

mod command;
mod writer;

pub use command::{Segment, VmCommand};
pub use writer::VmWriter;
