//! The instruction sink.

use std::io::{self, Write};

use crate::command::{Segment, VmCommand};

/// Appends VM assembly lines to an output sink, one instruction per call.
///
/// Writes are synchronous and unbuffered at this level; the order of lines
/// in the output is the order of the calls. I/O failures propagate
/// unchanged.
///
/// # Example
///
/// ```
/// use jackc_vm::{Segment, VmWriter};
///
/// let mut writer = VmWriter::new(Vec::new());
/// writer.write_push(Segment::Constant, 7).unwrap();
/// writer.write_return().unwrap();
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(text, "push constant 7\nreturn\n");
/// ```
#[derive(Debug)]
pub struct VmWriter<W: Write> {
    out: W,
}

impl<W: Write> VmWriter<W> {
    /// Wraps an output sink.
    pub fn new(out: W) -> VmWriter<W> {
        VmWriter { out }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// `push <segment> <index>`
    pub fn write_push(&mut self, segment: Segment, index: u16) -> io::Result<()> {
        writeln!(self.out, "push {} {}", segment, index)
    }

    /// `pop <segment> <index>`
    pub fn write_pop(&mut self, segment: Segment, index: u16) -> io::Result<()> {
        writeln!(self.out, "pop {} {}", segment, index)
    }

    /// A bare arithmetic or logical command.
    pub fn write_arithmetic(&mut self, command: VmCommand) -> io::Result<()> {
        writeln!(self.out, "{}", command)
    }

    /// `label <label>`
    pub fn write_label(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "label {}", label)
    }

    /// `goto <label>`
    pub fn write_goto(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "goto {}", label)
    }

    /// `if-goto <label>`
    pub fn write_if_goto(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "if-goto {}", label)
    }

    /// `call <name> <n_args>`
    pub fn write_call(&mut self, name: &str, n_args: u16) -> io::Result<()> {
        writeln!(self.out, "call {} {}", name, n_args)
    }

    /// `function <name> <n_locals>`
    pub fn write_function(&mut self, name: &str, n_locals: u16) -> io::Result<()> {
        writeln!(self.out, "function {} {}", name, n_locals)
    }

    /// `return`
    pub fn write_return(&mut self) -> io::Result<()> {
        writeln!(self.out, "return")
    }

    /// A `//` comment line. Downstream tooling skips these.
    pub fn write_comment(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "// {}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut VmWriter<Vec<u8>>)) -> String {
        let mut writer = VmWriter::new(Vec::new());
        f(&mut writer);
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_push_pop_lines() {
        let text = written(|w| {
            w.write_push(Segment::Argument, 1).unwrap();
            w.write_pop(Segment::Local, 0).unwrap();
        });
        assert_eq!(text, "push argument 1\npop local 0\n");
    }

    #[test]
    fn test_control_flow_lines() {
        let text = written(|w| {
            w.write_label("L1").unwrap();
            w.write_if_goto("L2").unwrap();
            w.write_goto("L1").unwrap();
        });
        assert_eq!(text, "label L1\nif-goto L2\ngoto L1\n");
    }

    #[test]
    fn test_call_function_return() {
        let text = written(|w| {
            w.write_function("Main.main", 2).unwrap();
            w.write_call("Math.multiply", 2).unwrap();
            w.write_return().unwrap();
        });
        assert_eq!(text, "function Main.main 2\ncall Math.multiply 2\nreturn\n");
    }

    #[test]
    fn test_comment_passthrough() {
        let text = written(|w| w.write_comment("let x").unwrap());
        assert_eq!(text, "// let x\n");
    }
}
