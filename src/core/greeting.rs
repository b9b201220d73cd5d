//! Greeting emitter
//!
//! Writes the fixed greeting line to standard output. Every entry point in
//! this module behaves identically.

use std::io::{self, Write};

/// The only value this program ever prints.
pub const GREETING: &str = "Hello, world!";

/// An entry point that emits the greeting into a sink.
pub type EntryPoint = fn(&mut dyn Write) -> io::Result<()>;

/// All equivalent entry points, in declaration order.
#[allow(dead_code)]
pub const ENTRY_POINTS: [(&str, EntryPoint); 3] = [
    ("standalone", standalone),
    ("instance_scoped", instance_scoped),
    ("type_scoped", type_scoped),
];

/// Write the greeting line to an arbitrary sink
pub fn emit_to<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", GREETING)
}

/// Write the greeting line to stdout and flush it
pub fn emit() -> io::Result<()> {
    emit_via(standalone)
}

/// Run `entry` against locked stdout, then flush
pub fn emit_via(entry: EntryPoint) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    entry(&mut handle)?;
    handle.flush()
}

/// Standalone function form.
pub fn standalone(out: &mut dyn Write) -> io::Result<()> {
    emit_to(out)
}

/// Instance-scoped form. There is no instance state, so this is `emit_to`.
pub fn instance_scoped(out: &mut dyn Write) -> io::Result<()> {
    emit_to(out)
}

/// Type-scoped form.
pub fn type_scoped(out: &mut dyn Write) -> io::Result<()> {
    emit_to(out)
}
