//! Output Emitter
//!
//! Abstraction for output production during reconstruction.

/// Sink for formatted output.
pub trait Emitter {
    /// Emit a text fragment verbatim.
    fn emit(&mut self, text: &str);

    /// Emit `count` newlines (Unix-style `\n`).
    fn emit_newlines(&mut self, count: usize);

    /// Emit `count` spaces.
    fn emit_spaces(&mut self, count: usize);

    /// Bytes emitted so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// String-based emitter for in-memory formatting.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the formatted output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newlines(&mut self, count: usize) {
        self.buffer.extend(std::iter::repeat('\n').take(count));
    }

    fn emit_spaces(&mut self, count: usize) {
        self.buffer.extend(std::iter::repeat(' ').take(count));
    }

    fn len(&self) -> usize {
        self.buffer.len()
    }
}
