//! Reconstruction cursor.
//!
//! Owns the output and the line/column it ends at. Lines are 1-based,
//! columns are 0-based and count chars. Every write goes through here so the
//! tracked position always matches the text.

use tessel_ir::Span;

use crate::emitter::{Emitter, StringEmitter};

pub(crate) struct Cursor<E: Emitter = StringEmitter> {
    emitter: E,
    line: u32,
    column: u32,
}

impl Cursor<StringEmitter> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Cursor::with_emitter(StringEmitter::with_capacity(capacity))
    }

    pub(crate) fn output(self) -> String {
        self.emitter.output()
    }
}

impl<E: Emitter> Cursor<E> {
    pub(crate) fn with_emitter(emitter: E) -> Self {
        Cursor {
            emitter,
            line: 1,
            column: 0,
        }
    }

    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub(crate) fn column(&self) -> u32 {
        self.column
    }

    /// Restart coordinates at line 1, column 0. Output already written stays.
    pub(crate) fn restart(&mut self) {
        self.line = 1;
        self.column = 0;
    }

    /// Emit text that may span lines, tracking embedded newlines.
    pub(crate) fn emit_verbatim(&mut self, text: &str) {
        self.emitter.emit(text);
        match text.rfind('\n') {
            Some(last) => {
                self.line += count_u32(text.matches('\n').count());
                self.column = count_u32(text[last + 1..].chars().count());
            }
            None => self.column += count_u32(text.chars().count()),
        }
    }

    /// Emit `count` newlines; the column resets to 0.
    pub(crate) fn newlines(&mut self, count: u32) {
        self.emitter.emit_newlines(count as usize);
        self.line += count;
        if count > 0 {
            self.column = 0;
        }
    }

    pub(crate) fn spaces(&mut self, count: u32) {
        self.emitter.emit_spaces(count as usize);
        self.column += count;
    }

    /// Emit a single-line token; returns its byte span in the output.
    pub(crate) fn emit_token(&mut self, text: &str) -> Span {
        let start = self.emitter.len();
        self.emit_verbatim(text);
        Span::from_range(start..self.emitter.len())
    }
}

fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
