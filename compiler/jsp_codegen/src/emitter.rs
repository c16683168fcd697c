//! Incremental string emitter for generated Java source.

/// String builder with capacity pre-allocation.
///
/// The generator appends small fragments at high frequency (per
/// character during content escaping), so everything funnels through
/// one growing buffer instead of intermediate allocations.
#[derive(Default)]
pub struct Emitter {
    buffer: String,
}

impl Emitter {
    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Append a text fragment.
    pub fn raw(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Append a single character.
    pub fn ch(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    /// Append a text fragment followed by a newline.
    pub fn line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Append a blank separator line.
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Consume the emitter and return the generated source.
    pub fn finish(self) -> String {
        self.buffer
    }
}
