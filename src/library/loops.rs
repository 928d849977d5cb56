/// The labels of one open `while`. The end label is unknown between the
/// `while` keyword and the end of the condition, hence the Option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopFrame {
    begin: String,
    end: Option<String>,
}

/// LIFO stack of open loops, innermost on top. Depth equals the nesting
/// depth of `while` bodies entered but not yet closed. Misuse of any
/// operation is a bug in the translator's wiring, not a user error, and
/// panics.
#[derive(Debug, Default)]
pub struct LoopStack {
    frames: Vec<LoopFrame>,
}

impl LoopStack {
    pub fn new() -> Self {
        LoopStack::default()
    }

    /// Open a loop whose condition has not been translated yet.
    pub fn enter(&mut self, begin: String) {
        self.frames.push(LoopFrame { begin, end: None });
    }

    /// Record the innermost loop's end label once the condition is done.
    pub fn complete(&mut self, end: String) {
        let frame = self
            .frames
            .last_mut()
            .expect("Internal error: no open loop to complete");
        assert!(
            frame.end.is_none(),
            "Internal error: loop end label set twice"
        );
        frame.end = Some(end);
    }

    /// Close the innermost loop, returning its (begin, end) labels.
    pub fn exit(&mut self) -> (String, String) {
        let frame = self
            .frames
            .pop()
            .expect("Internal error: loop stack underflow");
        let end = frame
            .end
            .expect("Internal error: closing a loop with no end label");
        (frame.begin, end)
    }

    /// Discard the innermost frame during error recovery.
    pub fn abandon(&mut self) {
        self.frames.pop();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
