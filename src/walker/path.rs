/// The current nesting path during a walk.
///
/// Segments are kept pre-joined with `.` so recording a visit needs no
/// allocation beyond the accumulator key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathStack {
    joined: String,
    /// Length of `joined` before each segment was pushed
    marks: Vec<usize>,
}

impl PathStack {
    /// Creates an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment
    pub fn push(&mut self, segment: &str) {
        self.marks.push(self.joined.len());
        if self.marks.len() > 1 {
            self.joined.push('.');
        }
        self.joined.push_str(segment);
    }

    /// Remove the innermost segment. Returns false if the stack was empty.
    pub fn pop(&mut self) -> bool {
        match self.marks.pop() {
            Some(mark) => {
                self.joined.truncate(mark);
                true
            }
            None => false,
        }
    }

    /// Number of segments
    pub fn depth(&self) -> usize {
        self.marks.len()
    }

    /// True when no segment is open
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// The dot-joined path
    pub fn as_str(&self) -> &str {
        &self.joined
    }
}
