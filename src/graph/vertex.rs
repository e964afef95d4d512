/// A graph node identified by a one-character label.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Vertex(char);

impl Vertex {
    /// Validates `label` and wraps it.
    ///
    /// A label is valid iff it consists of exactly one character and that
    /// character is not a blank space. Everything else, including the empty
    /// string and multi-character strings, is rejected with `None`.
    pub fn parse(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::from_char(c)
    }

    /// The single-character form of the label predicate: any character but a
    /// blank space is a valid label.
    pub fn from_char(label: char) -> Option<Self> {
        if label == ' ' {
            None
        } else {
            Some(Self(label))
        }
    }

    pub fn label(&self) -> char {
        self.0
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
