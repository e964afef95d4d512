use super::Vertex;

/// An undirected edge, i.e., an unordered pair of vertex labels.
///
/// Endpoints are kept in canonical order, so the derived `Eq`, `Ord` and
/// `Hash` treat `{a, b}` and `{b, a}` as the same edge.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    a: Vertex,
    b: Vertex,
}

impl Edge {
    pub fn new(x: Vertex, y: Vertex) -> Self {
        if x <= y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        }
    }

    /// Decodes an edge from a string: the first and the last character of
    /// `encoded` are the endpoint labels, anything in between is ignored.
    ///
    /// A one-character encoding yields a self-loop. `None` if `encoded` is
    /// empty or either endpoint fails the label predicate. The endpoints are
    /// not required to be vertices of any particular graph.
    pub fn parse(encoded: &str) -> Option<Self> {
        let mut chars = encoded.chars();
        let first = chars.next()?;
        let last = chars.last().unwrap_or(first);
        let a = Vertex::from_char(first)?;
        let b = Vertex::from_char(last)?;
        Some(Self::new(a, b))
    }

    /// Both endpoints, in canonical order.
    pub fn endpoints(&self) -> (Vertex, Vertex) {
        (self.a, self.b)
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }

    pub fn touches(&self, v: &Vertex) -> bool {
        self.a == *v || self.b == *v
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::*;

    #[test]
    fn undirected_equality() {
        let ab = Edge::parse("ab").unwrap();
        let ba = Edge::parse("ba").unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.endpoints(), ba.endpoints());
    }

    #[test]
    fn endpoints_come_from_first_and_last_character() {
        let e = Edge::parse("a-z").unwrap();
        let (a, b) = e.endpoints();
        assert_eq!(a.label(), 'a');
        assert_eq!(b.label(), 'z');
    }

    #[test]
    fn one_character_encoding_is_a_self_loop() {
        let e = Edge::parse("a").unwrap();
        assert!(e.is_loop());
        let (a, b) = e.endpoints();
        assert_eq!(a, b);
        assert_eq!(a.label(), 'a');
    }

    #[test]
    fn rejects_empty_input_and_blank_endpoints() {
        assert!(Edge::parse("").is_none());
        assert!(Edge::parse(" ").is_none());
        assert!(Edge::parse(" b").is_none());
        assert!(Edge::parse("a ").is_none());
    }

    #[test]
    fn touches_both_endpoints_only() {
        let e = Edge::parse("ab").unwrap();
        assert!(e.touches(&Vertex::parse("a").unwrap()));
        assert!(e.touches(&Vertex::parse("b").unwrap()));
        assert!(!e.touches(&Vertex::parse("c").unwrap()));
    }

    #[quickcheck]
    fn reversed_encodings_decode_to_the_same_edge(s: String) -> bool {
        let rev: String = s.chars().rev().collect();
        Edge::parse(&s) == Edge::parse(&rev)
    }
}
