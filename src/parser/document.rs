/// A node of a parsed configuration document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Ordered key/value entries (a block body or an object literal).
    Mapping(Mapping),
    /// Ordered items (grouped blocks or an array literal).
    Sequence(Vec<Node>),
    /// A leaf value.
    Scalar(Scalar),
}

/// Leaf values of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// A number kept in its source notation.
    Number(String),
    /// A string, or the raw source text of an unevaluated expression.
    String(String),
}

/// Ordered mapping from keys to nodes, preserving document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<(String, Node)>,
}

impl Node {
    /// Short name of the node's shape, used in error messages.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Node::Mapping(_) => "mapping",
            Node::Sequence(_) => "sequence",
            Node::Scalar(Scalar::Null) => "null",
            Node::Scalar(_) => "scalar",
        }
    }

    /// Borrow as a mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Borrow as a sequence.
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Text of a non-null scalar.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Scalar(scalar) => scalar.as_text(),
            _ => None,
        }
    }

    /// Look up `key` when this node is a mapping.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping()?.get(key)
    }
}

impl Scalar {
    /// Text form of the scalar; `None` for null.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Null => None,
            Scalar::Bool(true) => Some("true"),
            Scalar::Bool(false) => Some("false"),
            Scalar::Number(text) | Scalar::String(text) => Some(text),
        }
    }
}

impl Mapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, node)| node)
    }

    /// The first entry, if any.
    pub fn first(&self) -> Option<(&str, &Node)> {
        let (key, node) = self.entries.first()?;
        Some((key.as_str(), node))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry. Duplicate keys are kept; lookups return the first one.
    pub fn push(&mut self, key: impl Into<String>, node: Node) {
        self.entries.push((key.into(), node));
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries
            .iter_mut()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, node)| node)
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, node)| (key.into(), node))
                .collect(),
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Scalar(Scalar::String(text.to_string()))
    }
}
