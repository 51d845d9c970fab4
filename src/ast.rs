use indexmap::IndexMap;

/// A parsed configuration document.
///
/// Mapping entries keep document order; the flattener depends on that for
/// deterministic emission.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Mapping(IndexMap<String, Node>),
    Sequence(Vec<Node>),
    Scalar(Scalar),
}

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`; kept separate so they emit exact digits.
    UInt(u64),
    Float(f64),
    Null,
}

impl Node {
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Node>> {
        if let Node::Mapping(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        if let Node::Scalar(scalar) = self {
            Some(scalar)
        } else {
            None
        }
    }
}
