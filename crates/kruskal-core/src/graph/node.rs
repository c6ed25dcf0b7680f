use std::fmt;

use serde::{Deserialize, Serialize};

/// Identificador opaco de un nodo (p.ej. una letra).
///
/// Es `Ord` para que los snapshots del union-find se serialicen en un orden
/// estable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node(String);

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<char> for Node {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

impl AsRef<str> for Node {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
