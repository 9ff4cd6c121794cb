use std::fmt::{self, Write};

/// An atomic selector.
///
/// The text of a plain selector (type, class, id, pseudo-class, attribute
/// matcher) is kept opaque; this layer does not decompose it further.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimpleSelector {
    /// e.g. `div`, `.foo`, `:first-child`, `[href]`
    Plain(String),
    /// The parent reference `&`, substituted with the enclosing selector
    /// context during nesting resolution.
    Parent,
    /// An extend-only selector `%name`, never emitted directly.
    Placeholder(String),
}

impl SimpleSelector {
    pub fn is_parent(&self) -> bool {
        matches!(self, Self::Parent)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(..))
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(text) => f.write_str(text),
            Self::Parent => f.write_char('&'),
            Self::Placeholder(name) => write!(f, "%{}", name),
        }
    }
}
