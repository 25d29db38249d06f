use crate::name::Namespace;

/// The namespace marker an attribute carries when it is a prefixed
/// namespace declaration, and the local name of a default declaration.
pub const XMLNS: &str = "xmlns";
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("namespace scope stack underflow: end of element without matching start")]
    StackUnderflow,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Tracks the namespace of every open element.
///
/// There is exactly one entry per open element, so the depth of the stack
/// is the current nesting depth. Elements without a namespace push `None`.
#[derive(Debug, Clone, Default)]
pub struct NamespaceStack<'a> {
    entries: Vec<Option<Namespace<'a>>>,
}

impl<'a> NamespaceStack<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, namespace: Option<Namespace<'a>>) {
        self.entries.push(namespace);
    }

    pub fn pop(&mut self) -> Result<Option<Namespace<'a>>> {
        self.entries.pop().ok_or(Error::StackUnderflow)
    }

    /// The namespace of the innermost open element, or `None` if no element
    /// is open.
    pub fn top(&self) -> Option<Option<Namespace<'a>>> {
        self.entries.last().copied()
    }

    /// True if `namespace` is already in force because the enclosing element
    /// has the same one.
    pub fn is_inherited(&self, namespace: Option<Namespace<'a>>) -> bool {
        self.top() == Some(namespace)
    }

    /// The default namespace in force for the innermost open element.
    ///
    /// Literal prefix elements don't touch the default namespace; an element
    /// without a namespace resets it.
    pub fn default_namespace(&self) -> Option<&'a str> {
        for entry in self.entries.iter().rev().copied() {
            match entry {
                Some(Namespace::Declared(uri)) => return Some(uri),
                Some(Namespace::LiteralPrefix(_)) => continue,
                None => return None,
            }
        }
        None
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
