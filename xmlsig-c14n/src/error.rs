use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The value could not be turned into an XML tree.
    #[error("Xot error")]
    Xot(#[from] xot::Error),
    /// An end tag arrived with no element open.
    #[error("unbalanced end of element {local}: no element is open")]
    UnbalancedEnd { local: String },
    /// An attribute's namespace has no `xmlns:` declaration on its element.
    #[error("no prefix declared for namespace {namespace} of attribute {local}")]
    UnresolvedPrefix { namespace: String, local: String },
}

pub type Result<T> = std::result::Result<T, Error>;
