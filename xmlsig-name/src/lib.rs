mod name;
mod namespaces;

pub use name::{ElementName, Name, Namespace};
pub use namespaces::{Error, NamespaceStack, Result, XMLNS, XML_NAMESPACE};
