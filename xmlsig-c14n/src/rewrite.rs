use ahash::{HashMap, HashMapExt};
use log::{debug, trace, warn};
use xmlsig_name::{ElementName, Name, Namespace, NamespaceStack, XMLNS, XML_NAMESPACE};
use xot::{Node, Xot};

use crate::error::{Error, Result};
use crate::marshal::Marshal;
use crate::order::{extract_id, sort_attributes};
use crate::token::{tokenize, Attribute, Token};

/// What to do with a namespaced attribute whose namespace has no `xmlns:`
/// declaration on the same element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnresolvedPrefix {
    /// Fail the canonicalization with [`Error::UnresolvedPrefix`].
    #[default]
    Fail,
    /// Write the attribute with an empty prefix (`:name="value"`). This is
    /// not well-formed XML; it exists to reproduce digests made by older
    /// signers.
    Empty,
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub unresolved_prefix: UnresolvedPrefix,
    /// Look for an identifier attribute on the root element.
    pub extract_id: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            unresolved_prefix: UnresolvedPrefix::Fail,
            extract_id: true,
        }
    }
}

/// The canonical bytes of a document together with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical {
    xml: String,
    id: String,
}

impl Canonical {
    pub fn as_bytes(&self) -> &[u8] {
        self.xml.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.xml
    }

    /// The identifier found on the root element, for use in a signature
    /// `Reference` URI. Empty if there was none.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.xml.into_bytes(), self.id)
    }
}

/// Rewrites token streams into canonical XML.
///
/// A `Canonicalizer` holds only its parameters; every call gets a fresh
/// scope stack and output buffer, so it can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Canonicalizer {
    parameters: Parameters,
}

impl Canonicalizer {
    pub fn new(parameters: Parameters) -> Self {
        Self { parameters }
    }

    /// Marshal `value` into a fresh tree and canonicalize it.
    pub fn canonicalize<M: Marshal + ?Sized>(&self, value: &M) -> Result<Canonical> {
        let mut xot = Xot::new();
        let node = value.marshal(&mut xot)?;
        self.canonicalize_node(&xot, node)
    }

    /// Canonicalize the tree below `node`, which can be a document or an
    /// element.
    pub fn canonicalize_node(&self, xot: &Xot, node: Node) -> Result<Canonical> {
        self.rewrite(tokenize(xot, node))
    }

    /// Drain `tokens` and produce the canonical form. The end of the
    /// iterator is the end of the document.
    pub fn rewrite<'a>(&self, tokens: impl IntoIterator<Item = Token<'a>>) -> Result<Canonical> {
        debug!("canonicalization started");
        let mut rewrite = Rewrite::new(&self.parameters);
        for token in tokens {
            match token {
                Token::Start(name, attributes) => rewrite.start(name, attributes)?,
                Token::End(name) => rewrite.end(name)?,
                Token::Text(text) => rewrite.out.push_str(text),
            }
        }
        if !rewrite.namespaces.is_empty() {
            debug!(
                "token stream ended with {} element(s) still open",
                rewrite.namespaces.depth()
            );
        }
        debug!(
            "canonicalization finished: {} bytes, id {:?}",
            rewrite.out.len(),
            rewrite.id
        );
        Ok(Canonical {
            xml: rewrite.out,
            id: rewrite.id,
        })
    }
}

struct Rewrite<'a, 'p> {
    parameters: &'p Parameters,
    namespaces: NamespaceStack<'a>,
    out: String,
    id: String,
    seen_root: bool,
}

impl<'a, 'p> Rewrite<'a, 'p> {
    fn new(parameters: &'p Parameters) -> Self {
        Self {
            parameters,
            namespaces: NamespaceStack::new(),
            out: String::new(),
            id: String::new(),
            seen_root: false,
        }
    }

    fn start(&mut self, name: ElementName<'a>, mut attributes: Vec<Attribute<'a>>) -> Result<()> {
        if !self.seen_root {
            self.seen_root = true;
            if self.parameters.extract_id {
                if let Some(id) = extract_id(&attributes) {
                    self.id = id.to_string();
                }
            }
        }

        self.out.push('<');
        self.push_element_name(name);
        sort_attributes(&mut attributes);
        self.declare_namespace(name.namespace());

        // prefixes declared on this element only
        let mut prefixes = HashMap::new();
        for attribute in &attributes {
            let attribute_name = attribute.name;
            if attribute_name.local_name() == XMLNS {
                continue;
            }
            if attribute_name.namespace() == XMLNS {
                self.push_attribute(Some(XMLNS), attribute_name.local_name(), attribute.value);
                prefixes.insert(attribute.value, attribute_name.local_name());
                continue;
            }
            if !attribute_name.has_namespace() {
                self.push_attribute(None, attribute_name.local_name(), attribute.value);
            } else {
                let prefix = self.attribute_prefix(&prefixes, attribute_name)?;
                self.push_attribute(Some(prefix), attribute_name.local_name(), attribute.value);
            }
        }
        self.out.push('>');
        Ok(())
    }

    fn end(&mut self, name: ElementName<'a>) -> Result<()> {
        self.namespaces
            .pop()
            .map_err(|_| Error::UnbalancedEnd {
                local: name.to_full_name(),
            })?;
        self.out.push_str("</");
        self.push_element_name(name);
        self.out.push('>');
        Ok(())
    }

    fn declare_namespace(&mut self, namespace: Option<Namespace<'a>>) {
        if !self.namespaces.is_inherited(namespace) {
            match namespace {
                Some(namespace) => {
                    // literal prefixes have nothing to declare
                    if let Some(uri) = namespace.uri() {
                        trace!("declaring default namespace {}", uri);
                        self.push_attribute(None, XMLNS, uri);
                    }
                }
                // leaving a default namespace for no namespace at all
                None => {
                    if self.namespaces.default_namespace().is_some() {
                        trace!("undeclaring default namespace");
                        self.push_attribute(None, XMLNS, "");
                    }
                }
            }
        }
        self.namespaces.push(namespace);
    }

    fn attribute_prefix(
        &self,
        prefixes: &HashMap<&'a str, &'a str>,
        name: Name<'a>,
    ) -> Result<&'a str> {
        if let Some(prefix) = prefixes.get(name.namespace()).copied() {
            return Ok(prefix);
        }
        if name.namespace() == XML_NAMESPACE {
            return Ok("xml");
        }
        match self.parameters.unresolved_prefix {
            UnresolvedPrefix::Fail => Err(Error::UnresolvedPrefix {
                namespace: name.namespace().to_string(),
                local: name.local_name().to_string(),
            }),
            UnresolvedPrefix::Empty => {
                warn!(
                    "attribute {} in namespace {} has no local prefix declaration; writing empty prefix",
                    name.local_name(),
                    name.namespace()
                );
                Ok("")
            }
        }
    }

    fn push_element_name(&mut self, name: ElementName) {
        if let Some(prefix) = name.prefix() {
            self.out.push_str(prefix);
            self.out.push(':');
        }
        self.out.push_str(name.local_name());
    }

    fn push_attribute(&mut self, prefix: Option<&str>, local: &str, value: &str) {
        self.out.push(' ');
        if let Some(prefix) = prefix {
            self.out.push_str(prefix);
            self.out.push(':');
        }
        self.out.push_str(local);
        self.out.push_str("=\"");
        self.out.push_str(value);
        self.out.push('"');
    }
}
