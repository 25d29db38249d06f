use xmlsig_name::{ElementName, Name, XMLNS};
use xot::{Node, NodeEdge, Value, Xot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: Name<'a>,
    pub value: &'a str,
}

impl<'a> Attribute<'a> {
    pub fn new(name: Name<'a>, value: &'a str) -> Self {
        Self { name, value }
    }
}

/// One event of the input stream.
///
/// Start and end tokens must nest; every `Start` is closed by exactly one
/// `End` in last-in first-out order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Start(ElementName<'a>, Vec<Attribute<'a>>),
    End(ElementName<'a>),
    Text(&'a str),
}

struct TokenizedTraverse<'a, T: Iterator<Item = NodeEdge>> {
    xot: &'a Xot,
    traverse: T,
}

impl<'a, T: Iterator<Item = NodeEdge>> TokenizedTraverse<'a, T> {
    fn start(&self, node: Node, name: xot::NameId) -> Token<'a> {
        let mut attributes = Vec::new();
        // namespace declarations come back as attributes, in the shape an
        // attribute-preserving decoder reports them
        for (prefix, namespace) in self.xot.namespaces(node).iter() {
            let prefix = self.xot.prefix_str(prefix);
            let uri = self.xot.namespace_str(*namespace);
            let name = if prefix.is_empty() {
                Name::unqualified(XMLNS)
            } else {
                Name::new(XMLNS, prefix)
            };
            attributes.push(Attribute::new(name, uri));
        }
        for (name, value) in self.xot.attributes(node).iter() {
            attributes.push(Attribute::new(Name::from_xot(name, self.xot), value));
        }
        Token::Start(Name::from_xot(name, self.xot).into(), attributes)
    }
}

impl<'a, T: Iterator<Item = NodeEdge>> Iterator for TokenizedTraverse<'a, T> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // comments, processing instructions and the document node have no
        // canonical form here; skip them without recursing
        loop {
            match self.traverse.next()? {
                NodeEdge::Start(node) => match self.xot.value(node) {
                    Value::Element(e) => return Some(self.start(node, e.name())),
                    Value::Text(text) => return Some(Token::Text(text.get())),
                    _ => continue,
                },
                NodeEdge::End(node) => {
                    if let Value::Element(e) = self.xot.value(node) {
                        return Some(Token::End(Name::from_xot(e.name(), self.xot).into()));
                    }
                }
            }
        }
    }
}

/// Turn a xot tree into a token stream, starting at `node`.
pub fn tokenize(xot: &Xot, node: Node) -> impl Iterator<Item = Token<'_>> + '_ {
    TokenizedTraverse {
        xot,
        traverse: xot.traverse(node),
    }
}
