use xot::{Node, Xot};

use crate::error::Result;
use crate::rewrite::{Canonical, Canonicalizer};

/// Produces the initial, not yet canonical, XML tree for a value.
///
/// Any failure here is returned before canonicalization starts.
pub trait Marshal {
    fn marshal(&self, xot: &mut Xot) -> Result<Node>;
}

impl Marshal for str {
    fn marshal(&self, xot: &mut Xot) -> Result<Node> {
        Ok(xot.parse(self).map_err(xot::Error::from)?)
    }
}

impl Marshal for String {
    fn marshal(&self, xot: &mut Xot) -> Result<Node> {
        self.as_str().marshal(xot)
    }
}

/// Canonicalize `value` with default [`Parameters`](crate::Parameters).
pub fn canonicalize<M: Marshal + ?Sized>(value: &M) -> Result<Canonical> {
    Canonicalizer::default().canonicalize(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Envelope {
        id: &'static str,
        body: &'static str,
    }

    impl Marshal for Envelope {
        fn marshal(&self, xot: &mut Xot) -> Result<Node> {
            let ns = xot.add_namespace("http://example.com/envelope");
            let envelope = xot.add_name_ns("Envelope", ns);
            let body = xot.add_name_ns("Body", ns);
            let envelope_id = xot.add_name("EnvelopeId");

            let root = xot.new_element(envelope);
            xot.attributes_mut(root)
                .insert(envelope_id, self.id.to_string());
            let body = xot.new_element(body);
            xot.append(root, body)?;
            let text = xot.new_text(self.body);
            xot.append(body, text)?;
            Ok(xot.new_document_with_element(root)?)
        }
    }

    #[test]
    fn test_marshal_str() {
        let canonical = canonicalize("<a><b/></a>").unwrap();
        assert_eq!(canonical.as_str(), "<a><b></b></a>");
        assert_eq!(canonical.id(), "");
    }

    #[test]
    fn test_marshal_string() {
        let xml = r#"<a Id="x"/>"#.to_string();
        let canonical = canonicalize(&xml).unwrap();
        assert_eq!(canonical.as_str(), r#"<a Id="x"></a>"#);
        assert_eq!(canonical.id(), "x");
    }

    #[test]
    fn test_marshal_custom_value() {
        let envelope = Envelope {
            id: "env-1",
            body: "payload",
        };
        let canonical = canonicalize(&envelope).unwrap();
        assert_eq!(
            canonical.as_str(),
            r#"<Envelope xmlns="http://example.com/envelope" EnvelopeId="env-1"><Body>payload</Body></Envelope>"#
        );
        assert_eq!(canonical.id(), "env-1");
    }

    #[test]
    fn test_marshal_failure_is_propagated() {
        let result = canonicalize("<a><b></a>");
        assert!(matches!(result, Err(Error::Xot(_))));
    }
}
