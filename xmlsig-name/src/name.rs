use xot::Xot;

/// A qualified name: a namespace string (possibly empty) and a local name.
///
/// Two names are equal if both components are equal. No prefix is stored;
/// prefixes in canonical output are derived from the namespace string
/// itself or from `xmlns:` declarations on the same element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Name<'a> {
    namespace: &'a str,
    local: &'a str,
}

impl<'a> Name<'a> {
    pub fn new(namespace: &'a str, local: &'a str) -> Self {
        Name { namespace, local }
    }

    pub fn unqualified(local: &'a str) -> Self {
        Name {
            namespace: "",
            local,
        }
    }

    pub fn from_xot(name: xot::NameId, xot: &'a Xot) -> Self {
        let (local, namespace) = xot.name_ns_str(name);
        Name { namespace, local }
    }

    #[inline]
    pub fn namespace(&self) -> &'a str {
        self.namespace
    }

    #[inline]
    pub fn local_name(&self) -> &'a str {
        self.local
    }

    pub fn has_namespace(&self) -> bool {
        !self.namespace.is_empty()
    }
}

impl<'a> From<(&'a str, &'a str)> for Name<'a> {
    fn from((local, namespace): (&'a str, &'a str)) -> Self {
        Name { namespace, local }
    }
}

/// The namespace of an element, classified once when its token is built.
///
/// A namespace string that starts with `http` is a real namespace URI,
/// bound as the default namespace with a bare `xmlns` declaration. Anything
/// else is used verbatim as the element's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Namespace<'a> {
    Declared(&'a str),
    LiteralPrefix(&'a str),
}

impl<'a> Namespace<'a> {
    /// Classify a namespace string. The empty string means no namespace.
    pub fn classify(namespace: &'a str) -> Option<Self> {
        if namespace.is_empty() {
            None
        } else if namespace.starts_with("http") {
            Some(Namespace::Declared(namespace))
        } else {
            Some(Namespace::LiteralPrefix(namespace))
        }
    }

    pub fn uri(&self) -> Option<&'a str> {
        match *self {
            Namespace::Declared(uri) => Some(uri),
            Namespace::LiteralPrefix(_) => None,
        }
    }
}

/// An element name with its namespace already classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementName<'a> {
    namespace: Option<Namespace<'a>>,
    local: &'a str,
}

impl<'a> ElementName<'a> {
    pub fn new(namespace: Option<Namespace<'a>>, local: &'a str) -> Self {
        ElementName { namespace, local }
    }

    #[inline]
    pub fn namespace(&self) -> Option<Namespace<'a>> {
        self.namespace
    }

    #[inline]
    pub fn local_name(&self) -> &'a str {
        self.local
    }

    /// The prefix this element is written with, if any.
    pub fn prefix(&self) -> Option<&'a str> {
        match self.namespace {
            Some(Namespace::LiteralPrefix(prefix)) => Some(prefix),
            _ => None,
        }
    }

    pub fn to_full_name(&self) -> String {
        if let Some(prefix) = self.prefix() {
            format!("{}:{}", prefix, self.local)
        } else {
            self.local.to_string()
        }
    }
}

impl<'a> From<Name<'a>> for ElementName<'a> {
    fn from(name: Name<'a>) -> Self {
        ElementName {
            namespace: Namespace::classify(name.namespace),
            local: name.local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_http() {
        assert_eq!(
            Namespace::classify("http://www.w3.org/2000/09/xmldsig#"),
            Some(Namespace::Declared("http://www.w3.org/2000/09/xmldsig#"))
        );
        assert_eq!(
            Namespace::classify("https://example.com/ns"),
            Some(Namespace::Declared("https://example.com/ns"))
        );
    }

    #[test]
    fn test_classify_literal_prefix() {
        assert_eq!(
            Namespace::classify("samlp"),
            Some(Namespace::LiteralPrefix("samlp"))
        );
        // only the literal "http" start counts
        assert_eq!(
            Namespace::classify("urn:oasis:names:tc:SAML:2.0:assertion"),
            Some(Namespace::LiteralPrefix(
                "urn:oasis:names:tc:SAML:2.0:assertion"
            ))
        );
    }

    #[test]
    fn test_namespace_accessors() {
        let declared = Namespace::Declared("http://example.com");
        assert_eq!(declared.uri(), Some("http://example.com"));
        let prefix = Namespace::LiteralPrefix("ds");
        assert_eq!(prefix.uri(), None);
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(Namespace::classify(""), None);
    }

    #[test]
    fn test_element_full_name() {
        let name: ElementName = Name::new("samlp", "Response").into();
        assert_eq!(name.prefix(), Some("samlp"));
        assert_eq!(name.to_full_name(), "samlp:Response");

        let name: ElementName = Name::new("http://example.com", "Response").into();
        assert_eq!(name.prefix(), None);
        assert_eq!(name.to_full_name(), "Response");

        let name: ElementName = Name::unqualified("Response").into();
        assert_eq!(name.namespace(), None);
        assert_eq!(name.to_full_name(), "Response");
    }

    #[test]
    fn test_name_equality() {
        assert_eq!(Name::new("a", "b"), Name::new("a", "b"));
        assert_ne!(Name::new("a", "b"), Name::new("", "b"));
        assert_ne!(Name::new("a", "b"), Name::new("a", "c"));
        // xot's name_ns_str order: local name first
        assert_eq!(Name::from(("b", "a")), Name::new("a", "b"));
    }

    #[test]
    fn test_from_xot() {
        let mut xot = Xot::new();
        let ns = xot.add_namespace("http://example.com");
        let name_id = xot.add_name_ns("foo", ns);
        let name = Name::from_xot(name_id, &xot);
        assert_eq!(name.namespace(), "http://example.com");
        assert_eq!(name.local_name(), "foo");
    }
}
