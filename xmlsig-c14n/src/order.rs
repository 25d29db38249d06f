use std::cmp::Ordering;

use xmlsig_name::{Name, XMLNS};

use crate::token::Attribute;

// Variant order is the canonical order: the default namespace declaration,
// then prefixed declarations by prefix, then everything else by namespace
// and local name.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey<'a> {
    DefaultDeclaration(&'a str),
    PrefixDeclaration(&'a str),
    Attribute(&'a str, &'a str),
}

impl<'a> SortKey<'a> {
    fn new(name: Name<'a>) -> Self {
        if name.local_name() == XMLNS {
            SortKey::DefaultDeclaration(name.namespace())
        } else if name.namespace() == XMLNS {
            SortKey::PrefixDeclaration(name.local_name())
        } else {
            SortKey::Attribute(name.namespace(), name.local_name())
        }
    }
}

/// The canonical total order of attributes within one start tag.
pub fn canonical_order(a: &Attribute, b: &Attribute) -> Ordering {
    SortKey::new(a.name).cmp(&SortKey::new(b.name))
}

pub(crate) fn sort_attributes(attributes: &mut [Attribute]) {
    attributes.sort_by(canonical_order);
}

fn is_id_name(local: &str) -> bool {
    // "Id" itself is covered by the suffix test
    local == "ID" || local.ends_with("Id")
}

/// Find the identifier attribute among `attributes`, in their original order.
///
/// Local names `ID`, `Id` and anything ending in `Id` qualify. If more than
/// one attribute qualifies, the last one wins.
pub fn extract_id<'a>(attributes: &[Attribute<'a>]) -> Option<&'a str> {
    attributes
        .iter()
        .rev()
        .find(|attribute| is_id_name(attribute.name.local_name()))
        .map(|attribute| attribute.value)
}
