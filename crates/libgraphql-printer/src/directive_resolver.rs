use crate::schema::Schema;
use crate::types::Directive;
use indexmap::IndexMap;
use inherent::inherent;

/// Supplies directive definitions when no [`Schema`] is attached to a print
/// call, so that directive arguments can still be typed and filtered.
pub trait DirectiveResolver: std::fmt::Debug + Send + Sync {
    fn directive(&self, name: &str) -> Option<&Directive>;
}

#[inherent]
impl DirectiveResolver for Schema {
    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.get_directive(name)
    }
}

impl DirectiveResolver for IndexMap<String, Directive> {
    fn directive(&self, name: &str) -> Option<&Directive> {
        self.get(name)
    }
}
