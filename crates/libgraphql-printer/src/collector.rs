use indexmap::IndexSet;

/// Records the type and directive names referenced while printing.
///
/// Names are kept in first-seen order and appear at most once. Directive
/// names carry their `@` sigil so that both kinds can share one namespace in
/// reports.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Collector {
    directives: IndexSet<String>,
    types: IndexSet<String>,
}
impl Collector {
    pub(crate) fn add_directive(&mut self, name: &str) {
        self.directives.insert(format!("@{name}"));
    }

    pub(crate) fn add_type(&mut self, name: &str) {
        if !self.types.contains(name) {
            self.types.insert(name.to_string());
        }
    }

    pub(crate) fn directive_count(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty() && self.types.is_empty()
    }

    pub(crate) fn merge(&mut self, other: Collector) {
        self.directives.extend(other.directives);
        self.types.extend(other.types);
    }

    /// The `index`-th directive name in first-seen order, without its `@`.
    pub(crate) fn nth_directive(&self, index: usize) -> Option<&str> {
        self.directives
            .get_index(index)
            .map(|name| name.strip_prefix('@').unwrap_or(name))
    }

    pub(crate) fn nth_type(&self, index: usize) -> Option<&str> {
        self.types.get_index(index).map(|name| name.as_str())
    }

    pub(crate) fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Whether `@name` was referenced. `name` is given without the sigil.
    pub fn uses_directive(&self, name: &str) -> bool {
        self.directives.contains(format!("@{name}").as_str())
    }

    pub fn uses_type(&self, name: &str) -> bool {
        self.types.contains(name)
    }

    /// Directive names, each prefixed with `@`, in first-seen order.
    pub fn used_directives(&self) -> impl Iterator<Item = &str> {
        self.directives.iter().map(|name| name.as_str())
    }

    pub fn used_types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|name| name.as_str())
    }
}
