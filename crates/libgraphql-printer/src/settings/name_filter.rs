use std::collections::HashSet;
use std::sync::Arc;

/// A predicate over `(name, is_builtin)` deciding whether a type or
/// directive name is allowed.
///
/// Filters must be pure: a [`Context`](crate::context::Context) memoizes the
/// decision for each name it asks about.
#[derive(Clone)]
pub struct NameFilter(Arc<dyn Fn(&str, bool) -> bool + Send + Sync>);
impl NameFilter {
    pub fn allows(&self, name: &str, is_builtin: bool) -> bool {
        (self.0)(name, is_builtin)
    }

    /// Allows only the given names.
    pub fn allow_only<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        let names: HashSet<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        Self::new(move |name, _| names.contains(name))
    }

    /// Allows built-in names and nothing else.
    pub fn builtin_only() -> Self {
        Self::new(|_, is_builtin| is_builtin)
    }

    /// Denies the given names and allows everything else.
    pub fn deny<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        let names: HashSet<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        Self::new(move |name, _| !names.contains(name))
    }

    pub fn new(
        predicate: impl Fn(&str, bool) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(predicate))
    }
}
impl std::fmt::Debug for NameFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NameFilter(..)")
    }
}
