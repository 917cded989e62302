use crate::collector::Collector;

/// Rendered text together with the names referenced while rendering it.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PrintResult {
    collector: Collector,
    text: String,
}
impl PrintResult {
    pub(crate) fn new(text: String, collector: Collector) -> Self {
        Self { collector, text }
    }

    pub fn collector(&self) -> &Collector {
        &self.collector
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Nothing was rendered, e.g. because every definition was filtered out.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Directive names, each prefixed with `@`, in first-seen order.
    pub fn used_directives(&self) -> Vec<&str> {
        self.collector.used_directives().collect()
    }

    pub fn used_types(&self) -> Vec<&str> {
        self.collector.used_types().collect()
    }
}
impl std::fmt::Display for PrintResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
