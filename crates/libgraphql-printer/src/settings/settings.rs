use crate::settings::NameFilter;

/// Formatting policy for a [`Printer`](crate::Printer).
///
/// [`Settings`] is immutable: every `with_*` method consumes the value and
/// returns an updated copy, so a preset can be tweaked without affecting
/// other printers that share it.
///
/// Filters receive `(name, is_builtin)` and are skipped by serde; all other
/// fields round-trip through any serde format.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Settings {
    always_multiline_arguments: bool,
    always_multiline_directive_locations: bool,
    always_multiline_interfaces: bool,
    always_multiline_unions: bool,
    #[serde(skip)]
    directive_definition_filter: Option<NameFilter>,
    #[serde(skip)]
    directive_filter: Option<NameFilter>,
    file_end: String,
    indent: String,
    line_end: String,
    line_length: usize,
    max_depth: usize,
    normalize_arguments: bool,
    normalize_description: bool,
    normalize_directive_locations: bool,
    normalize_enums: bool,
    normalize_fields: bool,
    normalize_interfaces: bool,
    normalize_schema: bool,
    normalize_unions: bool,
    print_directive_definitions: bool,
    print_directives: bool,
    print_unused_definitions: bool,
    space: String,
    #[serde(skip)]
    type_definition_filter: Option<NameFilter>,
    #[serde(skip)]
    type_filter: Option<NameFilter>,
}

macro_rules! flag_accessors {
    ($($field:ident => $setter:ident),* $(,)?) => {
        $(
            pub fn $field(&self) -> bool {
                self.$field
            }

            pub fn $setter(self, $field: bool) -> Self {
                Self { $field, ..self }
            }
        )*
    };
}

macro_rules! filter_accessors {
    ($($field:ident => $setter:ident),* $(,)?) => {
        $(
            pub fn $field(&self) -> Option<&NameFilter> {
                self.$field.as_ref()
            }

            pub fn $setter(self, $field: impl Into<Option<NameFilter>>) -> Self {
                Self { $field: $field.into(), ..self }
            }
        )*
    };
}

macro_rules! text_accessors {
    ($($field:ident => $setter:ident),* $(,)?) => {
        $(
            pub fn $field(&self) -> &str {
                self.$field.as_str()
            }

            pub fn $setter(self, $field: impl Into<String>) -> Self {
                Self { $field: $field.into(), ..self }
            }
        )*
    };
}

impl Settings {
    flag_accessors!(
        always_multiline_arguments => with_always_multiline_arguments,
        always_multiline_directive_locations => with_always_multiline_directive_locations,
        always_multiline_interfaces => with_always_multiline_interfaces,
        always_multiline_unions => with_always_multiline_unions,
        normalize_arguments => with_normalize_arguments,
        normalize_description => with_normalize_description,
        normalize_directive_locations => with_normalize_directive_locations,
        normalize_enums => with_normalize_enums,
        normalize_fields => with_normalize_fields,
        normalize_interfaces => with_normalize_interfaces,
        normalize_schema => with_normalize_schema,
        normalize_unions => with_normalize_unions,
        print_directive_definitions => with_print_directive_definitions,
        print_directives => with_print_directives,
        print_unused_definitions => with_print_unused_definitions,
    );

    filter_accessors!(
        directive_definition_filter => with_directive_definition_filter,
        directive_filter => with_directive_filter,
        type_definition_filter => with_type_definition_filter,
        type_filter => with_type_filter,
    );

    text_accessors!(
        file_end => with_file_end,
        indent => with_indent,
        line_end => with_line_end,
        space => with_space,
    );

    /// Settings that reproduce the layout of the reference GraphQL printer:
    /// source order everywhere, no width-driven line breaking, only built-in
    /// directive invocations, and every definition kept.
    pub fn graphql() -> Self {
        Self {
            line_length: usize::MAX,
            normalize_description: false,
            print_unused_definitions: true,
            directive_filter: Some(NameFilter::builtin_only()),
            ..Self::default()
        }
    }

    /// Column budget after which a sequence breaks onto multiple lines.
    pub fn line_length(&self) -> usize {
        self.line_length
    }

    /// Deepest value-literal or selection nesting accepted before printing
    /// fails with [`PrintError::DepthLimitExceeded`](crate::PrintError).
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Settings with every normalization and every always-multiline switch
    /// turned on. Useful for diffing schemas.
    pub fn normalized() -> Self {
        Self {
            always_multiline_arguments: true,
            always_multiline_directive_locations: true,
            always_multiline_interfaces: true,
            always_multiline_unions: true,
            normalize_arguments: true,
            normalize_description: true,
            normalize_directive_locations: true,
            normalize_enums: true,
            normalize_fields: true,
            normalize_interfaces: true,
            normalize_schema: true,
            normalize_unions: true,
            ..Self::default()
        }
    }

    pub fn with_line_length(self, line_length: usize) -> Self {
        Self { line_length, ..self }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            always_multiline_arguments: false,
            always_multiline_directive_locations: false,
            always_multiline_interfaces: false,
            always_multiline_unions: false,
            directive_definition_filter: None,
            directive_filter: None,
            file_end: "\n".to_string(),
            indent: "    ".to_string(),
            line_end: "\n".to_string(),
            line_length: 80,
            max_depth: 128,
            normalize_arguments: false,
            normalize_description: true,
            normalize_directive_locations: false,
            normalize_enums: false,
            normalize_fields: false,
            normalize_interfaces: false,
            normalize_schema: false,
            normalize_unions: false,
            print_directive_definitions: true,
            print_directives: true,
            print_unused_definitions: false,
            space: " ".to_string(),
            type_definition_filter: None,
            type_filter: None,
        }
    }
}
