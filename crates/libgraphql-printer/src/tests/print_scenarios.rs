use crate::NameFilter;
use crate::PrintError;
use crate::Printer;
use crate::Settings;
use crate::ast;
use crate::tests::utils::build_schema;
use crate::tests::utils::parse_query;
use crate::tests::utils::parse_schema;
use crate::types::EnumValue;
use crate::types::NamedGraphQLTypeRef;

type Result<T> = std::result::Result<T, PrintError>;

mod runtime_schema {
    use super::*;

    #[test]
    fn object_type_with_one_field() -> Result<()> {
        let schema = build_schema(concat!(
            "type Query { test: Test }\n",
            "type Test { a: String }",
        ));

        let result = Printer::default().print_schema_type(&schema, "Test")?;

        assert_eq!(result.text(), "type Test {\n    a: String\n}\n");
        assert_eq!(result.used_types(), vec!["Test", "String"]);
        assert!(result.used_directives().is_empty());

        Ok(())
    }

    #[test]
    fn field_of_denied_type_is_dropped() -> Result<()> {
        let schema = build_schema(concat!(
            "type Query { a: String b: Hidden }\n",
            "type Hidden { x: Int }",
        ));
        let printer = Printer::new(
            Settings::default().with_type_filter(NameFilter::deny(["Hidden"])),
        );

        let result = printer.print_schema_type(&schema, "Query")?;
        assert_eq!(result.text(), "type Query {\n    a: String\n}\n");
        assert_eq!(result.used_types(), vec!["Query", "String"]);

        let result = printer.print_schema(&schema)?;
        assert_eq!(result.text(), "type Query {\n    a: String\n}\n");
        assert!(!result.collector().uses_type("Hidden"));

        Ok(())
    }

    #[test]
    fn enum_value_deprecation_reasons() -> Result<()> {
        let schema = build_schema(concat!(
            "type Query { e: E }\n",
            "enum E {\n",
            "  A @deprecated(reason: \"\")\n",
            "  B @deprecated(reason: \"custom\")\n",
            "  C\n",
            "}",
        ));

        let result = Printer::default().print_schema_type(&schema, "E")?;

        assert_eq!(result.text(), concat!(
            "enum E {\n",
            "    A\n",
            "    @deprecated\n",
            "\n",
            "    B\n",
            "    @deprecated(reason: \"custom\")\n",
            "\n",
            "    C\n",
            "}\n",
        ));
        assert_eq!(result.used_directives(), vec!["@deprecated"]);

        Ok(())
    }

    #[test]
    fn legacy_deprecation_reason_becomes_a_directive() -> Result<()> {
        let enum_value = |reason: &str| EnumValue {
            deprecation_reason: Some(reason.to_string()),
            description: None,
            directives: vec![],
            name: "A".to_string(),
            type_ref: NamedGraphQLTypeRef::new("E"),
        };
        let printer = Printer::default();

        assert_eq!(printer.print(&enum_value(""))?.text(), "A\n@deprecated\n");
        assert_eq!(
            printer.print(&enum_value("No longer supported"))?.text(),
            "A\n@deprecated\n",
        );
        assert_eq!(
            printer.print(&enum_value("custom"))?.text(),
            "A\n@deprecated(reason: \"custom\")\n",
        );

        Ok(())
    }

    #[test]
    fn deprecated_field_keeps_its_directive() -> Result<()> {
        let schema = build_schema("type Query { old: Int @deprecated new: Int }");

        let result = Printer::default().print_schema(&schema)?;

        assert_eq!(result.text(), concat!(
            "type Query {\n",
            "    old: Int\n",
            "    @deprecated\n",
            "\n",
            "    new: Int\n",
            "}\n",
        ));

        Ok(())
    }

    #[test]
    fn unreachable_types_are_pruned() -> Result<()> {
        let schema = build_schema(concat!(
            "type Query { a: String }\n",
            "type Unused { b: Int }",
        ));

        let result = Printer::default().print_schema(&schema)?;
        assert_eq!(result.text(), "type Query {\n    a: String\n}\n");
        assert!(!result.collector().uses_type("Unused"));

        let printer = Printer::new(
            Settings::default().with_print_unused_definitions(true),
        );
        let result = printer.print_schema(&schema)?;
        assert_eq!(result.text(), concat!(
            "type Query {\n",
            "    a: String\n",
            "}\n",
            "\n",
            "type Unused {\n",
            "    b: Int\n",
            "}\n",
        ));

        Ok(())
    }

    #[test]
    fn implementations_are_not_reachable_from_interfaces() -> Result<()> {
        let schema = build_schema(concat!(
            "type Query { node: Node }\n",
            "interface Node { id: ID! }\n",
            "type User implements Node { id: ID! friend: Friend }\n",
            "type Friend { user: User }\n",
            "type Orphan { id: ID! }",
        ));

        let result = Printer::default().print_schema(&schema)?;

        // `User` implements `Node` but nothing reachable references it.
        assert_eq!(result.text(), concat!(
            "type Query {\n",
            "    node: Node\n",
            "}\n",
            "\n",
            "interface Node {\n",
            "    id: ID!\n",
            "}\n",
        ));

        Ok(())
    }

    #[test]
    fn custom_root_type_prints_schema_definition() -> Result<()> {
        let schema = build_schema(concat!(
            "schema { query: Root }\n",
            "type Root { a: Int }",
        ));

        let result = Printer::default().print_schema(&schema)?;

        assert_eq!(result.text(), concat!(
            "schema {\n",
            "    query: Root\n",
            "}\n",
            "\n",
            "type Root {\n",
            "    a: Int\n",
            "}\n",
        ));

        Ok(())
    }

    #[test]
    fn used_directive_definitions_are_printed() -> Result<()> {
        let schema = build_schema(concat!(
            "directive @tag(name: String!) on FIELD_DEFINITION | OBJECT\n",
            "directive @unused on FIELD\n",
            "type Query { a: Int @tag(name: \"x\") }",
        ));

        let result = Printer::default().print_schema(&schema)?;
        assert_eq!(result.text(), concat!(
            "directive @tag(name: String!) on FIELD_DEFINITION | OBJECT\n",
            "\n",
            "type Query {\n",
            "    a: Int\n",
            "    @tag(name: \"x\")\n",
            "}\n",
        ));
        assert_eq!(result.used_types(), vec!["String", "Query", "Int"]);
        assert_eq!(result.used_directives(), vec!["@tag"]);

        let printer = Printer::new(
            Settings::default().with_print_directive_definitions(false),
        );
        let result = printer.print_schema(&schema)?;
        assert_eq!(result.text(), concat!(
            "type Query {\n",
            "    a: Int\n",
            "    @tag(name: \"x\")\n",
            "}\n",
        ));

        Ok(())
    }

    #[test]
    fn normalized_schema_groups_by_keyword() -> Result<()> {
        let schema = build_schema(concat!(
            "type Query { a: Int }\n",
            "enum B { X }\n",
            "input A { x: Int }",
        ));
        let printer = Printer::new(
            Settings::default()
                .with_normalize_schema(true)
                .with_print_unused_definitions(true),
        );

        let result = printer.print_schema(&schema)?;

        assert_eq!(result.text(), concat!(
            "enum B {\n",
            "    X\n",
            "}\n",
            "\n",
            "input A {\n",
            "    x: Int\n",
            "}\n",
            "\n",
            "type Query {\n",
            "    a: Int\n",
            "}\n",
        ));

        Ok(())
    }

    #[test]
    fn export_includes_transitive_dependencies() -> Result<()> {
        let schema = build_schema(concat!(
            "type Query { a: A }\n",
            "type A { b: B }\n",
            "type B { c: String }\n",
            "type C { d: Int }",
        ));
        let Some(type_a) = schema.get_type("A") else {
            panic!("`A` is defined");
        };

        let result = Printer::default().export(type_a, &schema)?;

        assert_eq!(result.text(), concat!(
            "type A {\n",
            "    b: B\n",
            "}\n",
            "\n",
            "type B {\n",
            "    c: String\n",
            "}\n",
        ));
        assert_eq!(result.used_types(), vec!["A", "B", "String"]);

        Ok(())
    }

    #[test]
    fn builtin_types_print_nothing() -> Result<()> {
        let schema = build_schema("type Query { a: Int }");

        let result = Printer::default().print_schema_type(&schema, "String")?;

        assert!(result.is_empty());
        assert_eq!(result.text(), "");

        Ok(())
    }
}

mod syntax_tree {
    use super::*;

    #[test]
    fn interfaces_sort_when_normalized() -> Result<()> {
        let doc = parse_schema("type T implements B & A { f: Int }");

        let result = Printer::default().print(&doc)?;
        assert_eq!(result.text(), "type T implements B & A {\n    f: Int\n}\n");

        let printer = Printer::new(Settings::default().with_normalize_interfaces(true));
        let result = printer.print(&doc)?;
        assert_eq!(result.text(), "type T implements A & B {\n    f: Int\n}\n");

        Ok(())
    }

    #[test]
    fn long_argument_list_breaks() -> Result<()> {
        let doc = parse_schema(
            "type Query { search(first: Int, after: String, filter: String): Int }",
        );
        let printer = Printer::new(Settings::default().with_line_length(30));

        let result = printer.print(&doc)?;

        assert_eq!(result.text(), concat!(
            "type Query {\n",
            "    search(\n",
            "        first: Int\n",
            "        after: String\n",
            "        filter: String\n",
            "    ): Int\n",
            "}\n",
        ));

        Ok(())
    }

    #[test]
    fn long_union_breaks_with_leading_pipes() -> Result<()> {
        let doc = parse_schema("union SearchResult = Photo | Person | Document");

        let result = Printer::default().print(&doc)?;
        assert_eq!(result.text(), "union SearchResult = Photo | Person | Document\n");

        let printer = Printer::new(Settings::default().with_line_length(30));
        let result = printer.print(&doc)?;
        assert_eq!(result.text(), concat!(
            "union SearchResult =\n",
            "    | Photo\n",
            "    | Person\n",
            "    | Document\n",
        ));

        Ok(())
    }

    #[test]
    fn descriptions_are_normalized_block_strings() -> Result<()> {
        let doc = parse_schema(concat!(
            "\"Line one  \\n\\n\\n\\nLine two\\n\"\n",
            "type Query {\n",
            "  \"Field description\"\n",
            "  a: String\n",
            "  b: Int\n",
            "}",
        ));

        let result = Printer::default().print(&doc)?;

        assert_eq!(result.text(), concat!(
            "\"\"\"\n",
            "Line one\n",
            "\n",
            "Line two\n",
            "\"\"\"\n",
            "type Query {\n",
            "    \"\"\"\n",
            "    Field description\n",
            "    \"\"\"\n",
            "    a: String\n",
            "\n",
            "    b: Int\n",
            "}\n",
        ));

        Ok(())
    }

    #[test]
    fn type_extension_does_not_register_itself() -> Result<()> {
        let doc = parse_schema("extend type Query @tag { b: Int }");

        let result = Printer::default().print(&doc)?;

        assert_eq!(result.text(), concat!(
            "extend type Query\n",
            "@tag\n",
            "{\n",
            "    b: Int\n",
            "}\n",
        ));
        assert_eq!(result.used_types(), vec!["Int"]);
        assert_eq!(result.used_directives(), vec!["@tag"]);

        Ok(())
    }

    #[test]
    fn graphql_preset_prints_only_builtin_directives() -> Result<()> {
        let doc = parse_schema("type Query { a: Int @deprecated @tag b: Int }");

        let result = Printer::new(Settings::graphql()).print(&doc)?;

        assert_eq!(result.text(), concat!(
            "type Query {\n",
            "    a: Int\n",
            "    @deprecated\n",
            "\n",
            "    b: Int\n",
            "}\n",
        ));
        assert_eq!(result.used_directives(), vec!["@deprecated"]);

        Ok(())
    }

    #[test]
    fn output_starts_at_the_printer_level() -> Result<()> {
        let doc = parse_schema("type Query { a: Int }");

        let result = Printer::default().with_level(1).print(&doc)?;

        assert_eq!(result.text(), "    type Query {\n        a: Int\n    }\n");

        Ok(())
    }

    #[test]
    fn executable_document_without_schema() -> Result<()> {
        let doc = parse_query(concat!(
            "query Q($id: ID!, $n: Int = 10) @live {\n",
            "  user(id: $id) { ...F name ... on Admin { level } }\n",
            "}\n",
            "fragment F on User { email }",
        ));

        let result = Printer::default().print(&doc)?;

        assert_eq!(result.text(), concat!(
            "query Q($id: ID!, $n: Int = 10)\n",
            "@live\n",
            "{\n",
            "    user(id: $id) {\n",
            "        ...F\n",
            "        name\n",
            "        ... on Admin {\n",
            "            level\n",
            "        }\n",
            "    }\n",
            "}\n",
            "\n",
            "fragment F on User {\n",
            "    email\n",
            "}\n",
        ));
        assert_eq!(result.used_types(), vec!["ID", "Int", "Admin", "User"]);
        assert_eq!(result.used_directives(), vec!["@live"]);

        Ok(())
    }

    #[test]
    fn shorthand_query_and_aliases() -> Result<()> {
        let doc = parse_query("{ me: user { id } b }");

        let result = Printer::default().print(&doc)?;

        assert_eq!(result.text(), concat!(
            "{\n",
            "    me: user {\n",
            "        id\n",
            "    }\n",
            "    b\n",
            "}\n",
        ));

        Ok(())
    }

    #[test]
    fn selections_are_typed_against_the_schema() -> Result<()> {
        let schema = build_schema(concat!(
            "type Query { user(id: ID!): User }\n",
            "type User { name: String secret: Secret }\n",
            "type Secret { x: Int }",
        ));
        let doc = parse_query("{ user(id: 1) { name secret { x } } }");
        let printer = Printer::new(
            Settings::default().with_type_filter(NameFilter::deny(["Secret"])),
        );

        let result = printer.print_with_schema(&doc, &schema)?;

        assert_eq!(result.text(), concat!(
            "{\n",
            "    user(id: 1) {\n",
            "        name\n",
            "    }\n",
            "}\n",
        ));
        assert_eq!(result.used_types(), vec!["User", "ID", "String"]);

        Ok(())
    }
}

mod errors {
    use super::*;

    fn print_query(schema_source: &str, query_source: &str) -> Result<String> {
        let schema = build_schema(schema_source);
        let doc = parse_query(query_source);
        Printer::default()
            .print_with_schema(&doc, &schema)
            .map(|result| result.into_text())
    }

    #[test]
    fn unknown_schema_type() {
        let schema = build_schema("type Query { a: Int }");

        let err = Printer::default().print_schema_type(&schema, "Nope").unwrap_err();

        assert_eq!(err, PrintError::TypeNotFound {
            type_name: "Nope".to_string(),
        });
    }

    #[test]
    fn unknown_field() {
        let err = print_query("type Query { a: Int }", "{ b }").unwrap_err();

        assert_eq!(err, PrintError::FieldNotFound {
            type_name: "Query".to_string(),
            field_name: "b".to_string(),
        });
    }

    #[test]
    fn unknown_field_argument() {
        let err = print_query("type Query { a: Int }", "{ a(x: 1) }").unwrap_err();

        assert_eq!(err, PrintError::FieldArgumentNotFound {
            type_name: "Query".to_string(),
            field_name: "a".to_string(),
            argument_name: "x".to_string(),
        });
    }

    #[test]
    fn unknown_directive() {
        let err = print_query("type Query { a: Int }", "{ a @nope }").unwrap_err();

        assert_eq!(err, PrintError::DirectiveDefinitionNotFound {
            directive_name: "nope".to_string(),
        });
    }

    #[test]
    fn unknown_directive_argument() {
        let err = print_query(
            "type Query { a: Int }",
            "{ a @skip(when: true) }",
        ).unwrap_err();

        assert_eq!(err, PrintError::DirectiveArgumentNotFound {
            directive_name: "skip".to_string(),
            argument_name: "when".to_string(),
        });
    }

    #[test]
    fn missing_root_operation_type() {
        let err = print_query("type Query { a: Int }", "mutation { a }").unwrap_err();

        assert_eq!(err, PrintError::TypeNotFound {
            type_name: "Mutation".to_string(),
        });
    }

    #[test]
    fn unknown_names_without_schema_are_printed() -> Result<()> {
        let doc = parse_query("{ a(x: 1) @nope }");

        let result = Printer::default().print(&doc)?;

        assert_eq!(result.text(), "{\n    a(x: 1)\n    @nope\n}\n");

        Ok(())
    }

    #[test]
    fn value_nesting_beyond_max_depth() -> Result<()> {
        use ast::operation::Value;
        let value = Value::List(vec![
            Value::List(vec![
                Value::List(vec![Value::Int(1.into())]),
            ]),
        ]);

        let printer = Printer::new(Settings::default().with_max_depth(3));
        assert_eq!(
            printer.print_value(&value, None, None).unwrap_err(),
            PrintError::DepthLimitExceeded { max_depth: 3 },
        );

        let printer = Printer::new(Settings::default().with_max_depth(4));
        assert_eq!(printer.print_value(&value, None, None)?.text(), "[[[1]]]\n");

        Ok(())
    }

    #[test]
    fn selection_nesting_beyond_max_depth() {
        let doc = parse_query("{ a { b { c } } }");
        let printer = Printer::new(Settings::default().with_max_depth(2));

        assert_eq!(
            printer.print(&doc).unwrap_err(),
            PrintError::DepthLimitExceeded { max_depth: 2 },
        );
    }
}
