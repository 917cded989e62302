use crate::DerefByNameError;
use crate::ast;
use crate::schema::SchemaBuilder;
use crate::types::TypeAnnotation;

fn parse_type(source: &str) -> ast::operation::Type {
    let doc = ast::schema::parse(&format!("type T {{ f: {source} }}"))
        .expect("type source parses");
    match doc.definitions.into_iter().next() {
        Some(ast::schema::Definition::TypeDefinition(
            ast::schema::TypeDefinition::Object(mut obj),
        )) => obj.fields.remove(0).field_type,
        other => panic!("expected an object type, found {other:?}"),
    }
}

#[test]
fn named_annotation_from_ast() {
    let annot = TypeAnnotation::from_ast_type(&parse_type("String!"));

    assert!(matches!(&annot, TypeAnnotation::Named { nullable: false, .. }));
    assert_eq!(annot.innermost_type_name(), "String");
    assert!(!annot.is_list());
}

#[test]
fn nested_list_annotation_from_ast() {
    let annot = TypeAnnotation::from_ast_type(&parse_type("[[Int!]]!"));

    assert!(!annot.nullable());
    assert!(annot.is_list());
    assert_eq!(annot.innermost_type_name(), "Int");

    let TypeAnnotation::List { item, .. } = &annot else {
        panic!("expected a list annotation, found {annot:?}");
    };
    assert!(item.nullable());
    assert!(item.is_list());
    assert!(!item.item_type_annotation().nullable());
}

#[test]
fn named_type_refs_resolve_against_a_schema() {
    let schema = SchemaBuilder::new()
        .load_str(None, "type Query { a: Int }")
        .and_then(|builder| builder.build())
        .expect("schema builds");

    let TypeAnnotation::Named { type_ref, .. } =
        TypeAnnotation::from_ast_type(&parse_type("Query!")) else {
        panic!("expected a named annotation");
    };
    assert_eq!(type_ref.deref(&schema).map(|type_| type_.name()), Ok("Query"));

    let TypeAnnotation::Named { type_ref, .. } =
        TypeAnnotation::from_ast_type(&parse_type("Nope")) else {
        panic!("expected a named annotation");
    };
    assert_eq!(
        type_ref.deref(&schema),
        Err(DerefByNameError::DanglingReference("Nope".to_string())),
    );
}

#[test]
fn item_type_steps_one_list_level_down() {
    let annot = TypeAnnotation::from_ast_type(&parse_type("[[ID]!]"));

    let item = annot.item_type_annotation();
    assert_eq!(item.to_string(), "[ID]!");
    assert_eq!(item.item_type_annotation().to_string(), "ID");
    assert_eq!(
        item.item_type_annotation().item_type_annotation().to_string(),
        "ID",
    );
}

#[test]
fn display_matches_the_source() {
    for source in ["Int", "Int!", "[Int]", "[Int!]!", "[[String]!]"] {
        let annot = TypeAnnotation::from_ast_type(&parse_type(source));
        assert_eq!(annot.to_string(), source);
    }
}

#[test]
fn converts_back_to_the_same_ast_type() {
    for source in ["Boolean", "[Float!]", "[[ID!]!]!"] {
        let ast_type = parse_type(source);
        assert_eq!(TypeAnnotation::from_ast_type(&ast_type).to_ast_type(), ast_type);
    }
}
