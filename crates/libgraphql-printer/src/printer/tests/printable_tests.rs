use crate::Printable;
use crate::ast;
use crate::schema::SchemaBuilder;

#[test]
fn syntax_tree_nodes_convert_to_their_variants() {
    let schema_doc = ast::schema::parse("type T { f(a: Int): [T] }").expect("schema parses");
    let query_doc = ast::query::parse("query Q($v: Int) { f }").expect("query parses");

    assert!(matches!(Printable::from(&schema_doc), Printable::SchemaDocument(_)));
    assert!(matches!(
        Printable::from(&schema_doc.definitions[0]),
        Printable::SchemaDocumentDefinition(_),
    ));
    assert!(matches!(Printable::from(&query_doc), Printable::ExecutableDocument(_)));
    assert!(matches!(
        Printable::from(&query_doc.definitions[0]),
        Printable::ExecutableDefinition(_),
    ));

    let ast::schema::Definition::TypeDefinition(
        ast::schema::TypeDefinition::Object(obj),
    ) = &schema_doc.definitions[0] else {
        panic!("expected an object type");
    };
    let field = &obj.fields[0];
    assert!(matches!(Printable::from(field), Printable::FieldDefinition(_)));
    assert!(matches!(
        Printable::from(&field.arguments[0]),
        Printable::InputValueDefinition(_),
    ));
    assert!(matches!(Printable::from(&field.field_type), Printable::TypeReference(_)));
}

#[test]
fn runtime_values_convert_to_their_variants() {
    let schema = SchemaBuilder::new()
        .load_str(None, "type Query { f(a: Int): Int } enum E { A } input I { b: Int }")
        .and_then(|builder| builder.build())
        .expect("schema builds");

    let query = schema.get_type("Query").expect("Query is defined");
    let field = &query.as_object().expect("Query is an object").fields()["f"];
    let enum_type = schema.get_type("E").and_then(|type_| type_.as_enum()).expect("E is an enum");
    let input = schema.get_type("I")
        .and_then(|type_| type_.as_input_object())
        .expect("I is an input object");

    assert!(matches!(Printable::from(&schema), Printable::Schema(_)));
    assert!(matches!(Printable::from(query), Printable::GraphQLType(_)));
    assert!(matches!(Printable::from(field), Printable::Field(_)));
    assert!(matches!(Printable::from(&field.parameters()["a"]), Printable::Parameter(_)));
    assert!(matches!(Printable::from(&enum_type.values()["A"]), Printable::EnumValue(_)));
    assert!(matches!(Printable::from(&input.fields()["b"]), Printable::InputField(_)));
    assert!(matches!(
        Printable::from(schema.get_directive("skip").expect("skip is built in")),
        Printable::Directive(_),
    ));
}
