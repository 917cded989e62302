use std::fmt::Write;

pub const COMPLEX_QUERY: &str = r#"
query Dashboard($first: Int = 10, $after: String, $filter: Filter = {limit: 5, tags: ["a", "b"]}) {
  viewer {
    ...Identity
    entities(first: $first, after: $after, filter: $filter) {
      __typename
      ... on Entity0 {
        id
        label: name
        related(first: 3) { id name }
      }
      ... on Entity1 @include(if: true) {
        id
        score
      }
    }
  }
}

fragment Identity on Entity0 {
  id
  name
}
"#;

/// A schema with `count` object types, each linked to the next one, plus a
/// union over all of them and a `Query` root reaching the first.
pub fn synthetic_schema(count: usize) -> String {
    let mut schema = String::from(concat!(
        "directive @tag(name: String!) repeatable on OBJECT | FIELD_DEFINITION\n\n",
        "input Filter { limit: Int = 10 tags: [String!] }\n\n",
        "interface Node { id: ID! }\n\n",
        "type Query {\n",
        "  viewer: Entity0\n",
        "  search(term: String!, filter: Filter): [Result!]!\n",
        "}\n\n",
    ));

    for index in 0..count {
        let next = (index + 1) % count;
        let _ = write!(
            schema,
            concat!(
                "\"\"\"\nEntity number {index}.\n\"\"\"\n",
                "type Entity{index} implements Node @tag(name: \"e{index}\") {{\n",
                "  id: ID!\n",
                "  name: String @deprecated(reason: \"Use `label`.\")\n",
                "  score: Float\n",
                "  entities(first: Int = 10, after: String, filter: Filter): [Entity{next}!]!\n",
                "  related(first: Int = 3): [Entity{next}]\n",
                "}}\n\n",
            ),
            index = index,
            next = next,
        );
    }

    let members: Vec<String> = (0..count).map(|index| format!("Entity{index}")).collect();
    let _ = writeln!(schema, "union Result = {}", members.join(" | "));
    schema
}
