use crate::ast;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;

pub(crate) fn build_schema(source: &str) -> Schema {
    SchemaBuilder::new()
        .load_str(None, source)
        .expect("schema source parses")
        .build()
        .expect("schema builds")
}

pub(crate) fn parse_query(source: &str) -> ast::query::Document {
    ast::query::parse(source).expect("query source parses")
}

pub(crate) fn parse_schema(source: &str) -> ast::schema::Document {
    ast::schema::parse(source).expect("schema source parses")
}
