use crate::ast;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::types::deprecation_reason;

fn directives_of(source: &str) -> Vec<ast::operation::Directive> {
    let doc = ast::schema::parse(&format!("scalar S {source}"))
        .expect("directive source parses");
    match doc.definitions.into_iter().next() {
        Some(ast::schema::Definition::TypeDefinition(
            ast::schema::TypeDefinition::Scalar(scalar),
        )) => scalar.directives,
        other => panic!("expected a scalar definition, found {other:?}"),
    }
}

#[test]
fn not_deprecated_without_the_directive() {
    assert_eq!(deprecation_reason(&directives_of("@other(reason: \"x\")")), None);
    assert_eq!(deprecation_reason(&[]), None);
}

#[test]
fn bare_directive_uses_the_default_reason() {
    assert_eq!(
        deprecation_reason(&directives_of("@deprecated")).as_deref(),
        Some(DEFAULT_DEPRECATION_REASON),
    );
}

#[test]
fn explicit_reason_is_returned() {
    assert_eq!(
        deprecation_reason(&directives_of("@tag @deprecated(reason: \"Use b.\")")).as_deref(),
        Some("Use b."),
    );
}

#[test]
fn non_string_reason_falls_back_to_the_default() {
    assert_eq!(
        deprecation_reason(&directives_of("@deprecated(reason: null)")).as_deref(),
        Some(DEFAULT_DEPRECATION_REASON),
    );
}
