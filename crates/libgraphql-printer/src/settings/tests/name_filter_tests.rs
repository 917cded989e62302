use crate::settings::NameFilter;

#[test]
fn allow_only_ignores_builtin_status() {
    let filter = NameFilter::allow_only(["Query", "String"]);

    assert!(filter.allows("Query", false));
    assert!(filter.allows("String", true));
    assert!(!filter.allows("Int", true));
    assert!(!filter.allows("User", false));
}

#[test]
fn deny_allows_everything_else() {
    let filter = NameFilter::deny(vec!["Secret".to_string()]);

    assert!(!filter.allows("Secret", false));
    assert!(filter.allows("Public", false));
    assert!(filter.allows("Int", true));
}

#[test]
fn builtin_only() {
    let filter = NameFilter::builtin_only();

    assert!(filter.allows("deprecated", true));
    assert!(!filter.allows("tag", false));
}

#[test]
fn custom_predicate() {
    let filter = NameFilter::new(|name, _| name.starts_with("Public"));

    assert!(filter.allows("PublicUser", false));
    assert!(!filter.allows("User", false));
    assert_eq!(format!("{filter:?}"), "NameFilter(..)");
}
