use crate::commands::CommandEnum;
use crate::commands::tests::utils::fixture_dir;
use crate::commands::tests::utils::parse_cli;

fn file_names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths.iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn discovers_matching_files_recursively() {
    let dir = fixture_dir("discover", &[
        ("a.graphql", "type Query { a: Int }"),
        ("notes.txt", "not graphql"),
        ("nested/b.graphqls", "type B { b: Int }"),
    ]);
    let path = dir.to_string_lossy().into_owned();

    let Some(CommandEnum::Validate(cmd)) = parse_cli(&["validate", &path]).unwrap().cmd else {
        panic!("expected a validate command");
    };
    let discovered = cmd.inputs.discover().unwrap();

    assert_eq!(file_names(&discovered.file_paths), vec!["a.graphql", "b.graphqls"]);
    assert_eq!(discovered.num_skipped, 1);
}

#[test]
fn custom_extensions_accept_a_leading_dot() {
    let dir = fixture_dir("custom-exts", &[
        ("a.graphql", "type Query { a: Int }"),
        ("b.gql", "type B { b: Int }"),
    ]);
    let path = dir.to_string_lossy().into_owned();

    let Some(CommandEnum::Validate(cmd)) =
        parse_cli(&["validate", "--graphql-file-exts", ".gql", &path]).unwrap().cmd else {
        panic!("expected a validate command");
    };
    let discovered = cmd.inputs.discover().unwrap();

    assert_eq!(file_names(&discovered.file_paths), vec!["b.gql"]);
}

#[test]
fn single_explicit_file_is_loaded_regardless_of_extension() {
    let dir = fixture_dir("explicit-file", &[("schema.txt", "type Query { a: Int }")]);
    let path = dir.join("schema.txt").to_string_lossy().into_owned();

    let Some(CommandEnum::Validate(cmd)) = parse_cli(&["validate", &path]).unwrap().cmd else {
        panic!("expected a validate command");
    };
    let discovered = cmd.inputs.discover().unwrap();

    assert_eq!(file_names(&discovered.file_paths), vec!["schema.txt"]);
    assert_eq!(discovered.num_skipped, 0);
}

#[test]
fn missing_path_is_an_error() {
    let dir = fixture_dir("missing", &[]);
    let path = dir.join("nope").to_string_lossy().into_owned();

    let Some(CommandEnum::Validate(cmd)) = parse_cli(&["validate", &path]).unwrap().cmd else {
        panic!("expected a validate command");
    };

    assert!(cmd.inputs.discover().is_err());
}
