use super::*;

#[test]
fn file_keys_are_always_present() {
    let id = SymbolId::parse("method example/pkg.Type#Method().");
    let context = build_context("internal/pkg/type.go", &id, None);

    assert_eq!(context.get(FILE_PATH_KEY).map(String::as_str), Some("internal/pkg/type.go"));
    assert_eq!(context.get(FILE_NAME_KEY).map(String::as_str), Some("type.go"));
    assert!(!context.contains_key(MODULE_KEY));
    assert!(!context.contains_key(STRUCT_NAME_KEY));
    assert!(!context.contains_key(SNIPPET_KEY));
}

#[test]
fn module_and_struct_name_come_from_identifier() {
    let id = SymbolId::parse("rust-analyzer cargo app 0.1.0 impl Server start().");
    let context = build_context("src/server.rs", &id, Some("fn start(&self) {\n}"));

    assert_eq!(context.get(MODULE_KEY).map(String::as_str), Some("0.1.0"));
    assert_eq!(context.get(STRUCT_NAME_KEY).map(String::as_str), Some("Server"));
    assert_eq!(context.get(SNIPPET_KEY).map(String::as_str), Some("fn start(&self) {\n}"));
    assert_eq!(context.len(), 5);
}

#[test]
fn empty_snippet_is_omitted() {
    let id = SymbolId::parse("local 3");
    let context = build_context("main.go", &id, Some(""));
    assert_eq!(context.len(), 2);
    assert_eq!(context.get(FILE_NAME_KEY).map(String::as_str), Some("main.go"));
}
