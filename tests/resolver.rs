use pyimports::core::resolver::{resolve_module_name, resolve_relative_to, ModuleName};
use std::path::Path;

#[test]
fn package_initializer_resolves_to_package() {
    let name = resolve_module_name(Path::new("pkg/sub/__init__.py")).unwrap();
    assert_eq!(name.as_str(), "pkg.sub");
}

#[test]
fn regular_module_keeps_every_segment() {
    let name = resolve_module_name(Path::new("pkg/sub/mod.py")).unwrap();
    assert_eq!(name.as_str(), "pkg.sub.mod");
}

#[test]
fn non_source_files_do_not_resolve() {
    assert!(resolve_module_name(Path::new("pkg/readme.md")).is_none());
    assert!(resolve_module_name(Path::new("pkg/Makefile")).is_none());
    assert!(resolve_module_name(Path::new("pkg/mod.pyc")).is_none());
}

#[test]
fn lone_initializer_has_no_name() {
    assert!(resolve_module_name(Path::new("__init__.py")).is_none());
}

#[test]
fn module_name_serializes_as_plain_string() {
    let name = ModuleName::new("pkg.mod").unwrap();
    assert_eq!(serde_json::to_string(&name).unwrap(), "\"pkg.mod\"");

    let parsed: ModuleName = serde_json::from_str("\"pkg.__init__\"").unwrap();
    assert_eq!(parsed.as_str(), "pkg");
    assert!(serde_json::from_str::<ModuleName>("\"\"").is_err());
}

#[test]
fn initializer_suffix_is_collapsed_only_as_a_whole_component() {
    assert_eq!(ModuleName::new("pkg.__init__").unwrap().as_str(), "pkg");
    assert!(ModuleName::new("").is_none());
    assert_eq!(ModuleName::new("my__init__").unwrap().as_str(), "my__init__");
}

#[test]
fn root_and_parent_components_are_ignored() {
    let name = resolve_module_name(Path::new("/./pkg/../mod.py")).unwrap();
    assert_eq!(name.as_str(), "pkg.mod");
}

#[test]
fn paths_outside_the_base_keep_their_full_name() {
    let name = resolve_relative_to(Path::new("other/x.py"), Path::new("base")).unwrap();
    assert_eq!(name.as_str(), "other.x");

    let name = resolve_relative_to(Path::new("base/pkg/x.py"), Path::new("base")).unwrap();
    assert_eq!(name.as_str(), "pkg.x");
}

#[test]
fn dotted_directory_names_are_kept_verbatim() {
    // A `.venv` segment joins as `..venv`; the empty segment is not repaired.
    let name = resolve_module_name(Path::new("proj/.venv/v.py")).unwrap();
    assert_eq!(name.as_str(), "proj..venv.v");
}
