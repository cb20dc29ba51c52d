use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const WIDGET_FILES: [&str; 5] =
    ["mod.rs", "event.rs", "model.rs", "reducer.rs", "state.rs"];

#[test]
fn given_widgets_when_validating_layout_then_all_modules_comply() {
    let widgets_dir = source_dir().join("widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        if let Item::Mod(item_mod) = item {
            if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                declared_modules.insert(item_mod.ident.to_string());
            } else {
                violations.push(format!(
                    "{}: module declaration '{}' must be pub(crate) mod <name>;",
                    mod_rs.display(),
                    item_mod.ident
                ));
            }
        }

        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            }
        }
    }

    let mut fs_modules = BTreeSet::new();
    for path in read_dir(&widgets_dir) {
        if path.is_dir() {
            fs_modules.insert(file_stem(&path));
        } else if path.extension().is_some_and(|ext| ext == "rs")
            && !path.ends_with("mod.rs")
        {
            violations.push(format!(
                "{}: widgets must live in their own directory",
                path.display()
            ));
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match widget directories {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        validate_widget_dir(&widgets_dir.join(module), &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_primitive_components_when_validating_then_each_exposes_one_view() {
    let primitives_dir = source_dir().join("components/primitive");
    let mut violations: Vec<String> = Vec::new();

    for path in read_dir(&primitives_dir) {
        if path.ends_with("mod.rs")
            || path.extension().is_none_or(|ext| ext != "rs")
        {
            continue;
        }

        let prefix = snake_to_pascal_case(&file_stem(&path));
        validate_view_file(&path, &prefix, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "component convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget_dir(widget_dir: &Path, violations: &mut Vec<String>) {
    for required in WIDGET_FILES {
        let path = widget_dir.join(required);
        if !path.is_file() {
            violations.push(format!(
                "{}: missing required widget file {required}",
                widget_dir.display()
            ));
            continue;
        }

        let source = read(&path);
        if source.contains("crate::app") || source.contains("crate::routers")
        {
            violations.push(format!(
                "{}: widgets must not depend on app orchestration",
                path.display()
            ));
        }

        let file = parse(&path);
        for item in &file.items {
            if let Item::Use(item_use) = item {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard use/import is forbidden",
                        path.display()
                    ));
                }
            }
        }
    }

    let view_dir = widget_dir.join("view");
    if !view_dir.is_dir() {
        violations.push(format!(
            "{}: missing view directory",
            widget_dir.display()
        ));
        return;
    }

    let widget_prefix = snake_to_pascal_case(&file_stem(widget_dir));
    for path in read_dir(&view_dir) {
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }

        let prefix = if path.ends_with("mod.rs") {
            widget_prefix.clone()
        } else {
            snake_to_pascal_case(&file_stem(&path))
        };
        validate_view_file(&path, &prefix, violations);
    }
}

fn validate_view_file(
    file_path: &Path,
    expected_prefix: &str,
    violations: &mut Vec<String>,
) {
    let source = read(file_path);
    let file = parse(file_path);

    for forbidden in [
        "log::",
        "std::fs::",
        "std::process::Command",
        "tokio::spawn",
        "Task::",
        "iced::Task",
        "crate::app",
        "crate::config",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }
    for forbidden in ["Instant::now", "chrono::", ".elapsed("] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden runtime-time pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) => {
                if item_fn.sig.ident == "view" {
                    if is_pub_crate(&item_fn.vis) {
                        view_count += 1;
                    } else {
                        violations.push(format!(
                            "{}: view must be pub(crate)",
                            file_path.display()
                        ));
                    }
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Use(item_use) => {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard use/import is forbidden",
                        file_path.display()
                    ));
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }

    for name in props_names {
        if !name.starts_with(expected_prefix) {
            violations.push(format!(
                "{}: props type '{name}' must start with '{expected_prefix}'",
                file_path.display()
            ));
        }
    }
}

fn source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src")
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn read_dir(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });

    let mut paths: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| {
                    panic!("failed to read dir entry: {err}")
                })
                .path()
        })
        .collect();
    paths.sort();
    paths
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
