//! Integration tests for discovery, enablement, and reset.

mod helpers;

use helpers::TestModules;
use modhub_core::error::ErrorKind;
use modhub_core::traits::EnablementConfig;
use modhub_registry::{ModuleInfo, ModuleRegistry};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_list_modules_sorted_and_cached() {
    let modules = TestModules::new();
    for name in ["views", "blog", "system", ".git"] {
        modules.module(name);
    }
    std::fs::write(modules.root().join("README.md"), "").expect("write");

    let registry = modules.registry();
    assert_eq!(registry.list_modules().unwrap(), vec!["blog", "system", "views"]);

    modules.module("later");
    assert_eq!(registry.list_modules().unwrap().len(), 3);
    assert_eq!(modules.fs.list_dirs_count(), 1);
}

#[test]
fn test_missing_root_is_filesystem_error() {
    let modules = TestModules::new();
    let registry = ModuleRegistry::builder(modules.root().join("absent"))
        .filesystem(modules.fs.clone())
        .build();

    let err = registry.list_modules().unwrap_err();
    assert_eq!(err.kind, ErrorKind::Filesystem);

    // Failures are not cached.
    std::fs::create_dir(modules.root().join("absent")).expect("mkdir");
    assert!(registry.list_modules().unwrap().is_empty());
}

#[test]
fn test_core_modules_enabled_by_default() {
    let modules = TestModules::new();
    modules.module("system");
    modules.module("blog");

    let registry = modules.registry();
    assert!(registry.is_enabled("system").unwrap());
    assert!(!registry.is_enabled("blog").unwrap());
}

#[test]
fn test_explicit_entries_override_core_set() {
    let modules = TestModules::new();
    modules.module("system");
    modules.module("blog");
    modules.configure(
        EnablementConfig::with_core(["system"])
            .with_entry("system", json!(false))
            .with_entry("blog", json!(true)),
    );

    let registry = modules.registry();
    assert!(!registry.is_enabled("system").unwrap());
    assert!(registry.is_enabled("blog").unwrap());
}

#[test]
fn test_missing_directory_is_never_enabled() {
    let modules = TestModules::new();
    modules.configure(EnablementConfig::with_core(["user"]).with_entry("ghost", json!(true)));

    let registry = modules.registry();
    assert!(!registry.is_enabled("user").unwrap());
    assert!(!registry.is_enabled("ghost").unwrap());
    assert!(!registry.is_enabled("../outside").unwrap());
}

#[test]
fn test_allow_list_restricts_installed_set() {
    let modules = TestModules::new();
    modules.module("system");
    modules.module("blog");
    modules.configure(
        EnablementConfig::with_core(["system"])
            .with_entry("blog", json!(true))
            .with_allow_list(["system"]),
    );

    let registry = modules.registry();
    assert!(registry.is_enabled("system").unwrap());
    assert!(!registry.is_enabled("blog").unwrap());
}

#[test]
fn test_decision_checks_disk_once() {
    let modules = TestModules::new();
    modules.module("blog");
    modules.configure(EnablementConfig::default().with_entry("blog", json!(true)));

    let registry = modules.registry();
    for _ in 0..5 {
        assert!(registry.is_enabled("blog").unwrap());
    }
    assert_eq!(modules.fs.is_dir_count(), 1);
}

#[test]
fn test_invalid_enable_value_is_not_cached() {
    let modules = TestModules::new();
    modules.module("blog");
    modules.configure(EnablementConfig::default().with_entry("blog", json!("yes")));

    let registry = modules.registry();
    let err = registry.is_enabled("blog").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
    assert!(err.message.contains("blog"));

    modules.configure(EnablementConfig::default().with_entry("blog", json!(true)));
    assert!(registry.is_enabled("blog").unwrap());
}

#[test]
fn test_reset_reevaluates_after_config_change() {
    let modules = TestModules::new();
    modules.module_with_hooks("blog", &["routes"]);
    modules.configure(EnablementConfig::default().with_entry("blog", json!(true)));

    let registry = modules.registry();
    assert!(registry.is_enabled("blog").unwrap());
    assert_eq!(registry.hooks_for("blog").unwrap().len(), 1);
    assert_eq!(registry.list_modules().unwrap(), vec!["blog"]);

    modules.configure(EnablementConfig::default().with_entry("blog", json!(false)));
    modules.module_with_hooks("blog", &["menu"]);
    modules.module("forum");

    // Cached until reset.
    assert!(registry.is_enabled("blog").unwrap());
    assert_eq!(registry.hooks_for("blog").unwrap().len(), 1);

    registry.reset();
    assert!(!registry.is_enabled("blog").unwrap());
    assert_eq!(registry.hooks_for("blog").unwrap().len(), 2);
    assert_eq!(registry.list_modules().unwrap(), vec!["blog", "forum"]);
}

#[test]
fn test_explicit_config_bypasses_source() {
    let modules = TestModules::new();
    modules.module("blog");

    let registry = modules.registry();
    let config = EnablementConfig::default().with_entry("blog", json!(true));
    assert!(registry.is_enabled_with("blog", &config).unwrap());
    // The decision is shared with source-driven lookups.
    assert!(registry.is_enabled("blog").unwrap());
}

#[test]
fn test_module_info() {
    let modules = TestModules::new();
    modules.module_with_hooks("blog", &["routes", "menu"]);
    modules.module("system");

    let registry = modules.registry();
    assert_eq!(
        registry.modules_info().unwrap(),
        vec![
            ModuleInfo {
                name: "blog".into(),
                enabled: false,
                hooks: vec!["menu".into(), "routes".into()],
                error: None,
            },
            ModuleInfo {
                name: "system".into(),
                enabled: true,
                hooks: Vec::new(),
                error: None,
            },
        ]
    );
    assert_eq!(registry.enabled_modules().unwrap(), vec!["system"]);

    let err = registry.module_info("ghost").unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_invalid_entry_is_reported_per_module() {
    let modules = TestModules::new();
    modules.module_with_hooks("blog", &["routes"]);
    modules.module("system");
    modules.configure(EnablementConfig::with_core(["system"]).with_entry("blog", json!("yes")));

    let registry = modules.registry();
    let infos = registry.modules_info().unwrap();
    assert_eq!(infos.len(), 2);

    let blog = &infos[0];
    assert_eq!(blog.name, "blog");
    assert!(!blog.enabled);
    assert_eq!(blog.hooks, vec!["routes"]);
    assert!(blog.error.as_deref().unwrap().contains("invalid enable value"));

    assert_eq!(
        infos[1],
        ModuleInfo {
            name: "system".into(),
            enabled: true,
            hooks: Vec::new(),
            error: None,
        }
    );

    // A single-module lookup still surfaces the error.
    let err = registry.module_info("blog").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
}
