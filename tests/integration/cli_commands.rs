//! Integration tests for CLI commands routed through RunContext

use layerconf::cli::{map_error, Commands, RunContext};
use layerconf::config::DEFAULT_INDEX_URL;
use layerconf::ConfigError;
use tempfile::TempDir;

use crate::integration::with_home_env;

fn project_dir(test_dir: &TempDir) -> std::path::PathBuf {
    let project = test_dir.path().join("project");
    std::fs::create_dir_all(&project).unwrap();
    project
}

#[test]
fn test_get_default_index_url() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, || {
        let mut ctx = RunContext::new(project_dir(&test_dir)).unwrap();
        let output = ctx
            .execute(&Commands::Get {
                key: "pypi.url".to_string(),
            })
            .unwrap();
        assert_eq!(output, DEFAULT_INDEX_URL);
    });
}

#[test]
fn test_default_cache_dir_follows_xdg_cache_home() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, || {
        let mut ctx = RunContext::new(project_dir(&test_dir)).unwrap();
        let output = ctx
            .execute(&Commands::Get {
                key: "cache_dir".to_string(),
            })
            .unwrap();
        assert!(output.starts_with(test_dir.path().join("cache").to_str().unwrap()));
    });
}

#[test]
fn test_set_global_writes_home_config() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, || {
        let project = project_dir(&test_dir);
        let mut ctx = RunContext::new(project.clone()).unwrap();
        ctx.execute(&Commands::Set {
            key: "cache_dir".to_string(),
            value: "/tmp/layerconf-cache".to_string(),
            global: true,
        })
        .unwrap();

        let home_file = test_dir
            .path()
            .join("home")
            .join(".layerconf")
            .join("config.toml");
        let written = std::fs::read_to_string(&home_file).unwrap();
        assert!(written.contains("/tmp/layerconf-cache"));
        assert!(!project.join(".layerconf.toml").exists());

        let mut reopened = RunContext::new(project).unwrap();
        let output = reopened
            .execute(&Commands::Get {
                key: "cache_dir".to_string(),
            })
            .unwrap();
        assert_eq!(output, "/tmp/layerconf-cache");
    });
}

#[test]
fn test_set_global_reports_project_override() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, || {
        let project = project_dir(&test_dir);
        std::fs::write(project.join(".layerconf.toml"), "[python]\npath = \"/proj\"\n").unwrap();

        let mut ctx = RunContext::new(project.clone()).unwrap();
        let output = ctx
            .execute(&Commands::Set {
                key: "python.path".to_string(),
                value: "/home".to_string(),
                global: true,
            })
            .unwrap();
        assert!(output.starts_with("Config item python.path set to /home"));
        assert!(output.contains("effective value is /proj"));

        let list = ctx
            .execute(&Commands::List {
                format: "json".to_string(),
            })
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&list).unwrap();
        let row = parsed["items"]
            .as_array()
            .unwrap()
            .iter()
            .find(|item| item["key"] == "python.path")
            .unwrap();
        assert_eq!(row["value"], "/home");
        assert_eq!(row["source"], "home");

        let mut reopened = RunContext::new(project).unwrap();
        let output = reopened
            .execute(&Commands::Get {
                key: "python.path".to_string(),
            })
            .unwrap();
        assert_eq!(output, "/proj");
    });
}

#[test]
fn test_set_project_has_no_override_note() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, || {
        let mut ctx = RunContext::new(project_dir(&test_dir)).unwrap();
        let output = ctx
            .execute(&Commands::Set {
                key: "python.path".to_string(),
                value: "/bin/python".to_string(),
                global: false,
            })
            .unwrap();
        assert!(!output.contains("overridden"));
    });
}

#[test]
fn test_set_restricted_key_in_project_fails() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, || {
        let project = project_dir(&test_dir);
        let mut ctx = RunContext::new(project.clone()).unwrap();
        let err = ctx
            .execute(&Commands::Set {
                key: "cache_dir".to_string(),
                value: "/tmp/x".to_string(),
                global: false,
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::RestrictedKeyInProjectSave { .. }));
        assert!(map_error(&err).contains("cache_dir"));
        assert!(!project.join(".layerconf.toml").exists());
    });
}

#[test]
fn test_set_boolean_reports_coerced_value() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, || {
        let mut ctx = RunContext::new(project_dir(&test_dir)).unwrap();
        let output = ctx
            .execute(&Commands::Set {
                key: "python.use_pyenv".to_string(),
                value: "FALSE".to_string(),
                global: false,
            })
            .unwrap();
        assert!(output.starts_with("Config item python.use_pyenv set to false"));
    });
}

#[test]
fn test_unset_and_unknown_keys_fail() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, || {
        let mut ctx = RunContext::new(project_dir(&test_dir)).unwrap();

        let err = ctx
            .execute(&Commands::Unset {
                key: "pypi.url".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedOperation(_)));

        let err = ctx
            .execute(&Commands::Set {
                key: "not.a.real.key".to_string(),
                value: "1".to_string(),
                global: true,
            })
            .unwrap_err();
        assert_eq!(map_error(&err), "No such config item: not.a.real.key");
    });
}

#[test]
fn test_list_json_includes_sources() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, || {
        let project = project_dir(&test_dir);
        std::fs::write(
            project.join(".layerconf.toml"),
            "[python]\npath = \"/bin/python\"\n",
        )
        .unwrap();

        let mut ctx = RunContext::new(project).unwrap();
        let output = ctx
            .execute(&Commands::List {
                format: "json".to_string(),
            })
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let items = parsed["items"].as_array().unwrap();
        assert_eq!(parsed["total"], items.len());

        let python_path = items
            .iter()
            .find(|item| item["key"] == "python.path")
            .unwrap();
        assert_eq!(python_path["source"], "project");
        assert_eq!(python_path["value"], "/bin/python");
    });
}

#[test]
fn test_keys_lists_registry() {
    let test_dir = TempDir::new().unwrap();
    with_home_env(&test_dir, || {
        let mut ctx = RunContext::new(project_dir(&test_dir)).unwrap();
        let output = ctx
            .execute(&Commands::Keys {
                format: "text".to_string(),
            })
            .unwrap();
        assert!(output.contains("python.use_pyenv"));
        assert!(output.contains("Total: 5 item(s)"));
    });
}
