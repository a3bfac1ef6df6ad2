use ashy_kernel::config::{ConfigError, load_config};
use ashy_kernel::domain::config::ApiConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_file_without_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("server.toml"),
        r#"
[server]
port = 7001

[storage]
static_dir = "public"

[feedback]
tips = ["Notice how the colors make you feel."]
"#,
    )?;

    let cfg: ApiConfig = load_config(Some(dir.path().join("server")))?;

    assert_eq!(cfg.server.port, 7001);
    assert_eq!(cfg.storage.static_dir.as_deref(), Some(std::path::Path::new("public")));
    assert_eq!(cfg.feedback.tips, ["Notice how the colors make you feel."]);
    assert_eq!(cfg.logging.level, "info");
    Ok(())
}

#[test]
fn missing_file_reports_path_context() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("absent");

    let err = load_config::<ApiConfig>(Some(&missing)).expect_err("file is required");

    let ConfigError::Config { context, .. } = &err;
    assert!(context.as_deref().is_some_and(|c| c.starts_with("reading")));
    assert!(err.to_string().contains("absent"));
}

#[test]
fn type_mismatch_is_a_deserialize_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[server]\nport = \"not a port\"\n")?;

    let err = load_config::<ApiConfig>(Some(&path)).expect_err("port must be numeric");
    assert!(err.to_string().contains("deserializing configuration"));
    Ok(())
}
