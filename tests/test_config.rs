use std::time::Duration;

use httpc::config::Config;

#[test]
fn test_default_timeouts() {
    let cfg = Config::default();

    assert_eq!(cfg.connect_timeout_secs, 10);
    assert_eq!(cfg.read_timeout_secs, 30);
    assert_eq!(cfg.connect_timeout(), Duration::from_secs(10));
    assert_eq!(cfg.read_timeout(), Duration::from_secs(30));
}

#[test]
fn test_from_yaml_overrides_both_timeouts() {
    let cfg = Config::from_yaml("connect_timeout_secs: 3\nread_timeout_secs: 7\n").unwrap();

    assert_eq!(cfg.connect_timeout_secs, 3);
    assert_eq!(cfg.read_timeout_secs, 7);
}

#[test]
fn test_from_yaml_fills_missing_fields_with_defaults() {
    let cfg = Config::from_yaml("connect_timeout_secs: 3\n").unwrap();

    assert_eq!(cfg.connect_timeout_secs, 3);
    assert_eq!(cfg.read_timeout_secs, 30);
}

#[test]
fn test_from_yaml_rejects_garbage() {
    assert!(Config::from_yaml("connect_timeout_secs: [not, a, number]").is_err());
}

#[test]
fn test_load_honors_config_file_and_defaults_without_one() {
    // Both cases in one test: the env var is process-global state.
    unsafe {
        std::env::remove_var("HTTPC_CONFIG");
    }
    let cfg = Config::load();
    assert_eq!(cfg.connect_timeout_secs, 10);

    let path = std::env::temp_dir().join(format!("httpc-test-config-{}.yaml", std::process::id()));
    std::fs::write(&path, "read_timeout_secs: 5\n").unwrap();
    unsafe {
        std::env::set_var("HTTPC_CONFIG", &path);
    }
    let cfg = Config::load();
    assert_eq!(cfg.read_timeout_secs, 5);
    assert_eq!(cfg.connect_timeout_secs, 10);

    unsafe {
        std::env::remove_var("HTTPC_CONFIG");
    }
    std::fs::remove_file(&path).unwrap();
}
