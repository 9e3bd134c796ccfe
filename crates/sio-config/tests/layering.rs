//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed env vars and working directory.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use sio_config::SioConfig;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://tutor.example.com/api"
timeout_secs = 15

[session]
use_keyring = false
keyring_service = "sounditout-cli-test"
token_env_var = "TUTOR_TOKEN"
credentials_file = "/tmp/sio-credentials"

[general]
default_search_k = 8
"#,
        )?;

        let config: SioConfig = Figment::from(Serialized::defaults(SioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url(), "https://tutor.example.com/api");
        assert_eq!(config.api.timeout_secs, 15);
        assert!(!config.session.use_keyring);
        assert_eq!(config.session.keyring_service, "sounditout-cli-test");
        assert_eq!(config.session.token_env_var, "TUTOR_TOKEN");
        assert_eq!(
            config.session.credentials_file.as_deref(),
            Some(std::path::Path::new("/tmp/sio-credentials"))
        );
        assert_eq!(config.general.default_search_k, 8);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sounditout")?;
        jail.create_file(
            ".sounditout/config.toml",
            r#"
[api]
base_url = "http://staging.local/api"
"#,
        )?;

        let config = SioConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "http://staging.local/api");
        assert_eq!(config.api.timeout_secs, 60);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sounditout")?;
        jail.create_file(
            ".sounditout/config.toml",
            r#"
[api]
base_url = "http://from-file/api"
"#,
        )?;
        jail.set_env("SOUNDITOUT_API__BASE_URL", "http://from-env/api");
        jail.set_env("SOUNDITOUT_GENERAL__DEFAULT_SEARCH_K", "3");

        let config = SioConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "http://from-env/api");
        assert_eq!(config.general.default_search_k, 3);
        Ok(())
    });
}

#[test]
fn token_variable_does_not_break_extraction() {
    Jail::expect_with(|jail| {
        jail.set_env("SOUNDITOUT_AUTH__TOKEN", "a.b.c");
        let config = SioConfig::load().expect("config loads");
        assert_eq!(config.session.token_env_var, "SOUNDITOUT_AUTH__TOKEN");
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("SOUNDITOUT_API__BASE_URL", "ftp://nope");
        let err = SioConfig::load().unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
        Ok(())
    });
}
