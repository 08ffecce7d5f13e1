#[cfg(test)]
mod tests {
    use prazo::libs::config::{Config, ForumConfig, ServerConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.server.is_none());
        assert!(config.forum.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_without_file_returns_default(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.server.is_none());
        assert!(config.forum.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: "http://localhost:3000".to_string(),
            }),
            forum: Some(ForumConfig { author_id: "7".to_string() }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.server, config.server);
        assert_eq!(loaded.forum, config.forum);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unconfigured_modules_are_omitted_from_json(_ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: "http://localhost:3000".to_string(),
            }),
            forum: None,
        };

        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("forum").is_none());
    }
}
