#[cfg(test)]
mod tests {
    use projects::libs::config::{Config, DatabaseConfig, CONFIG_FILE_NAME};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Keeps config files inside a temporary directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join(CONFIG_FILE_NAME)
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.database.path.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            database: DatabaseConfig {
                path: Some(PathBuf::from("/srv/projects/projects.db")),
            },
        };
        config.save_to(&ctx.config_path()).unwrap();

        let loaded = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.database_path().unwrap(), PathBuf::from("/srv/projects/projects.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_database_section_uses_defaults(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), "{}").unwrap();

        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert!(config.database.path.is_none());
        assert!(config.database_path().unwrap().ends_with("projects.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), "{ not json").unwrap();

        assert!(Config::read_from(&ctx.config_path()).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_not_replaced_by_defaults(ctx: &mut ConfigTestContext) {
        let malformed = r#"{ "database": { "path": 42 } }"#;
        std::fs::write(ctx.config_path(), malformed).unwrap();

        let err = Config::read_from(&ctx.config_path()).unwrap_err();
        assert!(err.downcast_ref::<serde_json::Error>().is_some());
        assert_eq!(std::fs::read_to_string(ctx.config_path()).unwrap(), malformed);
    }
}
