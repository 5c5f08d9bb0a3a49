use {
    crate::ConfigResult,
    config::{Config, Environment, File, FileFormat},
    serde::de::DeserializeOwned,
    std::path::Path,
};

/// Prefix of the environment variables that override file values, e.g.
/// `BALLOT__ENGINE__MIN_VOTES=3`.
pub const ENV_PREFIX: &str = "BALLOT";

/// Load a config in layers: the TOML file at `path` if one is given, then
/// environment overrides. Whatever neither sets is left to the target type's
/// serde defaults.
pub fn parse_config<D>(path: Option<&Path>) -> ConfigResult<D>
where
    D: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml));
    }

    let env_override = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true);

    let config = builder.add_source(env_override).build()?;

    Ok(config.try_deserialize()?)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, serde::Deserialize, std::io::Write, tempfile::NamedTempFile};

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(default)]
    struct TestSettings {
        log_level: String,
        node_name: String,
        engine: Engine,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(default)]
    struct Engine {
        min_votes: u64,
        max_options: u32,
    }

    impl Default for TestSettings {
        fn default() -> Self {
            Self {
                log_level: "info".to_string(),
                node_name: "local".to_string(),
                engine: Engine::default(),
            }
        }
    }

    impl Default for Engine {
        fn default() -> Self {
            Self {
                min_votes: 10,
                max_options: 32,
            }
        }
    }

    #[test]
    fn parsing_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\n\n[engine]\nmin_votes = 3").unwrap();

        let cfg: TestSettings = parse_config(Some(file.path())).unwrap();

        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.engine, Engine {
            min_votes: 3,
            max_options: 32,
        });
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        assert!(parse_config::<TestSettings>(Some(&path)).is_err());
    }

    // Environment variables are process-wide. No other test may read
    // `node_name`.
    #[test]
    fn environment_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "node_name = \"from-file\"").unwrap();

        std::env::set_var("BALLOT__NODE_NAME", "from-env");

        let cfg: TestSettings = parse_config(Some(file.path())).unwrap();
        assert_eq!(cfg.node_name, "from-env");

        let cfg: TestSettings = parse_config(None).unwrap();
        assert_eq!(cfg.node_name, "from-env");
        assert_eq!(cfg.engine, Engine::default());
    }
}
