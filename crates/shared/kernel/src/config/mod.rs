use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment overrides, e.g. `NCRAFT__AFFILIATES__GODADDY`.
pub const ENV_PREFIX: &str = "NCRAFT";
const ENV_SEPARATOR: &str = "__";

#[ncraft_derive::ncraft_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from an optional file overlaid with `NCRAFT__*` environment variables.
///
/// Layers, lowest priority first:
/// 1. The defaults of `T` (`#[serde(default)]` on the config structs).
/// 2. The file at `path`, when given. Its format follows the extension (`.toml`, `.json`,
///    `.yaml`). A given file must exist.
/// 3. Environment variables with the `NCRAFT` prefix and `__` as the nesting separator,
///    so `NCRAFT__GENERATOR__PRIMARY_LIMIT=5` sets `generator.primary_limit`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or malformed, or the merged
/// values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use ncraft_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layers(path.as_ref().map(|p| p.as_ref()), None)
}

fn load_layers<T>(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        info!(path = %path.display(), "Loading config file");
        builder = builder.add_source(File::from(path).required(true));
    } else {
        debug!("No config file given, using defaults and environment");
    }

    let environment = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
        .source(env);

    builder
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ncraft_domain::config::StudioConfig;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    #[test]
    fn defaults_apply_without_file_or_env() -> Result<(), ConfigError> {
        let cfg: StudioConfig = load_layers(None, Some(Map::new()))?;
        assert_eq!(cfg.generator.primary_limit, 8);
        assert!(cfg.availability.live);
        Ok(())
    }

    #[test]
    fn environment_overrides_nested_values() -> Result<(), ConfigError> {
        let vars = env(&[
            ("NCRAFT__AFFILIATES__GODADDY", "gd-7"),
            ("NCRAFT__AVAILABILITY__LIVE", "false"),
            ("NCRAFT__GENERATOR__PRIMARY_LIMIT", "4"),
        ]);

        let cfg: StudioConfig = load_layers(None, Some(vars))?;
        assert_eq!(cfg.affiliates.godaddy.as_deref(), Some("gd-7"));
        assert!(!cfg.availability.live);
        assert_eq!(cfg.generator.primary_limit, 4);
        Ok(())
    }

    #[test]
    fn file_values_sit_below_environment() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "[trademark]\nlatency_ms = 0\n\n[affiliates]\nnamecheap = \"nc-file\"")?;

        let vars = env(&[("NCRAFT__AFFILIATES__NAMECHEAP", "nc-env")]);
        let cfg: StudioConfig = load_layers(Some(file.path()), Some(vars))?;

        assert_eq!(cfg.trademark.latency_ms, 0);
        assert_eq!(cfg.affiliates.namecheap.as_deref(), Some("nc-env"));
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        let result: Result<StudioConfig, _> =
            load_layers(Some(Path::new("/definitely/not/here.toml")), Some(Map::new()));
        assert!(matches!(result, Err(ConfigError::Config { .. })));
    }
}
