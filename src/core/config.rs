use super::error::ConfigError;

/// Negation window used when none is configured.
pub const DEFAULT_NEGATION_WINDOW: usize = 4;

/// Longest text, in characters, the HTTP layer accepts by default.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 10_000;

/// Tuning knobs for the rule-based scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Token indices that are nonzero multiples of this value end an active negation.
    pub negation_window: usize,
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.negation_window == 0 {
            return Err(ConfigError::invalid(
                "negation_window",
                "0",
                "must be greater than 0",
            ));
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            negation_window: DEFAULT_NEGATION_WINDOW,
        }
    }
}

/// Service settings, read from the process environment.
///
/// Every field has a default so an empty environment yields a runnable
/// development setup. Variable names are the upper-cased field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub app_name: String,
    pub app_version: String,
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub negation_window: usize,
    pub max_text_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "sentiment-analyzer".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            negation_window: DEFAULT_NEGATION_WINDOW,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

impl Settings {
    /// Load settings from environment variables.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    ///
    /// Missing keys fall back to [`Settings::default`]; blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Settings::default();

        let settings = Settings {
            app_name: get("APP_NAME").unwrap_or(defaults.app_name),
            app_version: get("APP_VERSION").unwrap_or(defaults.app_version),
            environment: get("ENVIRONMENT").unwrap_or(defaults.environment),
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", get("PORT"), defaults.port)?,
            log_level: get("LOG_LEVEL")
                .map(|v| normalize_log_level(&v))
                .unwrap_or(defaults.log_level),
            negation_window: parse_or(
                "NEGATION_WINDOW",
                get("NEGATION_WINDOW"),
                defaults.negation_window,
            )?,
            max_text_length: parse_or(
                "MAX_TEXT_LENGTH",
                get("MAX_TEXT_LENGTH"),
                defaults.max_text_length,
            )?,
        };

        settings.analyzer_config().validate()?;
        if settings.max_text_length == 0 {
            return Err(ConfigError::invalid(
                "MAX_TEXT_LENGTH",
                "0",
                "must be greater than 0",
            ));
        }

        Ok(settings)
    }

    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            negation_window: self.negation_window,
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// `host:port` string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Accept the common aliases `warning` and `critical` alongside tracing's level names.
fn normalize_log_level(raw: &str) -> String {
    match raw.to_lowercase().as_str() {
        "warning" => "warn".to_string(),
        "critical" | "fatal" => "error".to_string(),
        other => other.to_string(),
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(key, raw.clone(), e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let settings = settings_from(&[]).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.port, 8000);
        assert_eq!(settings.negation_window, 4);
        assert_eq!(settings.bind_address(), "0.0.0.0:8000");
        assert!(settings.is_development());
    }

    #[test]
    fn reads_overrides() {
        let settings = settings_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("LOG_LEVEL", "DEBUG"),
            ("ENVIRONMENT", "production"),
            ("NEGATION_WINDOW", "3"),
        ])
        .unwrap();

        assert_eq!(settings.bind_address(), "127.0.0.1:9090");
        assert_eq!(settings.log_level, "debug");
        assert!(!settings.is_development());
        assert_eq!(settings.analyzer_config().negation_window, 3);
    }

    #[test]
    fn log_level_aliases() {
        let settings = settings_from(&[("LOG_LEVEL", "Warning")]).unwrap();
        assert_eq!(settings.log_level, "warn");
        let settings = settings_from(&[("LOG_LEVEL", "CRITICAL")]).unwrap();
        assert_eq!(settings.log_level, "error");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let settings = settings_from(&[("PORT", "  "), ("APP_NAME", "")]).unwrap();
        assert_eq!(settings.port, 8000);
        assert_eq!(settings.app_name, "sentiment-analyzer");
    }

    #[test]
    fn rejects_unparseable_port() {
        let err = settings_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn rejects_zero_negation_window() {
        let err = settings_from(&[("NEGATION_WINDOW", "0")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "negation_window",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_max_text_length() {
        assert!(settings_from(&[("MAX_TEXT_LENGTH", "0")]).is_err());
    }
}
