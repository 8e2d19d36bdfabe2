use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use quickadd_core::client::DEFAULT_API_URL;
use quickadd_core::error::CoreError;
use serde::Deserialize;

const CONFIG_FILE: &str = "quickadd.toml";

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Lunatask access token
    #[serde(default)]
    pub api_token: Option<String>,
    /// Area new tasks are filed under
    #[serde(default)]
    pub area_id: Option<String>,
    /// Base URL of the task API
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            area_id: None,
            api_url: default_api_url(),
        }
    }
}

impl Config {
    /// Load `quickadd.toml`, then the file named by `QUICKADD_CONFIG`, then
    /// `QUICKADD_*` environment variables, later sources winning.
    pub fn new() -> Result<Self, figment::Error> {
        let mut figment = Figment::new().merge(Toml::file(CONFIG_FILE));
        if let Ok(path) = std::env::var("QUICKADD_CONFIG") {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed("QUICKADD_")).extract()
    }

    pub fn api_token(&self) -> Result<&str, CoreError> {
        non_blank(self.api_token.as_deref()).ok_or(CoreError::MissingApiToken)
    }

    pub fn area_id(&self) -> Result<&str, CoreError> {
        non_blank(self.area_id.as_deref()).ok_or(CoreError::MissingAreaId)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config = Config::new()?;
            assert_eq!(config.api_url, DEFAULT_API_URL);
            assert!(matches!(config.api_token(), Err(CoreError::MissingApiToken)));
            assert!(matches!(config.area_id(), Err(CoreError::MissingAreaId)));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                api_token = "from-file"
                area_id = "area-file"
                "#,
            )?;
            jail.set_env("QUICKADD_API_TOKEN", "from-env");

            let config = Config::new()?;
            assert_eq!(config.api_token().unwrap(), "from-env");
            assert_eq!(config.area_id().unwrap(), "area-file");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_config_file() {
        Jail::expect_with(|jail| {
            jail.create_file("elsewhere.toml", r#"api_url = "http://localhost:9000/v1""#)?;
            jail.set_env("QUICKADD_CONFIG", "elsewhere.toml");

            let config = Config::new()?;
            assert_eq!(config.api_url, "http://localhost:9000/v1");
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "area_id = \"unterminated\n")?;
            assert!(Config::new().is_err());
            Ok(())
        });
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let config = Config {
            api_token: Some("   ".to_string()),
            area_id: Some(String::new()),
            ..Config::default()
        };
        assert!(config.api_token().is_err());
        assert!(config.area_id().is_err());
    }
}
