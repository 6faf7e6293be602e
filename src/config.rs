/*
 * Responsibility
 * - 環境変数や設定の読み込み (API_BASE_URL, ログインユーザー, セッションなど)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;

use url::Url;

use crate::forms::CurrentUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub app_env: AppEnv,
    // backend serving /api/*
    pub api_base_url: Url,
    // where the post pages live; used for the printed navigation target
    pub client_base_url: Url,
    pub user: CurrentUser,
    pub session_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let app_env = get("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let api_base_url = parse_http_url(
            &get("API_BASE_URL").unwrap_or_else(|| "http://localhost:5000".to_string()),
            "API_BASE_URL",
        )?;

        let client_base_url = parse_http_url(
            &get("CLIENT_BASE_URL").unwrap_or_else(|| "http://localhost:5173".to_string()),
            "CLIENT_BASE_URL",
        )?;

        let username = get("BLOG_USERNAME")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("BLOG_USERNAME"))?;
        let user_id = get("BLOG_USER_ID")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("BLOG_USER_ID"))?;

        let session_token = get("BLOG_SESSION_TOKEN")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(Self {
            app_env,
            api_base_url,
            client_base_url,
            user: CurrentUser { username, user_id },
            session_token,
        })
    }
}

fn parse_http_url(value: &str, key: &'static str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|_| ConfigError::Invalid(key))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::Invalid(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    const USER: [(&str, &str); 2] = [("BLOG_USERNAME", "alice"), ("BLOG_USER_ID", "u1")];

    #[test]
    fn defaults_apply() {
        let config = load(&USER).unwrap();
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.api_base_url.as_str(), "http://localhost:5000/");
        assert_eq!(config.client_base_url.as_str(), "http://localhost:5173/");
        assert_eq!(config.user.username, "alice");
        assert_eq!(config.session_token, None);
    }

    #[test]
    fn user_is_required() {
        assert_eq!(
            load(&[("BLOG_USER_ID", "u1")]).unwrap_err(),
            ConfigError::Missing("BLOG_USERNAME")
        );
        assert_eq!(
            load(&[("BLOG_USERNAME", "alice"), ("BLOG_USER_ID", " ")]).unwrap_err(),
            ConfigError::Missing("BLOG_USER_ID")
        );
    }

    #[test]
    fn urls_must_be_http() {
        let mut vars = USER.to_vec();
        vars.push(("API_BASE_URL", "ftp://example.com"));
        assert_eq!(load(&vars).unwrap_err(), ConfigError::Invalid("API_BASE_URL"));

        let mut vars = USER.to_vec();
        vars.push(("CLIENT_BASE_URL", "not a url"));
        assert_eq!(
            load(&vars).unwrap_err(),
            ConfigError::Invalid("CLIENT_BASE_URL")
        );
    }

    #[test]
    fn production_and_session_token() {
        let mut vars = USER.to_vec();
        vars.push(("APP_ENV", "PROD"));
        vars.push(("BLOG_SESSION_TOKEN", " abc "));
        let config = load(&vars).unwrap();
        assert!(config.app_env.is_production());
        assert_eq!(config.session_token.as_deref(), Some("abc"));
    }
}
