use serde::{Deserialize, Deserializer, Serialize};

/// Backend used when the config does not name one (Flask's default bind).
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Persisted light/dark preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    Light,
}

impl ThemePreference {
    /// Parse a stored value; anything other than `dark`/`light` is unknown.
    pub fn from_config_value(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Settings stored in `config.toml`.
///
/// Config keys (TOML): `theme`, `server_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Saved theme; `None` means "follow the OS".
    #[serde(
        default,
        deserialize_with = "lenient_theme",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme: Option<ThemePreference>,
    /// Base URL of the prediction backend; `/analyze` is appended.
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

impl AppConfig {
    /// Replace an unusable server URL with the default and drop trailing slashes.
    pub(crate) fn normalized(mut self) -> Self {
        self.server_url = normalize_server_url(&self.server_url);
        self
    }

    /// Full URL of the analysis endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.server_url.trim_end_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: None,
            server_url: default_server_url(),
        }
    }
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn normalize_server_url(raw: &str) -> String {
    let trimmed = raw.trim();
    match url::Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => {
            trimmed.trim_end_matches('/').to_string()
        }
        _ => {
            tracing::warn!("Ignoring invalid server_url {trimmed:?}; using {DEFAULT_SERVER_URL}");
            default_server_url()
        }
    }
}

/// Unknown or mistyped `theme` values fall back to the OS theme instead of
/// failing the whole load.
fn lenient_theme<'de, D>(deserializer: D) -> Result<Option<ThemePreference>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<toml::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let theme = value.as_str().and_then(ThemePreference::from_config_value);
        if theme.is_none() {
            tracing::warn!("Ignoring unknown theme {value}; following the system theme");
        }
        theme
    }))
}
