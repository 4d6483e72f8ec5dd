use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

/// Environment keys read into [`Config`]; anything else in the environment is ignored.
const ENV_KEYS: &[&str] = &[
    "database_url",
    "listen_addr",
    "loglevel",
    "twilio_account_sid",
    "twilio_auth_token",
    "twilio_whatsapp_from",
    "emergency_to_whatsapp",
    "twilio_api_base",
];

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| panic!("FATAL: invalid configuration: {e}"))
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,

    pub twilio_account_sid: Option<String>,
    pub twilio_auth_token: Option<String>,
    /// Sender address, e.g. `whatsapp:+14155238886`.
    pub twilio_whatsapp_from: Option<String>,
    /// The single fixed alert recipient, e.g. `whatsapp:+91XXXXXXXXXX`.
    pub emergency_to_whatsapp: Option<String>,
    pub twilio_api_base: Url,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://accident_alert.db".to_string(),
            listen_addr: "0.0.0.0:5000".to_string(),
            loglevel: "info".to_string(),
            twilio_account_sid: None,
            twilio_auth_token: None,
            twilio_whatsapp_from: None,
            emergency_to_whatsapp: None,
            twilio_api_base: Url::parse("https://api.twilio.com").expect("static url"),
        }
    }
}

/// Everything needed to talk to the messaging provider.
#[derive(Debug, Clone)]
pub struct TwilioSettings {
    pub account_sid: String,
    pub auth_token: String,
    pub from: String,
    pub to: String,
    pub api_base: Url,
}

impl Config {
    /// Defaults, then `config.toml` if present, then the process environment.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::raw().only(ENV_KEYS))
    }

    /// Messaging is enabled only when every provider field is set and non-empty.
    pub fn twilio(&self) -> Option<TwilioSettings> {
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_string);
        Some(TwilioSettings {
            account_sid: present(&self.twilio_account_sid)?,
            auth_token: present(&self.twilio_auth_token)?,
            from: present(&self.twilio_whatsapp_from)?,
            to: present(&self.emergency_to_whatsapp)?,
            api_base: self.twilio_api_base.clone(),
        })
    }
}
