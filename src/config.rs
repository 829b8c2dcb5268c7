use chrono::NaiveTime;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
const DEFAULT_DAILY_POST_TIME: &str = "10:00";
const DEFAULT_DEFINITION_LIMIT: usize = 3;

/// Every problem found while validating the environment, reported at once.
#[derive(Debug, Error)]
#[error("invalid configuration: {}", .problems.join("; "))]
pub struct ConfigError {
    pub problems: Vec<String>,
}

#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub guild_id: u64,
    pub channel_id: u64,
    pub wordnik_url: String,
    pub wordnik_token: String,
    pub openai_token: String,
    pub openai_url: String,
    pub openai_model: String,
    /// Wall-clock time (UTC) of the daily word-of-the-day post
    pub daily_post_time: NaiveTime,
    pub definition_limit: usize,
    /// `None` leaves the HTTP client on its transport defaults
    pub http_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut problems = Vec::new();

        let mut required = |key: &str| -> String {
            match lookup(key).filter(|v| !v.trim().is_empty()) {
                Some(value) => value,
                None => {
                    problems.push(format!("{key} must be set"));
                    String::new()
                }
            }
        };

        let discord_token = required("DISCORD_TOKEN");
        let guild_id_raw = required("GUILD_ID");
        let channel_id_raw = required("DISCORD_CHANNEL_ID");
        let wordnik_url = required("WORDNIK_URL");
        let wordnik_token = required("WORDNIK_TOKEN");
        let openai_token = required("OPENAI_TOKEN");

        let guild_id = parse_id("GUILD_ID", &guild_id_raw, &mut problems);
        let channel_id = parse_id("DISCORD_CHANNEL_ID", &channel_id_raw, &mut problems);

        let daily_post_time_raw =
            lookup("DAILY_POST_TIME").unwrap_or_else(|| DEFAULT_DAILY_POST_TIME.to_string());
        let daily_post_time = match NaiveTime::parse_from_str(daily_post_time_raw.trim(), "%H:%M") {
            Ok(time) => time,
            Err(_) => {
                problems.push(format!(
                    "DAILY_POST_TIME must be HH:MM, got '{daily_post_time_raw}'"
                ));
                NaiveTime::MIN
            }
        };

        let definition_limit = match lookup("DEFINITION_LIMIT") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    problems.push(format!(
                        "DEFINITION_LIMIT must be a positive integer, got '{raw}'"
                    ));
                    DEFAULT_DEFINITION_LIMIT
                }
            },
            None => DEFAULT_DEFINITION_LIMIT,
        };

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => {
                    problems.push(format!("HTTP_TIMEOUT_SECS must be an integer, got '{raw}'"));
                    None
                }
            },
            None => None,
        };

        if !problems.is_empty() {
            return Err(ConfigError { problems });
        }

        Ok(Config {
            discord_token,
            guild_id,
            channel_id,
            wordnik_url,
            wordnik_token,
            openai_token,
            openai_url: lookup("OPENAI_URL").unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string()),
            openai_model: lookup("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            daily_post_time,
            definition_limit,
            http_timeout,
        })
    }
}

fn parse_id(key: &str, raw: &str, problems: &mut Vec<String>) -> u64 {
    if raw.is_empty() {
        // already reported as missing
        return 0;
    }
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => id,
        _ => {
            problems.push(format!("{key} must be a valid non-zero u64, got '{raw}'"));
            0
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &"[REDACTED]")
            .field("guild_id", &self.guild_id)
            .field("channel_id", &self.channel_id)
            .field("wordnik_url", &self.wordnik_url)
            .field("wordnik_token", &"[REDACTED]")
            .field("openai_token", &"[REDACTED]")
            .field("openai_url", &self.openai_url)
            .field("openai_model", &self.openai_model)
            .field("daily_post_time", &self.daily_post_time)
            .field("definition_limit", &self.definition_limit)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

/// Discord message limit is 2000 characters
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;
