use std::{str::FromStr, time::Duration};

use serenity::all::{ChannelId, GuildId, RoleId};
use url::Url;

use crate::{
    error::{config::ConfigError, AppError},
    model::discord::RoleGrantRule,
};

const YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3/channels";
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PUBLISH_INTERVAL_SECS: u64 = 600;

pub struct Config {
    pub discord_bot_token: String,
    pub guild_id: GuildId,

    pub youtube: YoutubeConfig,

    pub sub_count: Option<PublishTarget>,
    pub view_count: Option<PublishTarget>,

    pub role_grant: Option<RoleGrantRule>,
}

/// Metric provider settings.
#[derive(Clone)]
pub struct YoutubeConfig {
    pub api_url: Url,
    pub api_key: String,
    pub channel_id: String,
    pub timeout: Duration,
}

/// Destination channel and cadence for one periodic publish task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublishTarget {
    pub channel_id: ChannelId,
    pub interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let guild_id = GuildId::new(parse_id(&lookup, "GUILD_ID")?);

        let youtube = YoutubeConfig {
            api_url: match lookup("YOUTUBE_API_URL") {
                Some(value) => Url::parse(&value).map_err(|_| ConfigError::InvalidEnvVar {
                    name: "YOUTUBE_API_URL".to_string(),
                    value,
                })?,
                None => Url::parse(YOUTUBE_API_URL).map_err(|_| ConfigError::InvalidEnvVar {
                    name: "YOUTUBE_API_URL".to_string(),
                    value: YOUTUBE_API_URL.to_string(),
                })?,
            },
            api_key: require(&lookup, "YOUTUBE_API_KEY")?,
            channel_id: require(&lookup, "YOUTUBE_CHANNEL_ID")?,
            timeout: Duration::from_secs(parse_or(
                &lookup,
                "YOUTUBE_API_TIMEOUT_SECS",
                DEFAULT_API_TIMEOUT_SECS,
            )?),
        };

        let sub_count = publish_target(&lookup, "SUB_COUNT_CHANNEL_ID", "SUB_COUNT_INTERVAL_SECS")?;
        let view_count =
            publish_target(&lookup, "VIEW_COUNT_CHANNEL_ID", "VIEW_COUNT_INTERVAL_SECS")?;

        let trigger = parse_optional::<u64, _>(&lookup, "PATRON_ROLE_ID")?;
        let granted = parse_optional::<u64, _>(&lookup, "DONOR_ROLE_ID")?;
        let role_grant = match (trigger, granted) {
            (Some(trigger), Some(granted)) => Some(RoleGrantRule {
                trigger_role_id: RoleId::new(non_zero(trigger, "PATRON_ROLE_ID")?),
                granted_role_id: RoleId::new(non_zero(granted, "DONOR_ROLE_ID")?),
                scope_guild_id: guild_id,
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteRoleGrant),
        };

        Ok(Self {
            discord_bot_token: require(&lookup, "DISCORD_BOT_TOKEN")?,
            guild_id,
            youtube,
            sub_count,
            view_count,
            role_grant,
        })
    }
}

fn require<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_optional<T, F>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name).filter(|value| !value.trim().is_empty()) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}

fn parse_or<F>(lookup: &F, name: &str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_optional(lookup, name)?.unwrap_or(default);
    non_zero(value, name)
}

/// Discord snowflakes and intervals are never zero; `Id::new(0)` panics.
fn parse_id<F>(lookup: &F, name: &str) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_optional::<u64, _>(lookup, name)? {
        Some(id) => non_zero(id, name),
        None => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn non_zero(value: u64, name: &str) -> Result<u64, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn publish_target<F>(
    lookup: &F,
    channel_var: &str,
    interval_var: &str,
) -> Result<Option<PublishTarget>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(channel_id) = parse_optional::<u64, _>(lookup, channel_var)? else {
        return Ok(None);
    };

    Ok(Some(PublishTarget {
        channel_id: ChannelId::new(non_zero(channel_id, channel_var)?),
        interval: Duration::from_secs(parse_or(
            lookup,
            interval_var,
            DEFAULT_PUBLISH_INTERVAL_SECS,
        )?),
    }))
}
