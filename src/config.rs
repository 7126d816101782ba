use crate::catalog::LIST_YEAR;
use crate::render::IndicatorStyle;
use anyhow::{Context, Result};
use std::{env, net::SocketAddr};

pub const DEFAULT_ADDR: &str = "0.0.0.0:3146";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub style: IndicatorStyle,
    pub heading: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr = get("SHOWBOARD_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("SHOWBOARD_ADDR must be a socket address like 0.0.0.0:3146")?;
        let style = match get("SHOWBOARD_STYLE") {
            Some(raw) => raw
                .parse::<IndicatorStyle>()
                .context("Invalid SHOWBOARD_STYLE")?,
            None => IndicatorStyle::default(),
        };
        let heading = get("SHOWBOARD_HEADING").unwrap_or_else(|| LIST_YEAR.to_string());

        Ok(Self {
            addr,
            style,
            heading,
        })
    }
}
