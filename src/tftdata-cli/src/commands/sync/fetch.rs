//! HTTP fetch helpers for the Community Dragon feeds

use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Duration;
use tftdata::CDRAGON_BASE;

/// The comprehensive per-set export (large; generous timeout).
const COMPREHENSIVE_URL: &str = "https://raw.communitydragon.org/latest/cdragon/tft/en_us.json";

const COMPREHENSIVE_TIMEOUT: Duration = Duration::from_secs(120);
const FEED_TIMEOUT: Duration = Duration::from_secs(60);

pub fn comprehensive() -> Result<Value> {
    get_json(COMPREHENSIVE_URL, COMPREHENSIVE_TIMEOUT)
}

pub fn items() -> Result<Value> {
    get_json(&format!("{CDRAGON_BASE}/v1/tftitems.json"), FEED_TIMEOUT)
}

pub fn traits() -> Result<Value> {
    get_json(&format!("{CDRAGON_BASE}/v1/tfttraits.json"), FEED_TIMEOUT)
}

fn get_json(url: &str, timeout: Duration) -> Result<Value> {
    let response = ureq::get(url)
        .timeout(timeout)
        .call()
        .with_context(|| format!("request failed: {url}"))?;

    response
        .into_json()
        .with_context(|| format!("response was not valid JSON: {url}"))
}
