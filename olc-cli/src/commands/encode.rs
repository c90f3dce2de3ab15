use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct EncodeResponse {
    lat: f64,
    lng: f64,
    length: usize,
    code: String,
}

pub fn run(lat: f64, lng: f64, length: usize, json: bool) -> Result<()> {
    debug!(lat, lng, length, "Encoding");

    let code = olc::encode(lat, lng, length)
        .with_context(|| format!("Failed to encode ({}, {})", lat, lng))?;

    if json {
        let response = EncodeResponse {
            lat,
            lng,
            length,
            code,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{}", code);
    }

    Ok(())
}
