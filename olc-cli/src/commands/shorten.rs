use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct ShortenResponse {
    code: String,
    short_code: String,
    reference_lat: f64,
    reference_lng: f64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    unchanged: bool,
}

pub fn run(code: &str, lat: f64, lng: f64, json: bool) -> Result<()> {
    let short_code = olc::shorten(code, lat, lng)
        .with_context(|| format!("Failed to shorten {} near ({}, {})", code, lat, lng))?;

    if json {
        let code = code.to_ascii_uppercase();
        let response = ShortenResponse {
            unchanged: short_code == code,
            code,
            short_code,
            reference_lat: lat,
            reference_lng: lng,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{}", short_code);
    }

    Ok(())
}
