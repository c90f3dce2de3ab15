use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct RecoverResponse {
    short_code: String,
    code: String,
    reference_lat: f64,
    reference_lng: f64,
}

pub fn run(short_code: &str, lat: f64, lng: f64, json: bool) -> Result<()> {
    let code = olc::recover_nearest(short_code, lat, lng)
        .with_context(|| format!("Failed to recover {} near ({}, {})", short_code, lat, lng))?;

    if json {
        let response = RecoverResponse {
            short_code: short_code.to_ascii_uppercase(),
            code,
            reference_lat: lat,
            reference_lng: lng,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{}", code);
    }

    Ok(())
}
