use anyhow::{Context, Result};
use geojson::Feature;
use olc::CodeArea;
use serde::Serialize;

#[derive(Serialize)]
struct DecodeResponse {
    code: String,
    code_length: usize,
    latitude_lo: f64,
    longitude_lo: f64,
    latitude_hi: f64,
    longitude_hi: f64,
    latitude_center: f64,
    longitude_center: f64,
}

impl DecodeResponse {
    fn new(code: &str, area: &CodeArea) -> Self {
        Self {
            code: code.to_ascii_uppercase(),
            code_length: area.code_length(),
            latitude_lo: area.latitude_lo(),
            longitude_lo: area.longitude_lo(),
            latitude_hi: area.latitude_hi(),
            longitude_hi: area.longitude_hi(),
            latitude_center: area.latitude_center(),
            longitude_center: area.longitude_center(),
        }
    }
}

pub fn run(code: &str, geojson: bool, json: bool) -> Result<()> {
    // GeoJSON is already JSON, so --json changes nothing here
    if geojson {
        let feature: Feature = olc::geojson::code_to_feature(code)
            .with_context(|| format!("Failed to decode {}", code))?;
        println!("{}", serde_json::to_string(&feature)?);
        return Ok(());
    }

    let area = olc::decode(code).with_context(|| format!("Failed to decode {}", code))?;

    if json {
        println!("{}", serde_json::to_string(&DecodeResponse::new(code, &area))?);
    } else {
        println!(
            "Bounds:  {}, {} to {}, {}",
            area.latitude_lo(),
            area.longitude_lo(),
            area.latitude_hi(),
            area.longitude_hi()
        );
        println!(
            "Center:  {}, {}",
            area.latitude_center(),
            area.longitude_center()
        );
        println!("Digits:  {}", area.code_length());
    }

    Ok(())
}
