//! Basic example demonstrating olc library usage.
//!
//! Run with: cargo run --example basic -- [reference_lat reference_lng]

use olc::{decode, encode, recover_nearest, shorten, OlcError};
use std::env;

fn main() -> Result<(), OlcError> {
    // Optional reference location for short codes
    let args: Vec<f64> = env::args().skip(1).filter_map(|a| a.parse().ok()).collect();
    let (ref_lat, ref_lng) = match args.as_slice() {
        [lat, lng] => (*lat, *lng),
        _ => (47.3656, 8.5254),
    };

    let locations = [
        ("Zurich main station", 47.3782, 8.5402),
        ("Mount Fuji, Japan", 35.3606, 138.7274),
        ("Sydney Opera House", -33.8568, 151.2153),
    ];

    println!("Codes (reference {}, {}):", ref_lat, ref_lng);
    println!("{:-<60}", "");

    for (name, lat, lng) in &locations {
        let code = encode(*lat, *lng, 11)?;
        let area = decode(&code)?;
        let short = shorten(&code, ref_lat, ref_lng)?;

        println!("{}: {}", name, code);
        println!(
            "  area: {:.7}, {:.7} to {:.7}, {:.7}",
            area.latitude_lo(),
            area.longitude_lo(),
            area.latitude_hi(),
            area.longitude_hi()
        );
        if short != code {
            let recovered = recover_nearest(&short, ref_lat, ref_lng)?;
            println!("  short: {} (recovers to {})", short, recovered);
        } else {
            println!("  short: too far from reference");
        }
    }

    // Padded codes cover larger areas
    for length in [2, 4, 6, 8] {
        println!("\n{} digits: {}", length, encode(47.3656, 8.5254, length)?);
    }

    Ok(())
}
