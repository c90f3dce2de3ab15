use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct CheckResponse<'a> {
    code: &'a str,
    valid: bool,
    short: bool,
    full: bool,
    padded: bool,
}

pub fn run(code: &str, json: bool) -> Result<()> {
    let response = CheckResponse {
        code,
        valid: olc::is_valid(code),
        short: olc::is_short(code),
        full: olc::is_full(code),
        padded: olc::is_padded(code),
    };

    if json {
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("Code:    {}", response.code);
        println!("Valid:   {}", response.valid);
        println!("Short:   {}", response.short);
        println!("Full:    {}", response.full);
        println!("Padded:  {}", response.padded);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_response_shape() {
        let code = "8FWC0000+";
        let response = CheckResponse {
            code,
            valid: olc::is_valid(code),
            short: olc::is_short(code),
            full: olc::is_full(code),
            padded: olc::is_padded(code),
        };
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["code"], "8FWC0000+");
        assert_eq!(value["valid"], true);
        assert_eq!(value["short"], false);
        assert_eq!(value["full"], true);
        assert_eq!(value["padded"], true);
    }

    #[test]
    fn test_run_accepts_invalid_code() {
        assert!(run("G+", true).is_ok());
    }
}
