use anyhow::{anyhow, Result};
use chrono::{Duration, Local, NaiveDate};

/// Parses a due date relative to the current local day. Accepts
/// `today`, `tomorrow`/`tom`, relative `+Nd`/`+Nw`, and plain
/// `YYYY-MM-DD`.
pub fn parse_due_date(input: &str) -> Result<NaiveDate> {
    parse_due_date_from(input, Local::now().date_naive())
}

// Anchor-taking variant so tests don't depend on the clock.
pub fn parse_due_date_from(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "tomorrow" | "tom" => return Ok(today + Duration::days(1)),
        _ => {}
    }

    // 2. Relative format (+Nd, +Nw)
    if let Some(rest) = input.strip_prefix('+') {
        if rest.len() < 2 {
            return Err(anyhow!("Invalid relative date: {}", input));
        }
        let (num_str, unit) = rest.split_at(rest.len() - 1);
        let count: i64 = num_str
            .parse()
            .map_err(|_| anyhow!("Invalid relative date: {}", input))?;

        return match unit {
            "d" => Ok(today + Duration::days(count)),
            "w" => Ok(today + Duration::weeks(count)),
            _ => Err(anyhow!("Unknown unit in relative date: {}", unit)),
        };
    }

    // 3. Fallback to the ISO format the store uses
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(d);
    }

    Err(anyhow!("Could not parse date: {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_due_date_from("today", anchor()).unwrap(), anchor());
        assert_eq!(parse_due_date_from("tod", anchor()).unwrap(), anchor());
        assert_eq!(
            parse_due_date_from("tomorrow", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()
        );
    }

    #[test]
    fn test_relative() {
        assert_eq!(
            parse_due_date_from("+3d", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 18).unwrap()
        );
        assert_eq!(
            parse_due_date_from("+2w", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 29).unwrap()
        );
    }

    #[test]
    fn test_iso() {
        assert_eq!(
            parse_due_date_from("2024-03-01", anchor()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_due_date_from("soonish", anchor()).is_err());
        assert!(parse_due_date_from("+d", anchor()).is_err());
        assert!(parse_due_date_from("+3y", anchor()).is_err());
    }
}
