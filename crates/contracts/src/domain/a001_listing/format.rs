//! Per-field formatting for listing cards.
//!
//! Everything here recovers locally: a bad price is 0, a bad amenity list is
//! no amenities, a missing rating is "New".

/// How many amenity tags a card shows.
pub const MAX_AMENITY_TAGS: usize = 3;

pub const RATING_NEW: &str = "New";

/// Parse a currency string ("$1,250.00") into a number.
///
/// Currency symbols and thousands separators are dropped and the leading
/// decimal number is read. Anything else yields 0.
pub fn parse_price(price: Option<&str>) -> f64 {
    let Some(raw) = price else {
        return 0.0;
    };
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    leading_number(cleaned.trim())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn leading_number(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => seen_dot = true,
            '-' | '+' if i == 0 => {}
            _ => break,
        }
    }
    s[..end].parse::<f64>().ok()
}

/// Price as shown on the card, without trailing zero decimals ("$100", "$89.5").
pub fn format_price(value: f64) -> String {
    format!("${}", value)
}

/// Parse a serialized amenity list and keep the first `MAX_AMENITY_TAGS`.
///
/// The dataset uses Python-style single quotes, so quotes are normalized before
/// parsing as JSON. A list that still fails to parse gives no tags.
pub fn parse_amenities(serialized: Option<&str>) -> Vec<String> {
    let Some(raw) = serialized.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };
    let normalized = raw.replace('\'', "\"");
    match serde_json::from_str::<Vec<serde_json::Value>>(&normalized) {
        Ok(items) => items
            .into_iter()
            .take(MAX_AMENITY_TAGS)
            .map(|item| match item {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        Err(e) => {
            log::debug!("amenities not parsable ({}): {}", e, raw);
            Vec::new()
        }
    }
}

/// Rating with one decimal, or "New" when there is none yet.
pub fn rating_label(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r != 0.0 && r.is_finite() => format!("{:.1}", r),
        _ => RATING_NEW.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(Some("$100")), 100.0);
        assert_eq!(parse_price(Some("$1,250.00")), 1250.0);
        assert_eq!(parse_price(Some(" $89.50 ")), 89.5);
        assert_eq!(parse_price(Some("120 per night")), 120.0);
    }

    #[test]
    fn test_parse_price_defaults_to_zero() {
        assert_eq!(parse_price(None), 0.0);
        assert_eq!(parse_price(Some("")), 0.0);
        assert_eq!(parse_price(Some("call us")), 0.0);
        assert_eq!(parse_price(Some("$")), 0.0);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(100.0), "$100");
        assert_eq!(format_price(1250.0), "$1250");
        assert_eq!(format_price(89.5), "$89.5");
    }

    #[test]
    fn test_parse_amenities_first_three() {
        assert_eq!(
            parse_amenities(Some("['Wifi','Pool','Gym','TV']")),
            vec!["Wifi", "Pool", "Gym"]
        );
        assert_eq!(
            parse_amenities(Some(r#"["Kitchen", "Heating"]"#)),
            vec!["Kitchen", "Heating"]
        );
    }

    #[test]
    fn test_parse_amenities_failure_gives_nothing() {
        assert!(parse_amenities(None).is_empty());
        assert!(parse_amenities(Some("")).is_empty());
        assert!(parse_amenities(Some("Wifi, Pool")).is_empty());
        // An apostrophe inside a name breaks quote normalization.
        assert!(parse_amenities(Some("['Children's books', 'Wifi']")).is_empty());
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(rating_label(Some(4.876)), "4.9");
        assert_eq!(rating_label(Some(5.0)), "5.0");
        assert_eq!(rating_label(None), "New");
        assert_eq!(rating_label(Some(0.0)), "New");
    }
}
