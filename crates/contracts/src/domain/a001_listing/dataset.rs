use super::aggregate::Listing;
use super::error::LoadError;
use serde_json::Value;

/// The catalog never holds more than this many listings.
pub const MAX_LISTINGS: usize = 50;

/// Parse a dataset body (a JSON array of listing objects) and keep the first
/// `MAX_LISTINGS` entries in their original order.
///
/// Entries past the cap are never decoded, so they cannot fail the load.
pub fn parse_dataset(body: &str) -> Result<Vec<Listing>, LoadError> {
    let mut entries: Vec<Value> = serde_json::from_str(body)?;
    if entries.len() > MAX_LISTINGS {
        log::debug!("dataset has {} listings, keeping {}", entries.len(), MAX_LISTINGS);
        entries.truncate(MAX_LISTINGS);
    }
    entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).map_err(LoadError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_listing::ListingId;

    fn dataset_of(n: i64) -> String {
        let items: Vec<String> = (1..=n)
            .map(|i| format!(r#"{{"id": {}, "name": "Listing {}"}}"#, i, i))
            .collect();
        format!("[{}]", items.join(","))
    }

    #[test]
    fn test_truncates_to_first_fifty() {
        let listings = parse_dataset(&dataset_of(120)).unwrap();
        assert_eq!(listings.len(), MAX_LISTINGS);
        let ids: Vec<ListingId> = listings.iter().filter_map(|l| l.id.clone()).collect();
        let expected: Vec<ListingId> = (1..=50).map(ListingId::Number).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_bad_entry_past_cap_is_ignored() {
        let mut items: Vec<String> = (1..=60)
            .map(|i| format!(r#"{{"id": {}, "name": "Listing {}"}}"#, i, i))
            .collect();
        items[55] = "null".to_string();
        items[57] = "\"oops\"".to_string();
        let body = format!("[{}]", items.join(","));

        let listings = parse_dataset(&body).unwrap();
        assert_eq!(listings.len(), MAX_LISTINGS);
        assert_eq!(listings.last().and_then(|l| l.id.clone()), Some(ListingId::Number(50)));
    }

    #[test]
    fn test_bad_entry_within_cap_is_parse_error() {
        let mut items: Vec<String> = (1..=10).map(|i| format!(r#"{{"id": {}}}"#, i)).collect();
        items[3] = "null".to_string();
        let body = format!("[{}]", items.join(","));
        assert!(matches!(parse_dataset(&body), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_small_dataset_kept_whole() {
        assert_eq!(parse_dataset(&dataset_of(7)).unwrap().len(), 7);
        assert!(parse_dataset("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_top_level_is_parse_error() {
        assert!(matches!(parse_dataset("{\"id\": 1}"), Err(LoadError::Parse(_))));
        assert!(matches!(parse_dataset("[{\"id\": 1},"), Err(LoadError::Parse(_))));
        assert!(matches!(parse_dataset("<html>404</html>"), Err(LoadError::Parse(_))));
    }
}
