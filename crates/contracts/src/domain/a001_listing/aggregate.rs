use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Listing identifier as it appears in the dataset.
///
/// Datasets use integer ids, but string ids are accepted too. The two forms
/// never compare equal, and the ordering (numbers first) is what keeps the
/// persisted favorites array canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Number(i64),
    Text(String),
}

impl ListingId {
    /// Attribute form that keeps the variant: `n:42` or `s:42`.
    pub fn to_attr(&self) -> String {
        match self {
            ListingId::Number(n) => format!("n:{}", n),
            ListingId::Text(s) => format!("s:{}", s),
        }
    }

    /// Inverse of `to_attr`.
    pub fn from_attr(attr: &str) -> Option<Self> {
        match attr.split_once(':')? {
            ("n", n) => n.parse::<i64>().ok().map(ListingId::Number),
            ("s", s) if !s.is_empty() => Some(ListingId::Text(s.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingId::Number(n) => write!(f, "{}", n),
            ListingId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ListingId {
    fn from(value: i64) -> Self {
        ListingId::Number(value)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One property record from the dataset.
///
/// Every field is optional. A field holding a JSON value of the wrong type is
/// read as absent so that one odd record never rejects the whole dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<ListingId>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub neighbourhood_cleansed: Option<String>,

    /// Nightly price, currency formatted ("$1,250.00").
    #[serde(default, deserialize_with = "lenient::string")]
    pub price: Option<String>,

    #[serde(default, deserialize_with = "lenient::count")]
    pub bedrooms: Option<f64>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub bathrooms_text: Option<String>,

    #[serde(default, deserialize_with = "lenient::count")]
    pub accommodates: Option<f64>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub review_scores_rating: Option<f64>,

    /// Serialized amenity list, usually `"['Wifi', 'Kitchen']"`.
    #[serde(default, deserialize_with = "lenient::serialized")]
    pub amenities: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub picture_url: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub host_name: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub host_picture_url: Option<String>,
}

impl Listing {
    /// Neighborhood, if present and non-empty.
    pub fn neighbourhood(&self) -> Option<&str> {
        non_empty(&self.neighbourhood_cleansed)
    }

    /// Numeric nightly price, 0 when missing or unparsable.
    pub fn price_value(&self) -> f64 {
        super::format::parse_price(self.price.as_deref())
    }

    /// Case-insensitive substring match against name, description and
    /// neighborhood. `term_lower` must already be lowercased.
    pub fn matches_search(&self, term_lower: &str) -> bool {
        [&self.name, &self.description, &self.neighbourhood_cleansed]
            .into_iter()
            .filter_map(|field| non_empty(field))
            .any(|value| value.to_lowercase().contains(term_lower))
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

mod lenient {
    use super::ListingId;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<ListingId>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => match n.as_i64() {
                Some(v) => Some(ListingId::Number(v)),
                None => Some(ListingId::Text(n.to_string())),
            },
            Value::String(s) if !s.is_empty() => Some(ListingId::Text(s)),
            _ => None,
        })
    }

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|v| v.is_finite()))
    }

    /// Non-negative quantity; fractional values are kept as given.
    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(number(d)?.filter(|v| *v >= 0.0))
    }

    /// Amenities sometimes arrive as a real array; keep them in serialized
    /// form so the renderer has a single parsing path.
    pub fn serialized<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            v @ Value::Array(_) => Some(v.to_string()),
            _ => None,
        })
    }
}
