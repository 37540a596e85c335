use super::aggregate::Listing;
use std::collections::BTreeSet;

/// Price ordering chosen in the sort selector.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PriceSort {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl PriceSort {
    /// Value used by the `<select>` option.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSort::Unsorted => "",
            PriceSort::Ascending => "asc",
            PriceSort::Descending => "desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PriceSort::Unsorted => "Sort by price",
            PriceSort::Ascending => "Price: Low to High",
            PriceSort::Descending => "Price: High to Low",
        }
    }

    /// Parse a selector value; anything unknown means unsorted.
    pub fn from_str(s: &str) -> Self {
        match s {
            "asc" => PriceSort::Ascending,
            "desc" => PriceSort::Descending,
            _ => PriceSort::Unsorted,
        }
    }

    pub fn all() -> [PriceSort; 3] {
        [PriceSort::Unsorted, PriceSort::Ascending, PriceSort::Descending]
    }
}

/// Criteria read from the controls on every recompute.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FilterCriteria {
    /// Free text; empty means no search.
    pub search: String,
    /// Exact neighborhood; `None` means any.
    pub neighbourhood: Option<String>,
    pub price_sort: PriceSort,
}

/// The loaded listing collection. Read-only after construction.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Search, then neighborhood filter, then stable price sort, over a copy
    /// of the collection.
    pub fn recompute(&self, criteria: &FilterCriteria) -> Vec<Listing> {
        let mut result: Vec<Listing> = self.listings.clone();

        if !criteria.search.is_empty() {
            let term = criteria.search.to_lowercase();
            result.retain(|l| l.matches_search(&term));
        }

        if let Some(selected) = criteria.neighbourhood.as_deref().filter(|s| !s.is_empty()) {
            result.retain(|l| l.neighbourhood_cleansed.as_deref() == Some(selected));
        }

        match criteria.price_sort {
            PriceSort::Unsorted => {}
            PriceSort::Ascending => {
                result.sort_by(|a, b| a.price_value().total_cmp(&b.price_value()))
            }
            PriceSort::Descending => {
                result.sort_by(|a, b| b.price_value().total_cmp(&a.price_value()))
            }
        }

        log::debug!("recompute {:?}: {} of {}", criteria, result.len(), self.len());
        result
    }

    /// Distinct non-empty neighborhoods, alphabetically.
    pub fn neighbourhood_options(&self) -> Vec<String> {
        self.listings
            .iter()
            .filter_map(|l| l.neighbourhood())
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
