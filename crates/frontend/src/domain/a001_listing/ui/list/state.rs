use contracts::domain::a001_listing::{FilterCriteria, LoadError, PriceSort};
use leptos::prelude::*;

/// Control values of the catalog toolbar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogListState {
    /// Committed (debounced) search text.
    pub search: String,
    /// Selected neighborhood; empty means all.
    pub neighbourhood: String,
    pub price_sort: PriceSort,
}

impl CatalogListState {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            neighbourhood: Some(self.neighbourhood.clone()).filter(|n| !n.is_empty()),
            price_sort: self.price_sort,
        }
    }
}

pub fn create_state() -> RwSignal<CatalogListState> {
    RwSignal::new(CatalogListState::default())
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(LoadError),
}

impl LoadState {
    /// Value for the listings-count display. Only a loaded catalog reports
    /// a non-zero count.
    pub fn listings_count(&self, visible: usize) -> usize {
        match self {
            LoadState::Loaded => visible,
            LoadState::Loading | LoadState::Failed(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_from_state() {
        let state = CatalogListState {
            search: "loft".into(),
            neighbourhood: String::new(),
            price_sort: PriceSort::Descending,
        };
        let criteria = state.criteria();
        assert_eq!(criteria.search, "loft");
        assert_eq!(criteria.neighbourhood, None);
        assert_eq!(criteria.price_sort, PriceSort::Descending);

        let state = CatalogListState {
            neighbourhood: "SOMA".into(),
            ..Default::default()
        };
        assert_eq!(state.criteria().neighbourhood.as_deref(), Some("SOMA"));
    }

    #[test]
    fn test_failed_load_reports_zero() {
        let failed = LoadState::Failed(LoadError::Network("offline".into()));
        assert_eq!(failed.listings_count(12), 0);
        assert_eq!(LoadState::Loading.listings_count(12), 0);
        assert_eq!(LoadState::Loaded.listings_count(12), 12);
    }
}
