use contracts::domain::a001_listing::format::{format_price, parse_amenities, rating_label};
use contracts::domain::a001_listing::{Listing, ListingId};

pub const PLACEHOLDER_IMG: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='300' height='200' viewBox='0 0 300 200'%3E%3Crect fill='%23ddd' width='300' height='200'/%3E%3Ctext fill='%23999' font-family='Arial' font-size='14' x='50%25' y='50%25' text-anchor='middle' dy='.3em'%3ENo Image%3C/text%3E%3C/svg%3E";

pub const PLACEHOLDER_HOST: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='28' height='28' viewBox='0 0 28 28'%3E%3Crect fill='%23ddd' width='28' height='28' rx='14'/%3E%3Ctext fill='%23999' font-family='Arial' font-size='12' x='50%25' y='50%25' text-anchor='middle' dy='.3em'%3EH%3C/text%3E%3C/svg%3E";

const DEFAULT_LOCATION: &str = "San Francisco";
const DEFAULT_TITLE: &str = "Untitled Listing";
const DEFAULT_ALT: &str = "Listing";
const DEFAULT_BATHS: &str = "1 bath";
const DEFAULT_HOST: &str = "Host";

/// Image URL that swaps to a placeholder on the first load error only.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSource {
    src: String,
    placeholder: &'static str,
    fell_back: bool,
}

impl ImageSource {
    pub fn new(url: Option<&str>, placeholder: &'static str) -> Self {
        let src = url.filter(|u| !u.is_empty()).unwrap_or(placeholder);
        Self {
            src: src.to_string(),
            placeholder,
            fell_back: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    /// Switch to the placeholder. Returns false once already switched.
    pub fn on_error(&mut self) -> bool {
        if self.fell_back {
            return false;
        }
        self.fell_back = true;
        self.src = self.placeholder.to_string();
        true
    }
}

/// Display data for one listing card, with every default applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingCardViewModel {
    pub id: Option<ListingId>,
    pub picture: ImageSource,
    pub picture_alt: String,
    pub location: String,
    pub rating: String,
    pub title: String,
    pub details: String,
    pub amenities: Vec<String>,
    pub host_picture: ImageSource,
    pub host_name: String,
    pub price: String,
}

fn text_or(field: &Option<String>, default: &str) -> String {
    field
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

impl From<&Listing> for ListingCardViewModel {
    fn from(l: &Listing) -> Self {
        let bedrooms = l.bedrooms.unwrap_or(0.0);
        let guests = l.accommodates.filter(|n| *n != 0.0).unwrap_or(1.0);

        Self {
            id: l.id.clone(),
            picture: ImageSource::new(l.picture_url.as_deref(), PLACEHOLDER_IMG),
            picture_alt: text_or(&l.name, DEFAULT_ALT),
            location: text_or(&l.neighbourhood_cleansed, DEFAULT_LOCATION),
            rating: rating_label(l.review_scores_rating),
            title: text_or(&l.name, DEFAULT_TITLE),
            details: format!(
                "{} bed · {} · {} guests",
                bedrooms,
                text_or(&l.bathrooms_text, DEFAULT_BATHS),
                guests
            ),
            amenities: parse_amenities(l.amenities.as_deref()),
            host_picture: ImageSource::new(l.host_picture_url.as_deref(), PLACEHOLDER_HOST),
            host_name: text_or(&l.host_name, DEFAULT_HOST),
            price: format_price(l.price_value()),
        }
    }
}

/// What the listings container shows for a recomputed sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingsView {
    NoResults,
    Cards(Vec<ListingCardViewModel>),
}

impl ListingsView {
    pub fn from_listings(listings: &[Listing]) -> Self {
        if listings.is_empty() {
            ListingsView::NoResults
        } else {
            ListingsView::Cards(listings.iter().map(Into::into).collect())
        }
    }

    /// Count reported to the listings-count display.
    pub fn count(&self) -> usize {
        match self {
            ListingsView::NoResults => 0,
            ListingsView::Cards(cards) => cards.len(),
        }
    }
}

/// Class and icon of a card's favorite button.
pub fn favorite_button_state(is_favorite: bool) -> (&'static str, &'static str) {
    if is_favorite {
        ("wishlist-btn active", "heart-filled")
    } else {
        ("wishlist-btn", "heart")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loft() -> Listing {
        Listing {
            id: Some(ListingId::Number(1)),
            name: Some("Loft".into()),
            price: Some("$100".into()),
            neighbourhood_cleansed: Some("Mission".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let card = ListingCardViewModel::from(&Listing::default());
        assert_eq!(card.id, None);
        assert_eq!(card.picture.src(), PLACEHOLDER_IMG);
        assert_eq!(card.picture_alt, "Listing");
        assert_eq!(card.location, "San Francisco");
        assert_eq!(card.rating, "New");
        assert_eq!(card.title, "Untitled Listing");
        assert_eq!(card.details, "0 bed · 1 bath · 1 guests");
        assert!(card.amenities.is_empty());
        assert_eq!(card.host_picture.src(), PLACEHOLDER_HOST);
        assert_eq!(card.host_name, "Host");
        assert_eq!(card.price, "$0");
    }

    #[test]
    fn test_full_card() {
        let listing = Listing {
            bedrooms: Some(2.0),
            bathrooms_text: Some("1.5 baths".into()),
            accommodates: Some(4.0),
            review_scores_rating: Some(4.93),
            amenities: Some("['Wifi','Pool','Gym','TV']".into()),
            picture_url: Some("https://example.com/a.jpg".into()),
            host_name: Some("Ana".into()),
            ..loft()
        };
        let card = ListingCardViewModel::from(&listing);
        assert_eq!(card.picture.src(), "https://example.com/a.jpg");
        assert_eq!(card.title, "Loft");
        assert_eq!(card.location, "Mission");
        assert_eq!(card.rating, "4.9");
        assert_eq!(card.details, "2 bed · 1.5 baths · 4 guests");
        assert_eq!(card.amenities, vec!["Wifi", "Pool", "Gym"]);
        assert_eq!(card.host_name, "Ana");
        assert_eq!(card.price, "$100");
    }

    #[test]
    fn test_fractional_bedrooms_shown_as_given() {
        let listing = Listing {
            bedrooms: Some(1.5),
            accommodates: Some(3.0),
            ..loft()
        };
        let card = ListingCardViewModel::from(&listing);
        assert_eq!(card.details, "1.5 bed · 1 bath · 3 guests");
    }

    #[test]
    fn test_image_falls_back_once() {
        let mut image = ImageSource::new(Some("https://example.com/broken.jpg"), PLACEHOLDER_IMG);
        assert!(image.on_error());
        assert_eq!(image.src(), PLACEHOLDER_IMG);
        assert!(!image.on_error());
        assert_eq!(image.src(), PLACEHOLDER_IMG);
    }

    #[test]
    fn test_empty_urls_use_placeholder() {
        let image = ImageSource::new(Some(""), PLACEHOLDER_HOST);
        assert_eq!(image.src(), PLACEHOLDER_HOST);
    }

    #[test]
    fn test_no_results_view() {
        let view = ListingsView::from_listings(&[]);
        assert_eq!(view, ListingsView::NoResults);
        assert_eq!(view.count(), 0);
    }

    #[test]
    fn test_cards_view_counts() {
        let view = ListingsView::from_listings(&[loft(), Listing::default()]);
        assert_eq!(view.count(), 2);
        match view {
            ListingsView::Cards(cards) => assert_eq!(cards[0].title, "Loft"),
            ListingsView::NoResults => panic!("expected cards"),
        }
    }

    #[test]
    fn test_favorite_button_state() {
        assert_eq!(favorite_button_state(true), ("wishlist-btn active", "heart-filled"));
        assert_eq!(favorite_button_state(false), ("wishlist-btn", "heart"));
    }
}
