//! Listing record extraction
//!
//! Each field is located by its own rule: a tag plus three class-name
//! variants (plain, `car-` prefixed, `listing-` prefixed). The first matching
//! descendant of the listing element, in document order, supplies the value.
//! Fields are looked up independently; a field without a match is
//! [`PLACEHOLDER`](crate::record::PLACEHOLDER).

use crate::crawler::locator::locate_listings;
use crate::crawler::matcher::ElementMatcher;
use crate::record::{Field, ListingRecord};
use scraper::{ElementRef, Html};

/// Returns the matching rule for one field
pub const fn field_matcher(field: Field) -> ElementMatcher {
    match field {
        Field::Title => ElementMatcher::any_class("h2", &["title", "car-title", "listing-title"]),
        Field::Price => ElementMatcher::any_class("div", &["price", "car-price", "listing-price"]),
        Field::Year => ElementMatcher::any_class("div", &["year", "car-year", "listing-year"]),
        Field::KmDriven => ElementMatcher::any_class("div", &["km-driven", "car-km", "listing-km"]),
        Field::FuelType => {
            ElementMatcher::any_class("div", &["fuel-type", "car-fuel", "listing-fuel"])
        }
        Field::Location => {
            ElementMatcher::any_class("div", &["location", "car-location", "listing-location"])
        }
        Field::SellerType => {
            ElementMatcher::any_class("div", &["seller-type", "car-seller", "listing-seller"])
        }
        Field::Emi => ElementMatcher::any_class("div", &["emi", "car-emi", "listing-emi"]),
    }
}

/// Builds a record from one listing element
pub fn extract_record(element: ElementRef<'_>) -> ListingRecord {
    ListingRecord::from_lookup(|field| {
        let value = find_field(element, &field_matcher(field));
        if value.is_none() {
            tracing::debug!("Listing has no {} element", field.name());
        }
        value
    })
}

/// Finds the first descendant matching `matcher` and returns its trimmed text
///
/// The listing element itself is never considered.
pub fn find_field(element: ElementRef<'_>, matcher: &ElementMatcher) -> Option<String> {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|candidate| matcher.matches(candidate))
        .map(|found| found.text().collect::<String>().trim().to_string())
}

/// Parses a page and extracts one record per located listing
pub fn parse_listings(html: &str) -> Vec<ListingRecord> {
    let document = Html::parse_document(html);

    locate_listings(&document)
        .into_iter()
        .map(|element| {
            let record = extract_record(element);
            tracing::debug!("Scraped listing: {}", record.title());
            record
        })
        .collect()
}
