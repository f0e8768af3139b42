//! Listing card discovery
//!
//! Strategies are tried in order; the first one that finds anything wins.
//! Finding nothing at all is not an error.

use crate::crawler::matcher::ElementMatcher;
use scraper::{ElementRef, Html};

/// Known listing card classes
pub const PRIMARY_STRATEGY: ElementMatcher =
    ElementMatcher::any_class("div", &["car-listing", "listing-card", "car-card"]);

/// Loose fallback; may also pick up navigation or ad blocks
pub const FALLBACK_STRATEGY: ElementMatcher =
    ElementMatcher::class_contains("div", &["car", "listing"]);

/// Strategies in priority order
pub const LISTING_STRATEGIES: [ElementMatcher; 2] = [PRIMARY_STRATEGY, FALLBACK_STRATEGY];

/// Finds candidate listing elements using [`LISTING_STRATEGIES`]
pub fn locate_listings(document: &Html) -> Vec<ElementRef<'_>> {
    locate_with(document, &LISTING_STRATEGIES)
}

/// Finds candidate listing elements, in document order, with the given
/// strategies
pub fn locate_with<'a>(document: &'a Html, strategies: &[ElementMatcher]) -> Vec<ElementRef<'a>> {
    for (index, strategy) in strategies.iter().enumerate() {
        let found = select_matching(document, strategy);

        if index > 0 {
            tracing::warn!(
                "No listings matched earlier strategies, fallback #{} found {}",
                index,
                found.len()
            );
        } else {
            tracing::info!("Found {} listings with known card classes", found.len());
        }

        if !found.is_empty() {
            return found;
        }
    }

    Vec::new()
}

/// Returns every element of the document matching one strategy
pub fn select_matching<'a>(document: &'a Html, matcher: &ElementMatcher) -> Vec<ElementRef<'a>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| matcher.matches(element))
        .collect()
}
