use crate::domain::DestinationResult;

/// Rank anywhere-search destinations by cheapest fare.
///
/// Entries flagged `failed`, or without a present minimum price, are
/// excluded, strictly, even when a failed entry happens to carry a price.
/// The sort is stable: destinations sharing a minimum price keep their
/// relative input order. An empty result is the normal "no matching
/// destinations" outcome.
pub fn rank_destinations(mut results: Vec<DestinationResult>) -> Vec<DestinationResult> {
    results.retain(|result| !result.failed && result.min_price.is_some());
    results.sort_by_key(|result| result.min_price);
    results
}
