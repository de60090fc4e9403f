use crate::domain::TariffOption;
use crate::payload::FareGroup;

use super::normalize::normalize_records;

/// Build the ranked tariff table for one flight chain.
///
/// The chain is looked up in the first fare group that carries it, matching
/// the upstream service's one-group-per-chain layout. An absent chain yields
/// an empty table; the caller renders a "no tariffs" state, not an error.
/// Rows sort ascending by price, ties broken by fare-class id so the order
/// is deterministic rather than insertion order.
pub fn build_tariff_table(groups: &[FareGroup], chain_id: &str) -> Vec<TariffOption> {
    let records = groups.iter().find_map(|group| match group {
        FareGroup::Tariffs(chains) => chains.get(chain_id),
        FareGroup::Failed { .. } | FareGroup::Unrecognized(_) => None,
    });

    let Some(records) = records else {
        return Vec::new();
    };

    let mut options: Vec<TariffOption> =
        normalize_records(records).into_iter().map(TariffOption::from).collect();
    options.sort_by(|a, b| {
        a.price.cmp(&b.price).then_with(|| a.fare_class_id.cmp(&b.fare_class_id))
    });
    options
}
