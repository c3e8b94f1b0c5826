use super::types::SearchCriteria;
use crate::items::types::{NAME_FIELD, PRICE_FIELD};
use crate::storage::Filter;

/// Builds the compound predicate for an item search.
///
/// One atomic predicate per supplied criterion, joined with AND. With no
/// criteria the result is the empty conjunction, which matches every item.
pub fn compose_filter(criteria: &SearchCriteria) -> Filter {
    let mut filters = Vec::new();

    if let Some(name) = &criteria.name {
        filters.push(Filter::regex_ci(NAME_FIELD, name));
    }
    if let Some(min_price) = criteria.min_price {
        filters.push(Filter::gte(PRICE_FIELD, min_price));
    }
    if let Some(max_price) = criteria.max_price {
        filters.push(Filter::lte(PRICE_FIELD, max_price));
    }

    Filter::and(filters)
}
