use std::cmp::Ordering;

use crate::record::SecurityRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortField {
    Symbol,
    Name,
    MarketCap,
}

impl SortField {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "Symbol" => Some(Self::Symbol),
            "Name" => Some(Self::Name),
            "Market Cap" => Some(Self::MarketCap),
            _ => None,
        }
    }
}

/// Build a record comparator from a column name, optionally prefixed with
/// `-` for descending order (e.g. `"-Market Cap"`).
///
/// Strings compare lexicographically and market caps numerically. Any
/// non-comparable pair — a missing or NaN market cap, or an unknown column
/// name — compares `Equal`, so a stable sort leaves such records where they
/// were.
pub fn make_comparator(
    field_spec: &str,
) -> impl Fn(&SecurityRecord, &SecurityRecord) -> Ordering {
    let (descending, name) = match field_spec.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, field_spec),
    };
    let field = SortField::parse(name);

    move |a, b| {
        let ordering = match field {
            Some(SortField::Symbol) => a.symbol.cmp(&b.symbol),
            Some(SortField::Name) => a.name.cmp(&b.name),
            Some(SortField::MarketCap) => match (a.market_cap, b.market_cap) {
                (Some(left), Some(right)) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
            None => Ordering::Equal,
        };
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}
