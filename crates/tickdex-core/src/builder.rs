use std::collections::HashMap;

use crate::normalize::normalize_company_name;
use crate::ordering::make_comparator;
use crate::record::SecurityRecord;
use crate::suggestions::SuggestionIndex;

/// Runs the four ranking passes over a record set, accumulating into one
/// shared [`SuggestionIndex`].
///
/// Ranking is implicit: passes execute in priority order and the index's
/// `insert` is a no-op once a key is full or already holds the ticker, so
/// earlier passes permanently reserve slots ahead of later ones. Within the
/// market-cap-ranked passes, records are re-sorted in place descending by
/// market cap before the sweep, so higher-cap tickers land first for any
/// shared key. Do not collapse the passes into a single sweep with an
/// explicit comparator; the slot-reservation semantics are the contract.
pub struct SuggestionIndexBuilder {
    records: Vec<SecurityRecord>,
    index: SuggestionIndex,
}

impl SuggestionIndexBuilder {
    pub fn new(records: Vec<SecurityRecord>) -> Self {
        Self {
            records,
            index: SuggestionIndex::new(),
        }
    }

    /// Pass 1: every ticker suggests itself under its exact symbol.
    pub fn add_exact_tickers(&mut self) {
        self.records.sort_by(make_comparator("Symbol"));
        for record in &self.records {
            self.index.insert(record.symbol.clone(), &record.symbol);
        }
    }

    /// Pass 2: every proper prefix of a ticker, longest first, suggests the
    /// ticker. A one-character ticker contributes nothing here.
    pub fn add_ticker_prefixes(&mut self) {
        self.records.sort_by(make_comparator("-Market Cap"));
        for record in &self.records {
            let ends = prefix_ends(&record.symbol);
            // Skip the full-length prefix; pass 1 owns the exact symbol.
            for &end in ends.iter().rev().skip(1) {
                self.index.insert(&record.symbol[..end], &record.symbol);
            }
        }
    }

    /// Pass 3: every prefix of the normalized company name suggests the
    /// ticker.
    pub fn add_name_prefixes(&mut self) {
        self.records.sort_by(make_comparator("-Market Cap"));
        for record in &self.records {
            let name = normalize_company_name(&record.name);
            for &end in prefix_ends(&name).iter().rev() {
                self.index.insert(&name[..end], &record.symbol);
            }
        }
    }

    /// Pass 4: for every space in the normalized name, every prefix of the
    /// suffix starting just after that space suggests the ticker. The first
    /// word alone never generates keys here; a single-word name contributes
    /// nothing.
    pub fn add_word_prefixes(&mut self) {
        self.records.sort_by(make_comparator("-Market Cap"));
        for record in &self.records {
            let name = normalize_company_name(&record.name);
            for (offset, ch) in name.char_indices() {
                if ch != ' ' {
                    continue;
                }
                let suffix = &name[offset + 1..];
                for &end in prefix_ends(suffix).iter().rev() {
                    self.index.insert(&suffix[..end], &record.symbol);
                }
            }
        }
    }

    pub fn finish(self) -> SuggestionIndex {
        self.index
    }
}

/// Build the full suggestion index: exact tickers, then ticker prefixes,
/// then full-name prefixes, then per-word name prefixes.
pub fn build_suggestion_index(records: Vec<SecurityRecord>) -> SuggestionIndex {
    let record_count = records.len();
    let mut builder = SuggestionIndexBuilder::new(records);
    builder.add_exact_tickers();
    builder.add_ticker_prefixes();
    builder.add_name_prefixes();
    builder.add_word_prefixes();

    let index = builder.finish();
    log::debug!(
        "built suggestion index: {} keys from {} records",
        index.len(),
        record_count
    );
    index
}

/// Build the ticker directory: symbol to raw company name, last write wins
/// on duplicate symbols.
pub fn build_ticker_directory(records: &[SecurityRecord]) -> HashMap<String, String> {
    let mut directory = HashMap::with_capacity(records.len());
    for record in records {
        directory.insert(record.symbol.clone(), record.name.clone());
    }
    directory
}

/// Byte offsets ending every non-empty prefix of `text`, shortest first.
fn prefix_ends(text: &str) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }
    text.char_indices()
        .skip(1)
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect()
}
