//! Core build logic for tickdex.
//!
//! This crate contains:
//! - The `SecurityRecord` domain model
//! - Company-name normalization
//! - The capacity-bounded suggestion multimap
//! - Field-spec comparators and the four ranking passes
//! - CSV ingestion of screener exports

pub mod builder;
pub mod error;
pub mod ingest;
pub mod normalize;
pub mod ordering;
pub mod record;
pub mod suggestions;

pub use builder::{build_suggestion_index, build_ticker_directory, SuggestionIndexBuilder};
pub use error::CoreError;
pub use ingest::{read_records, read_records_from_path};
pub use normalize::normalize_company_name;
pub use ordering::make_comparator;
pub use record::SecurityRecord;
pub use suggestions::{SuggestionIndex, MAX_SUGGESTIONS};
