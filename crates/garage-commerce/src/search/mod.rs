//! Search module.
//!
//! Live text filtering over the catalog snapshot.

mod filter;
mod results;

pub use filter::TextFilter;
pub use results::FilterOutcome;
