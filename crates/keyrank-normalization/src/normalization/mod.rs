//! Cell-level normalization functions.
//!
//! Every function maps one cell to one cell and is idempotent.

mod numeric;
mod percent;
mod text;

pub use numeric::{coerce_numeric, compare_descending};
pub use percent::{parse_percentage, percent_to_fraction};
pub use text::{normalize_key, trim_list};
