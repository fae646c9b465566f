//! Built-in reference data: the fleet catalog, price anchors, sample dates,
//! the launch timeline, the annual price table and the bilingual string
//! tables. All of it is immutable and constructed once at startup.

mod fleet;
mod pricing;
mod translations;

pub use fleet::{builtin_anchor_prices, builtin_catalog, builtin_sample_dates, builtin_timeline};
pub use pricing::builtin_annual_price_table;
pub use translations::builtin_translations;
