//! Pricing logic for nursery products lives here.

pub mod app_state;
pub mod comparison;
pub mod entities;
pub mod pricing;
pub mod summary;

#[allow(unused_imports)]
pub use app_state::{AppState, Layout, PersistedState};
#[allow(unused_imports)]
pub use comparison::{compare, ComparisonResult, RankedPrice};
#[allow(unused_imports)]
pub use entities::{
    CompetitorEntry, CostInputs, PricingPolicy, PricingResult, MINIMUM_SALES_PROFIT_RANGE,
    PROFIT_MARGIN_RANGE, SALES_DISCOUNT_RANGE, TARGET_MARGIN_PCT, TAX_RATE,
};
#[allow(unused_imports)]
pub use pricing::{classify_margin, compute, MarginBand, PricingError};
#[allow(unused_imports)]
pub use summary::pricing_summary;
