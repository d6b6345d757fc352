pub mod engine;
pub mod outcome;

pub use engine::compute;
pub use outcome::{
    EfficiencyRatios, GrowthRatios, LeverageRatios, LiquidityRatios, ProfitabilityRatios,
    RatioCategory, RatioSet, RatioValue, ValuationRatios, CORE_CATEGORIES, KNOWN_RATIOS,
};
