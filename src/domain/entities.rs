use serde::{Deserialize, Serialize};

/// Fixed tax rate added on top of the pre-tax price when tax is enabled (GST).
pub const TAX_RATE: f64 = 0.10;

/// Margin at or above which a price is considered on target.
pub const TARGET_MARGIN_PCT: f64 = 20.0;

/// Slider affordances for the policy fields. The engine validates the wider
/// domain ranges on its own.
pub const PROFIT_MARGIN_RANGE: (u8, u8, u8) = (20, 95, 5);
pub const SALES_DISCOUNT_RANGE: (u8, u8, u8) = (0, 50, 5);
pub const MINIMUM_SALES_PROFIT_RANGE: (u8, u8, u8) = (0, 20, 1);

/// Everything it costs to get one plant ready for sale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostInputs {
    /// Wholesale cost or cost to grow the plant.
    pub plant_cost: f64,
    pub pot_cost: f64,
    pub soil_cost: f64,
    pub fertilizer_cost: f64,
    /// Box, padding and other shipping materials.
    pub packaging_cost: f64,
    pub other_materials_cost: f64,
    pub care_hours: f64,
    pub hourly_rate: f64,
}

impl CostInputs {
    pub fn materials_cost(&self) -> f64 {
        self.pot_cost
            + self.soil_cost
            + self.fertilizer_cost
            + self.packaging_cost
            + self.other_materials_cost
    }

    pub fn time_cost(&self) -> f64 {
        self.care_hours * self.hourly_rate
    }

    pub fn total_cost(&self) -> f64 {
        self.plant_cost + self.materials_cost() + self.time_cost()
    }
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            plant_cost: 5.0,
            pot_cost: 2.0,
            soil_cost: 1.0,
            fertilizer_cost: 0.5,
            packaging_cost: 1.5,
            other_materials_cost: 0.0,
            care_hours: 1.0,
            hourly_rate: 20.0,
        }
    }
}

/// How the price is derived from cost. A zero discount disables the
/// discount path entirely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    pub profit_margin_pct: f64,
    pub sales_discount_pct: f64,
    /// Lowest margin a discounted price may fall to.
    pub minimum_sales_profit_pct: f64,
    pub include_tax: bool,
}

impl PricingPolicy {
    pub fn has_discount(&self) -> bool {
        self.sales_discount_pct > 0.0
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            profit_margin_pct: 30.0,
            sales_discount_pct: 0.0,
            minimum_sales_profit_pct: 10.0,
            include_tax: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingResult {
    pub materials_cost: f64,
    pub time_cost: f64,
    pub total_cost: f64,
    /// Pre-tax, pre-discount price that hits the target margin.
    pub base_price: f64,
    pub tax_amount: f64,
    /// Price after tax, before any discount.
    pub list_price: f64,
    /// Only present when a discount was requested.
    pub discounted_price: Option<f64>,
    pub min_allowable_price: Option<f64>,
    /// True when the minimum-margin floor overrode the discounted price.
    pub floor_applied: bool,
    pub final_price: f64,
    pub price_ex_tax: f64,
    pub actual_tax: f64,
    pub actual_profit: f64,
    pub actual_margin_pct: f64,
}

impl PricingResult {
    /// Amount taken off the list price by the discount, after the floor.
    pub fn discount_amount(&self) -> Option<f64> {
        self.discounted_price
            .map(|_| (self.list_price - self.final_price).max(0.0))
    }
}

/// A price seen at another seller. Never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompetitorEntry {
    pub name: String,
    pub price: f64,
}

impl CompetitorEntry {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
