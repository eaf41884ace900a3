//! Text fields from the page, parsed into engine inputs.

use thiserror::Error;

use crate::domain::{pricing::validate_costs, CompetitorEntry, CostInputs, PricingError};

#[derive(Clone, Debug, PartialEq, Error)]
pub enum FormError {
    #[error("{field} must be a number (got \"{input}\")")]
    NotANumber { field: &'static str, input: String },
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Raw text of every cost field, as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct CostForm {
    pub plant_cost: String,
    pub pot_cost: String,
    pub soil_cost: String,
    pub fertilizer_cost: String,
    pub packaging_cost: String,
    pub other_materials_cost: String,
    pub care_hours: String,
    pub hourly_rate: String,
}

impl CostForm {
    pub fn from_inputs(costs: &CostInputs) -> Self {
        Self {
            plant_cost: format_amount(costs.plant_cost),
            pot_cost: format_amount(costs.pot_cost),
            soil_cost: format_amount(costs.soil_cost),
            fertilizer_cost: format_amount(costs.fertilizer_cost),
            packaging_cost: format_amount(costs.packaging_cost),
            other_materials_cost: format_amount(costs.other_materials_cost),
            care_hours: format_amount(costs.care_hours),
            hourly_rate: format_amount(costs.hourly_rate),
        }
    }

    pub fn parse(&self) -> Result<CostInputs, FormError> {
        let costs = CostInputs {
            plant_cost: parse_amount("plant cost", &self.plant_cost)?,
            pot_cost: parse_amount("pot cost", &self.pot_cost)?,
            soil_cost: parse_amount("soil cost", &self.soil_cost)?,
            fertilizer_cost: parse_amount("fertilizer cost", &self.fertilizer_cost)?,
            packaging_cost: parse_amount("packaging cost", &self.packaging_cost)?,
            other_materials_cost: parse_amount("other materials cost", &self.other_materials_cost)?,
            care_hours: parse_amount("care hours", &self.care_hours)?,
            hourly_rate: parse_amount("hourly rate", &self.hourly_rate)?,
        };
        validate_costs(&costs)?;
        Ok(costs)
    }
}

/// One competitor slot on the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompetitorForm {
    pub name: String,
    pub price: String,
}

impl CompetitorForm {
    pub fn parse(&self) -> Result<CompetitorEntry, FormError> {
        let price = parse_amount("competitor price", &self.price)?;
        if !price.is_finite() || price < 0.0 {
            return Err(PricingError::InvalidInput {
                field: "competitor price",
                value: price,
            }
            .into());
        }
        Ok(CompetitorEntry::new(self.name.clone(), price))
    }
}

pub fn parse_competitors(slots: &[CompetitorForm]) -> Result<Vec<CompetitorEntry>, FormError> {
    slots.iter().map(CompetitorForm::parse).collect()
}

/// Parses a currency or hour amount. Blank means zero and a leading `$` is
/// accepted.
pub fn parse_amount(field: &'static str, input: &str) -> Result<f64, FormError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed.parse::<f64>().map_err(|_| FormError::NotANumber {
        field,
        input: input.to_string(),
    })
}

pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}
