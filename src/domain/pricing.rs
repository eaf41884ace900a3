use thiserror::Error;

use super::entities::{CostInputs, PricingPolicy, PricingResult, TARGET_MARGIN_PCT, TAX_RATE};

#[derive(Clone, Debug, PartialEq, Error)]
pub enum PricingError {
    #[error("{field} must be a finite amount of zero or more (got {value})")]
    InvalidInput { field: &'static str, value: f64 },
    #[error("{field} must be at least 0% and below 100% (got {value}%)")]
    MarginOutOfRange { field: &'static str, value: f64 },
    #[error("sales discount must be at least 0% and below 100% (got {0}%)")]
    DiscountOutOfRange(f64),
    #[error("{field} is too large to price; reduce the cost inputs")]
    ComputationOverflow { field: &'static str },
}

/// Derives the recommended price for one product.
///
/// Inputs are validated before any arithmetic so a margin of 100% is
/// rejected instead of dividing by zero. The returned result never contains
/// NaN or infinite values.
pub fn compute(costs: &CostInputs, policy: &PricingPolicy) -> Result<PricingResult, PricingError> {
    validate_costs(costs)?;
    validate_policy(policy)?;

    let materials_cost = costs.materials_cost();
    let time_cost = costs.time_cost();
    let total_cost = costs.plant_cost + materials_cost + time_cost;
    ensure_finite(&[
        ("materials cost", materials_cost),
        ("time cost", time_cost),
        ("total cost", total_cost),
    ])?;

    let base_price = price_for_margin(total_cost, policy.profit_margin_pct);
    let tax_amount = if policy.include_tax {
        base_price * TAX_RATE
    } else {
        0.0
    };
    let list_price = base_price + tax_amount;

    let (final_price, discounted_price, min_allowable_price, floor_applied) =
        if policy.has_discount() {
            let discounted = list_price * (1.0 - policy.sales_discount_pct / 100.0);
            let min_base = if policy.minimum_sales_profit_pct > 0.0 {
                price_for_margin(total_cost, policy.minimum_sales_profit_pct)
            } else {
                total_cost
            };
            let min_allowable = with_tax(min_base, policy.include_tax);
            let floor_applied = min_allowable > discounted;
            (
                discounted.max(min_allowable),
                Some(discounted),
                Some(min_allowable),
                floor_applied,
            )
        } else {
            (list_price, None, None, false)
        };

    let (price_ex_tax, actual_tax) = if policy.include_tax {
        let ex_tax = final_price / (1.0 + TAX_RATE);
        (ex_tax, final_price - ex_tax)
    } else {
        (final_price, 0.0)
    };

    let actual_profit = price_ex_tax - total_cost;
    let actual_margin_pct = if price_ex_tax > 0.0 {
        actual_profit / price_ex_tax * 100.0
    } else {
        0.0
    };

    ensure_finite(&[
        ("base price", base_price),
        ("list price", list_price),
        ("minimum allowable price", min_allowable_price.unwrap_or_default()),
        ("final price", final_price),
        ("actual profit", actual_profit),
        ("actual margin", actual_margin_pct),
    ])?;

    Ok(PricingResult {
        materials_cost,
        time_cost,
        total_cost,
        base_price,
        tax_amount,
        list_price,
        discounted_price,
        min_allowable_price,
        floor_applied,
        final_price,
        price_ex_tax,
        actual_tax,
        actual_profit,
        actual_margin_pct,
    })
}

// Each field is finite on its own, but sums and products of large values
// can still overflow.
fn ensure_finite(values: &[(&'static str, f64)]) -> Result<(), PricingError> {
    match values.iter().find(|(_, value)| !value.is_finite()) {
        Some(&(field, _)) => Err(PricingError::ComputationOverflow { field }),
        None => Ok(()),
    }
}

// Callers guarantee margin_pct < 100.
fn price_for_margin(cost: f64, margin_pct: f64) -> f64 {
    cost / (1.0 - margin_pct / 100.0)
}

fn with_tax(price: f64, include_tax: bool) -> f64 {
    if include_tax {
        price * (1.0 + TAX_RATE)
    } else {
        price
    }
}

pub fn validate_costs(costs: &CostInputs) -> Result<(), PricingError> {
    let fields = [
        ("plant cost", costs.plant_cost),
        ("pot cost", costs.pot_cost),
        ("soil cost", costs.soil_cost),
        ("fertilizer cost", costs.fertilizer_cost),
        ("packaging cost", costs.packaging_cost),
        ("other materials cost", costs.other_materials_cost),
        ("care hours", costs.care_hours),
        ("hourly rate", costs.hourly_rate),
    ];

    for (field, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(PricingError::InvalidInput { field, value });
        }
    }
    Ok(())
}

pub fn validate_policy(policy: &PricingPolicy) -> Result<(), PricingError> {
    let margins = [
        ("profit margin", policy.profit_margin_pct),
        ("minimum sales profit", policy.minimum_sales_profit_pct),
    ];
    for (field, value) in margins {
        if !percent_in_range(value) {
            return Err(PricingError::MarginOutOfRange { field, value });
        }
    }

    if !percent_in_range(policy.sales_discount_pct) {
        return Err(PricingError::DiscountOutOfRange(policy.sales_discount_pct));
    }
    Ok(())
}

// NaN fails both comparisons.
fn percent_in_range(value: f64) -> bool {
    value >= 0.0 && value < 100.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarginBand {
    MeetsTarget,
    SalesPricing,
    LowProfit,
    Loss,
}

impl MarginBand {
    pub fn label(&self) -> &'static str {
        match self {
            MarginBand::MeetsTarget => "meets target",
            MarginBand::SalesPricing => "sales pricing",
            MarginBand::LowProfit => "low profit",
            MarginBand::Loss => "loss!",
        }
    }
}

/// Display band for an achieved margin. The fixed target and the
/// configurable sales floor are separate thresholds.
pub fn classify_margin(margin_pct: f64, minimum_sales_profit_pct: f64) -> MarginBand {
    if margin_pct >= TARGET_MARGIN_PCT {
        MarginBand::MeetsTarget
    } else if margin_pct >= minimum_sales_profit_pct {
        MarginBand::SalesPricing
    } else if margin_pct >= 0.0 {
        MarginBand::LowProfit
    } else {
        MarginBand::Loss
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn default_inputs_price_at_thirty_percent_margin() {
        let result = compute(&CostInputs::default(), &PricingPolicy::default()).unwrap();

        assert!(approx(result.materials_cost, 5.0));
        assert!(approx(result.time_cost, 20.0));
        assert!(approx(result.total_cost, 30.0));
        assert!(approx(result.base_price, 30.0 / 0.7));
        assert!(approx(result.tax_amount, 30.0 / 0.7 * 0.1));
        assert!(approx(result.final_price, 47.142857142857146));
        assert!(approx(result.actual_margin_pct, 30.0));
        assert!(approx(result.actual_profit, 30.0 / 0.7 - 30.0));
        assert_eq!(result.discounted_price, None);
        assert!(!result.floor_applied);
    }

    #[test]
    fn full_margin_is_rejected_before_division() {
        let policy = PricingPolicy {
            profit_margin_pct: 100.0,
            ..PricingPolicy::default()
        };
        let err = compute(&CostInputs::default(), &policy).unwrap_err();
        assert_eq!(
            err,
            PricingError::MarginOutOfRange {
                field: "profit margin",
                value: 100.0
            }
        );
    }

    #[test]
    fn negative_and_nan_inputs_are_rejected() {
        let costs = CostInputs {
            soil_cost: -1.0,
            ..CostInputs::default()
        };
        assert!(matches!(
            compute(&costs, &PricingPolicy::default()),
            Err(PricingError::InvalidInput { field: "soil cost", .. })
        ));

        let costs = CostInputs {
            hourly_rate: f64::INFINITY,
            ..CostInputs::default()
        };
        assert!(matches!(
            compute(&costs, &PricingPolicy::default()),
            Err(PricingError::InvalidInput { field: "hourly rate", .. })
        ));

        let policy = PricingPolicy {
            profit_margin_pct: f64::NAN,
            ..PricingPolicy::default()
        };
        assert!(matches!(
            compute(&CostInputs::default(), &policy),
            Err(PricingError::MarginOutOfRange { .. })
        ));

        let policy = PricingPolicy {
            sales_discount_pct: -5.0,
            ..PricingPolicy::default()
        };
        assert_eq!(
            compute(&CostInputs::default(), &policy).unwrap_err(),
            PricingError::DiscountOutOfRange(-5.0)
        );
    }

    #[test]
    fn deep_discount_is_held_at_minimum_margin() {
        let policy = PricingPolicy {
            sales_discount_pct: 50.0,
            minimum_sales_profit_pct: 10.0,
            ..PricingPolicy::default()
        };
        let result = compute(&CostInputs::default(), &policy).unwrap();

        let floor = 30.0 / 0.9 * 1.1;
        assert!(result.floor_applied);
        assert!(approx(result.min_allowable_price.unwrap(), floor));
        assert!(approx(result.final_price, floor));
        assert!(approx(result.actual_margin_pct, 10.0));
    }

    #[test]
    fn shallow_discount_passes_through() {
        let policy = PricingPolicy {
            sales_discount_pct: 10.0,
            minimum_sales_profit_pct: 10.0,
            ..PricingPolicy::default()
        };
        let result = compute(&CostInputs::default(), &policy).unwrap();

        assert!(!result.floor_applied);
        assert!(approx(result.final_price, result.list_price * 0.9));
        assert!(approx(
            result.discount_amount().unwrap(),
            result.list_price * 0.1
        ));
    }

    #[test]
    fn zero_floor_protects_cost_without_tax() {
        let policy = PricingPolicy {
            sales_discount_pct: 50.0,
            minimum_sales_profit_pct: 0.0,
            include_tax: false,
            ..PricingPolicy::default()
        };
        let result = compute(&CostInputs::default(), &policy).unwrap();

        assert!(result.floor_applied);
        assert!(approx(result.final_price, 30.0));
        assert_eq!(result.actual_tax, 0.0);
        assert!(approx(result.actual_profit, 0.0));
    }

    #[test]
    fn free_product_reports_zero_margin() {
        let costs = CostInputs {
            plant_cost: 0.0,
            pot_cost: 0.0,
            soil_cost: 0.0,
            fertilizer_cost: 0.0,
            packaging_cost: 0.0,
            other_materials_cost: 0.0,
            care_hours: 0.0,
            hourly_rate: 0.0,
        };
        let result = compute(&costs, &PricingPolicy::default()).unwrap();
        assert_eq!(result.final_price, 0.0);
        assert_eq!(result.actual_margin_pct, 0.0);
    }

    #[test]
    fn huge_inputs_overflow_into_an_error() {
        let costs = CostInputs {
            care_hours: 1e200,
            hourly_rate: 1e200,
            ..CostInputs::default()
        };
        assert_eq!(
            compute(&costs, &PricingPolicy::default()).unwrap_err(),
            PricingError::ComputationOverflow { field: "time cost" }
        );

        // Total is finite but dividing by 1 - 95% is not.
        let costs = CostInputs {
            plant_cost: f64::MAX / 2.0,
            ..CostInputs::default()
        };
        let policy = PricingPolicy {
            profit_margin_pct: 95.0,
            ..PricingPolicy::default()
        };
        assert_eq!(
            compute(&costs, &policy).unwrap_err(),
            PricingError::ComputationOverflow { field: "base price" }
        );
    }

    #[test]
    fn margin_bands() {
        assert_eq!(classify_margin(30.0, 10.0), MarginBand::MeetsTarget);
        assert_eq!(classify_margin(20.0, 10.0), MarginBand::MeetsTarget);
        assert_eq!(classify_margin(12.0, 10.0), MarginBand::SalesPricing);
        assert_eq!(classify_margin(5.0, 10.0), MarginBand::LowProfit);
        assert_eq!(classify_margin(0.0, 10.0), MarginBand::LowProfit);
        assert_eq!(classify_margin(-0.1, 0.0), MarginBand::Loss);
    }

    fn costs_strategy() -> impl Strategy<Value = CostInputs> {
        (
            0.0..100.0f64,
            0.0..20.0f64,
            0.0..20.0f64,
            0.0..20.0f64,
            0.0..20.0f64,
            0.0..20.0f64,
            0.0..10.0f64,
            0.0..100.0f64,
        )
            .prop_map(
                |(plant, pot, soil, fert, pack, other, hours, rate)| CostInputs {
                    plant_cost: plant,
                    pot_cost: pot,
                    soil_cost: soil,
                    fertilizer_cost: fert,
                    packaging_cost: pack,
                    other_materials_cost: other,
                    care_hours: hours,
                    hourly_rate: rate,
                },
            )
    }

    proptest! {
        #[test]
        fn base_price_rises_with_margin(
            costs in costs_strategy().prop_filter("needs cost", |c| c.total_cost() > 0.01),
            low in 20u8..99,
            step in 1u8..80,
        ) {
            let high = (low + step).min(99);
            prop_assume!(high > low);
            let at = |margin: u8| {
                let policy = PricingPolicy {
                    profit_margin_pct: margin as f64,
                    ..PricingPolicy::default()
                };
                compute(&costs, &policy).unwrap().base_price
            };
            prop_assert!(at(high) > at(low));
        }

        #[test]
        fn discounted_price_never_breaks_floor(
            costs in costs_strategy(),
            margin in 20u8..=95,
            discount in 1u8..=50,
            floor in 0u8..=20,
            include_tax in any::<bool>(),
        ) {
            let policy = PricingPolicy {
                profit_margin_pct: margin as f64,
                sales_discount_pct: discount as f64,
                minimum_sales_profit_pct: floor as f64,
                include_tax,
            };
            let result = compute(&costs, &policy).unwrap();
            let min_allowable = result.min_allowable_price.unwrap();
            prop_assert!(result.final_price >= min_allowable);
            prop_assert!(result.actual_margin_pct.is_finite());
        }

        #[test]
        fn tax_backs_out_of_final_price(
            costs in costs_strategy(),
            margin in 20u8..=95,
            discount in 0u8..=50,
            floor in 0u8..=20,
        ) {
            let policy = PricingPolicy {
                profit_margin_pct: margin as f64,
                sales_discount_pct: discount as f64,
                minimum_sales_profit_pct: floor as f64,
                include_tax: true,
            };
            let result = compute(&costs, &policy).unwrap();
            prop_assert!(approx(result.price_ex_tax * (1.0 + TAX_RATE), result.final_price));
            prop_assert!(approx(result.price_ex_tax + result.actual_tax, result.final_price));
            if !result.floor_applied {
                let kept = 1.0 - discount as f64 / 100.0;
                prop_assert!(approx(result.price_ex_tax, result.base_price * kept));
                prop_assert!(approx(result.actual_tax, result.tax_amount * kept));
            }
        }
    }
}
