use std::fmt::Write as _;

use super::{
    comparison::ComparisonResult,
    entities::{CostInputs, PricingPolicy, PricingResult},
};

/// Builds the copyable plain-text pricing decision.
///
/// Only quantities present in `result` are referenced, so the text is valid
/// for both the discounted and the undiscounted path.
pub fn pricing_summary(
    costs: &CostInputs,
    policy: &PricingPolicy,
    result: &PricingResult,
    comparison: Option<&ComparisonResult>,
) -> String {
    let tax_text = if policy.include_tax && result.actual_tax > 0.0 {
        format!(" (inc GST ${:.2})", result.actual_tax)
    } else {
        String::new()
    };
    let discount_text = if policy.has_discount() {
        format!(" (after {}% discount)", policy.sales_discount_pct)
    } else {
        String::new()
    };

    let mut summary = String::from("Product Pricing Decision:\n");
    // Writing into a String cannot fail.
    let _ = writeln!(
        summary,
        "- Final Selling Price: ${:.2}{tax_text}{discount_text}",
        result.final_price
    );
    let _ = writeln!(summary, "- Total Cost: ${:.2}", result.total_cost);
    let _ = writeln!(
        summary,
        "- Actual Profit: ${:.2} ({:.1}%)",
        result.actual_profit, result.actual_margin_pct
    );
    let _ = writeln!(
        summary,
        "- Cost Breakdown: Plant ${:.2} + Materials ${:.2} (incl. packaging ${:.2}) + Time ${:.2}",
        costs.plant_cost, result.materials_cost, costs.packaging_cost, result.time_cost
    );

    if let Some(comparison) = comparison {
        let _ = writeln!(
            summary,
            "- Market Position: Compared to {} competitors",
            comparison.competitor_count
        );
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{comparison::compare, entities::CompetitorEntry, pricing::compute};

    #[test]
    fn default_summary_mentions_tax_but_no_discount() {
        let costs = CostInputs::default();
        let policy = PricingPolicy::default();
        let result = compute(&costs, &policy).unwrap();
        let text = pricing_summary(&costs, &policy, &result, None);

        assert!(text.contains("- Final Selling Price: $47.14 (inc GST $4.29)\n"));
        assert!(text.contains("- Total Cost: $30.00"));
        assert!(text.contains("- Actual Profit: $12.86 (30.0%)"));
        assert!(text.contains(
            "Plant $5.00 + Materials $5.00 (incl. packaging $1.50) + Time $20.00"
        ));
        assert!(!text.contains("discount"));
        assert!(!text.contains("Market Position"));
    }

    #[test]
    fn discounted_summary_without_tax() {
        let costs = CostInputs::default();
        let policy = PricingPolicy {
            sales_discount_pct: 20.0,
            include_tax: false,
            ..PricingPolicy::default()
        };
        let result = compute(&costs, &policy).unwrap();
        let comparison = compare(&[CompetitorEntry::new("Nursery", 40.0)], result.final_price);
        let text = pricing_summary(&costs, &policy, &result, comparison.as_ref());

        assert!(text.contains("(after 20% discount)"));
        assert!(!text.contains("GST"));
        assert!(text.contains("- Market Position: Compared to 1 competitors"));
    }
}
