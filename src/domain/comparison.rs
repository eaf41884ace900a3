use super::entities::CompetitorEntry;

pub const OUR_PRICE_LABEL: &str = "Our Price";

#[derive(Clone, Debug, PartialEq)]
pub struct RankedPrice {
    pub name: String,
    pub price: f64,
    pub is_ours: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonResult {
    pub average: f64,
    pub competitive: bool,
    /// How far our price sits above (positive) or below the average.
    pub difference: f64,
    pub competitor_count: usize,
    /// Competitors and our price, cheapest first.
    pub ranking: Vec<RankedPrice>,
}

/// Compares our price against whichever competitor slots were filled in.
///
/// A slot counts as filled when its price is above zero. Blank names fall
/// back to `Competitor N` using the 1-based slot. Returns `None` when no
/// slot is filled.
pub fn compare(competitors: &[CompetitorEntry], our_price: f64) -> Option<ComparisonResult> {
    let entered: Vec<RankedPrice> = competitors
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.price.is_finite() && entry.price > 0.0)
        .map(|(slot, entry)| RankedPrice {
            name: display_name(&entry.name, slot),
            price: entry.price,
            is_ours: false,
        })
        .collect();

    if entered.is_empty() {
        return None;
    }

    let competitor_count = entered.len();
    let average = entered.iter().map(|entry| entry.price).sum::<f64>() / competitor_count as f64;

    let mut ranking = entered;
    ranking.push(RankedPrice {
        name: OUR_PRICE_LABEL.to_string(),
        price: our_price,
        is_ours: true,
    });
    // Stable, so equal prices keep slot order with ours last.
    ranking.sort_by(|a, b| a.price.total_cmp(&b.price));

    Some(ComparisonResult {
        average,
        competitive: our_price <= average,
        difference: our_price - average,
        competitor_count,
        ranking,
    })
}

fn display_name(name: &str, slot: usize) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        format!("Competitor {}", slot + 1)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices(result: &ComparisonResult) -> Vec<f64> {
        result.ranking.iter().map(|entry| entry.price).collect()
    }

    #[test]
    fn unfilled_slots_give_no_comparison() {
        let competitors = vec![
            CompetitorEntry::new("Local Garden Center", 0.0),
            CompetitorEntry::new("", 0.0),
            CompetitorEntry::new("Online Retailer", 0.0),
        ];
        assert_eq!(compare(&competitors, 47.14), None);
        assert_eq!(compare(&[], 47.14), None);
    }

    #[test]
    fn our_price_below_average_is_competitive() {
        let competitors = vec![
            CompetitorEntry::new("A", 10.0),
            CompetitorEntry::new("B", 15.0),
        ];
        let result = compare(&competitors, 12.0).unwrap();

        assert_eq!(result.average, 12.5);
        assert!(result.competitive);
        assert_eq!(result.difference, -0.5);
        assert_eq!(result.competitor_count, 2);
        assert_eq!(prices(&result), vec![10.0, 12.0, 15.0]);
        assert!(result.ranking[1].is_ours);
        assert_eq!(result.ranking[1].name, OUR_PRICE_LABEL);
    }

    #[test]
    fn premium_price_reports_difference() {
        let competitors = vec![
            CompetitorEntry::new("Big Box Store", 20.0),
            CompetitorEntry::new("", 0.0),
            CompetitorEntry::new("", 30.0),
        ];
        let result = compare(&competitors, 40.0).unwrap();

        assert!(!result.competitive);
        assert_eq!(result.average, 25.0);
        assert_eq!(result.difference, 15.0);
        assert_eq!(result.competitor_count, 2);
        assert_eq!(result.ranking[1].name, "Competitor 3");
        assert!(result.ranking[2].is_ours);
    }

    #[test]
    fn ties_keep_slot_order() {
        let competitors = vec![
            CompetitorEntry::new("First", 12.0),
            CompetitorEntry::new("Second", 12.0),
        ];
        let result = compare(&competitors, 12.0).unwrap();
        let names: Vec<_> = result.ranking.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["First", "Second", OUR_PRICE_LABEL]);
        assert!(result.competitive);
    }
}
