use serde::{Deserialize, Serialize};

use super::{
    entities::{CostInputs, PricingPolicy},
    pricing::{validate_costs, validate_policy},
};

/// Page layout. Mobile stacks inputs above results; desktop shows them side
/// by side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    #[default]
    Mobile,
    Desktop,
}

impl Layout {
    pub fn is_desktop(&self) -> bool {
        matches!(self, Layout::Desktop)
    }

    pub fn toggled(self) -> Self {
        match self {
            Layout::Mobile => Layout::Desktop,
            Layout::Desktop => Layout::Mobile,
        }
    }
}

/// App-wide state shared through context. The calculator's live inputs stay
/// in the page; this only carries what outlives a single page visit.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub layout: Layout,
    /// Values the calculator starts from.
    pub default_costs: CostInputs,
    pub default_policy: PricingPolicy,
}

impl AppState {
    /// Adopts saved settings, keeping factory defaults for anything the
    /// engine would reject. Returns how many sections were rejected.
    pub fn apply_persisted(&mut self, persisted: PersistedState) -> usize {
        let mut rejected = 0;
        self.layout = persisted.layout;
        match validate_costs(&persisted.costs) {
            Ok(()) => self.default_costs = persisted.costs,
            Err(err) => {
                tracing::warn!("ignoring saved cost defaults: {err}");
                rejected += 1;
            }
        }
        match validate_policy(&persisted.policy) {
            Ok(()) => self.default_policy = persisted.policy,
            Err(err) => {
                tracing::warn!("ignoring saved pricing policy: {err}");
                rejected += 1;
            }
        }
        rejected
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            layout: self.layout,
            costs: self.default_costs.clone(),
            policy: self.default_policy.clone(),
        }
    }

    pub fn reset_defaults(&mut self) {
        self.default_costs = CostInputs::default();
        self.default_policy = PricingPolicy::default();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub costs: CostInputs,
    #[serde(default)]
    pub policy: PricingPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_file_fills_in_defaults() {
        let json = r#"{ "layout": "Desktop", "costs": { "hourly_rate": 35.0 } }"#;
        let persisted: PersistedState = serde_json::from_str(json).unwrap();

        assert_eq!(persisted.layout, Layout::Desktop);
        assert_eq!(persisted.costs.hourly_rate, 35.0);
        assert_eq!(persisted.costs.plant_cost, 5.0);
        assert_eq!(persisted.policy, PricingPolicy::default());
    }

    #[test]
    fn invalid_saved_policy_is_ignored() {
        let mut state = AppState::default();
        let mut persisted = state.to_persisted();
        persisted.policy.profit_margin_pct = 100.0;
        persisted.costs.care_hours = 2.0;

        assert_eq!(state.apply_persisted(persisted), 1);

        assert_eq!(state.default_policy, PricingPolicy::default());
        assert_eq!(state.default_costs.care_hours, 2.0);
    }

    #[test]
    fn layout_toggles() {
        assert_eq!(Layout::Mobile.toggled(), Layout::Desktop);
        assert!(Layout::Mobile.toggled().is_desktop());
    }
}
