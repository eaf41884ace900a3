//! Class helpers so pages share one look. The classes live in `assets/main.css`.

use crate::domain::{Layout, MarginBand};

// ============================================
// LAYOUT
// ============================================

pub fn calculator_layout(layout: Layout) -> &'static str {
    match layout {
        Layout::Desktop => "calculator calculator-desktop",
        Layout::Mobile => "calculator calculator-mobile",
    }
}

pub const PANEL: &str = "panel";
pub const PANEL_TITLE: &str = "panel-title";
pub const SECTION_TITLE: &str = "section-title";
pub const STACK: &str = "stack";

// ============================================
// INPUTS / BUTTONS
// ============================================

pub const FIELD: &str = "field";
pub const LABEL: &str = "field-label";
pub const HELP: &str = "field-help";
pub const INPUT: &str = "input";
pub const SLIDER: &str = "slider";
pub const CHECKBOX_ROW: &str = "checkbox-row";

pub const BTN_PRIMARY: &str = "btn btn-primary";
pub const BTN_SECONDARY: &str = "btn btn-secondary";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-btn nav-btn-active"
    } else {
        "nav-btn"
    }
}

// ============================================
// STATUS
// ============================================

pub fn margin_band(band: MarginBand) -> &'static str {
    match band {
        MarginBand::MeetsTarget => "badge badge-good",
        MarginBand::SalesPricing => "badge badge-info",
        MarginBand::LowProfit => "badge badge-warn",
        MarginBand::Loss => "badge badge-bad",
    }
}

pub fn margin_band_icon(band: MarginBand) -> &'static str {
    match band {
        MarginBand::MeetsTarget => "✅",
        MarginBand::SalesPricing => "ℹ️",
        MarginBand::LowProfit => "⚠️",
        MarginBand::Loss => "❌",
    }
}

pub const NOTICE_GOOD: &str = "notice notice-good";
pub const NOTICE_WARN: &str = "notice notice-warn";
pub const NOTICE_BAD: &str = "notice notice-bad";

// ============================================
// TEXT / TABLES
// ============================================

pub const MUTED: &str = "muted";
pub const TABLE: &str = "table";
pub const ROW_OURS: &str = "row-ours";
