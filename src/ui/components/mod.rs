pub mod comparison_table;
pub mod kpi_card;
pub mod margin_badge;
pub mod number_field;
pub mod pricing_inputs;
pub mod toast;
