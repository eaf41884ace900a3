use dioxus::prelude::*;

use crate::{domain::RankedPrice, ui::theme};

#[component]
pub fn ComparisonTable(rows: Vec<RankedPrice>) -> Element {
    let rendered_rows = rows
        .into_iter()
        .map(|row| {
            let class = if row.is_ours { theme::ROW_OURS } else { "" };
            (row.name, format!("${:.2}", row.price), class)
        })
        .collect::<Vec<_>>();

    rsx! {
        table {
            class: theme::TABLE,
            thead {
                tr {
                    th { "Name" }
                    th { "Price" }
                }
            }
            tbody {
                for (name, price, class) in rendered_rows {
                    tr {
                        class: class,
                        td { "{name}" }
                        td { "{price}" }
                    }
                }
            }
        }
    }
}
