use std::cmp::Ordering;

use dioxus::prelude::*;

use crate::domain::PricingResult;
use crate::util::format::{format_number, format_quantity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SortMode {
    Row,
    TotalDesc,
}

#[component]
pub fn ResultTable(rows: Vec<PricingResult>) -> Element {
    let mut sort_mode = use_signal(|| SortMode::Row);
    let current_sort = sort_mode();
    let is_empty = rows.is_empty();

    let mut rendered_rows = rows;
    sort_results(&mut rendered_rows, current_sort);

    rsx! {
        div {
            div {
                class: "panel-header",
                span { class: "muted", "Prices recalculate on every edit." }
                div {
                    class: "actions",
                    button {
                        class: sort_button_class(current_sort == SortMode::Row),
                        onclick: move |_| sort_mode.set(SortMode::Row),
                        "Row order"
                    }
                    button {
                        class: sort_button_class(current_sort == SortMode::TotalDesc),
                        onclick: move |_| sort_mode.set(SortMode::TotalDesc),
                        "Highest total"
                    }
                }
            }
            div {
                class: "table-scroll",
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Door #" }
                            th { class: "numeric", "Adj. Length (in)" }
                            th { class: "numeric", "Adj. Width (in)" }
                            th { class: "numeric", "Length Kol" }
                            th { class: "numeric", "Volume Kol" }
                            th { class: "numeric", "Grill Cost" }
                            th { class: "numeric", "Unit Price (₹)" }
                            th { class: "numeric", "Quantity" }
                            th { class: "numeric", "Total Price (₹)" }
                        }
                    }
                    tbody {
                        for row in rendered_rows {
                            tr {
                                td { "{row.index}" }
                                td { class: "numeric", "{row.adjusted_length_in}" }
                                td { class: "numeric", "{row.adjusted_width_in}" }
                                td { class: "numeric", {format_quantity(row.length_kol)} }
                                td { class: "numeric", {format_quantity(row.volume_kol)} }
                                td { class: "numeric", {format_number(row.grill_cost)} }
                                td { class: "numeric", {format_number(row.unit_price)} }
                                td { class: "numeric", "{row.quantity}" }
                                td { class: "numeric", {format_number(row.total_price)} }
                            }
                        }
                        if is_empty {
                            tr {
                                td {
                                    class: "empty",
                                    colspan: "9",
                                    "No priced doors yet."
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn sort_button_class(active: bool) -> &'static str {
    if active {
        "btn btn-primary"
    } else {
        "btn"
    }
}

fn sort_results(rows: &mut [PricingResult], mode: SortMode) {
    match mode {
        SortMode::Row => rows.sort_by_key(|row| row.index),
        SortMode::TotalDesc => rows.sort_by(|a, b| {
            b.total_price
                .partial_cmp(&a.total_price)
                .unwrap_or(Ordering::Equal)
                .then(a.index.cmp(&b.index))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(index: usize, total_price: f64) -> PricingResult {
        PricingResult {
            index,
            adjusted_length_in: 84,
            adjusted_width_in: 42,
            length_kol: 9.75,
            volume_kol: 10.16,
            grill_cost: 1680.0,
            unit_price: total_price,
            quantity: 1,
            total_price,
        }
    }

    #[test]
    fn sorts_by_total_then_row() {
        let mut rows = vec![result(1, 100.0), result(2, 300.0), result(3, 300.0), result(4, 50.0)];
        sort_results(&mut rows, SortMode::TotalDesc);
        let order: Vec<_> = rows.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![2, 3, 1, 4]);

        sort_results(&mut rows, SortMode::Row);
        let order: Vec<_> = rows.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }
}
