use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::{
            door_table::{CellEdit, DoorTable},
            kpi_card::KpiCard,
            result_table::ResultTable,
            row_errors::RowErrorList,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::format::format_rupees,
};

#[component]
pub fn EstimatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let rows = state.with(|st| st.rows.clone());
    let quote = state.with(|st| st.quote());

    let invalid_rows = quote.errors.iter().map(|err| err.index).collect::<Vec<_>>();
    let grand_total_display = format_rupees(quote.grand_total);
    let priced_display = format!("{} of {}", quote.results.len(), rows.len());
    let priced_caption = if quote.has_errors() {
        Some(format!("{} row(s) need fixing", quote.errors.len()))
    } else {
        None
    };
    let units_display = quote.total_quantity().to_string();

    let on_edit = {
        let mut state = state.clone();
        move |edit: CellEdit| {
            let found = state.with_mut(|st| st.edit_cell(&edit.row_id, edit.field, edit.value));
            if !found {
                tracing::debug!(row = %edit.row_id, "edit for a row that no longer exists");
            }
        }
    };

    let on_remove = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |id: String| {
            if state.with_mut(|st| st.remove_row(&id)) {
                push_toast(toasts.clone(), ToastKind::Info, "Door removed.");
            }
        }
    };

    let on_add = {
        let mut state = state.clone();
        move |_| {
            state.with_mut(|st| st.add_row());
        }
    };

    let on_reset = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| st.reset_rows());
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Table reset to the sample door.",
            );
        }
    };

    rsx! {
        section {
            class: "{theme::panel()}",
            div {
                class: "panel-header",
                h2 { class: "{theme::panel_title()}", "Enter data for each door" }
                div {
                    class: "actions",
                    button { class: "{theme::btn_primary()}", onclick: on_add, "Add door" }
                    button { class: "{theme::btn_secondary()}", onclick: on_reset, "Reset to sample" }
                }
            }
            DoorTable {
                rows,
                invalid_rows,
                on_edit,
                on_remove,
            }
        }

        RowErrorList { errors: quote.errors.clone() }

        div {
            class: "kpi-grid",
            KpiCard {
                title: "Grand Total".to_string(),
                value: grand_total_display,
                description: Some("Sum of every priced door".to_string()),
                highlight: true,
            }
            KpiCard {
                title: "Doors priced".to_string(),
                value: priced_display,
                description: priced_caption,
            }
            KpiCard {
                title: "Units".to_string(),
                value: units_display,
            }
        }

        section {
            class: "{theme::panel()}",
            div {
                class: "panel-header",
                h2 { class: "{theme::panel_title()}", "Results for each door" }
            }
            ResultTable { rows: quote.results.clone() }
        }
    }
}
