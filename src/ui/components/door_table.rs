use dioxus::prelude::*;

use crate::domain::{DoorField, DoorRowDraft};
use crate::ui::theme;

#[derive(Clone, Debug, PartialEq)]
pub struct CellEdit {
    pub row_id: String,
    pub field: DoorField,
    pub value: String,
}

#[component]
pub fn DoorTable(
    rows: Vec<DoorRowDraft>,
    // 1-based positions of rows that failed to price.
    invalid_rows: Vec<usize>,
    on_edit: EventHandler<CellEdit>,
    on_remove: EventHandler<String>,
) -> Element {
    let is_empty = rows.is_empty();
    let rendered_rows = rows
        .into_iter()
        .enumerate()
        .map(|(position, row)| {
            let index = position + 1;
            (index, invalid_rows.contains(&index), row)
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "table-scroll",
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "#" }
                        for field in DoorField::ALL {
                            th { "{field.label()}" }
                        }
                        th {}
                    }
                }
                tbody {
                    for (index, invalid, row) in rendered_rows {
                        DoorRowView {
                            key: "{row.id}",
                            index,
                            invalid,
                            row: row.clone(),
                            on_edit,
                            on_remove,
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "empty",
                                colspan: "12",
                                "Add a door to start the quote."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DoorRowViewProps {
    index: usize,
    invalid: bool,
    row: DoorRowDraft,
    on_edit: EventHandler<CellEdit>,
    on_remove: EventHandler<String>,
}

#[component]
fn DoorRowView(props: DoorRowViewProps) -> Element {
    let row = props.row;
    let remove_id = row.id.clone();
    let cells = DoorField::ALL
        .into_iter()
        .map(|field| (field, row.get(field).to_string()))
        .collect::<Vec<_>>();

    rsx! {
        tr {
            class: "{theme::table_row(props.invalid)}",
            td { class: "muted", "{props.index}" }
            for (field, value) in cells {
                td {
                    CellInput {
                        row_id: row.id.clone(),
                        field,
                        value,
                        on_edit: props.on_edit,
                    }
                }
            }
            td {
                button {
                    class: "{theme::btn_remove()}",
                    onclick: move |_| props.on_remove.call(remove_id.clone()),
                    "Remove"
                }
            }
        }
    }
}

#[component]
fn CellInput(
    row_id: String,
    field: DoorField,
    value: String,
    on_edit: EventHandler<CellEdit>,
) -> Element {
    rsx! {
        input {
            class: "{theme::cell_input(field)}",
            r#type: "text",
            title: "{field.label()}",
            value: "{value}",
            oninput: move |evt| {
                on_edit.call(CellEdit {
                    row_id: row_id.clone(),
                    field,
                    value: evt.value(),
                })
            },
        }
    }
}
