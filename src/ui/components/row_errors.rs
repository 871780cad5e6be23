use dioxus::prelude::*;

use crate::domain::{ErrorKind, RowError};

/// Persistent list of rows that could not be priced. Unlike toasts these
/// stay until the offending cell is fixed.
#[component]
pub fn RowErrorList(errors: Vec<RowError>) -> Element {
    if errors.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        ul {
            class: "row-errors",
            for error in errors {
                li {
                    class: "row-error",
                    "❌ {error}"
                    span { class: "kind", {kind_label(error.kind)} }
                }
            }
        }
    }
}

fn kind_label(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Parse => "parse",
        ErrorKind::Arithmetic => "arithmetic",
    }
}
