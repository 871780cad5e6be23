//! Class-name helpers so pages and components share one look.
//! The classes themselves live in `assets/main.css`.

use crate::domain::DoorField;

pub fn panel() -> &'static str {
    "panel"
}

pub fn panel_title() -> &'static str {
    "panel-title"
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-btn active"
    } else {
        "nav-btn"
    }
}

pub fn btn_primary() -> &'static str {
    "btn btn-primary"
}

pub fn btn_secondary() -> &'static str {
    "btn"
}

pub fn btn_remove() -> &'static str {
    "btn btn-danger"
}

pub fn cell_input(field: DoorField) -> &'static str {
    if field.is_text() {
        "cell-input text"
    } else {
        "cell-input"
    }
}

pub fn table_row(invalid: bool) -> &'static str {
    if invalid {
        "row-invalid"
    } else {
        ""
    }
}

pub fn kpi_card(highlight: bool) -> &'static str {
    if highlight {
        "kpi-card highlight"
    } else {
        "kpi-card"
    }
}
