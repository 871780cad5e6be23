pub mod door_table;
pub mod kpi_card;
pub mod result_table;
pub mod row_errors;
pub mod toast;
