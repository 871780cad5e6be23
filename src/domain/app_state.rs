use serde::{Deserialize, Serialize};

use super::door_row::{quote_drafts, DoorField, DoorRowDraft};
use super::entities::{Quote, RateDefaults};

#[derive(Clone, Debug)]
pub struct AppState {
    /// Rows of the quote table, in display order.
    pub rows: Vec<DoorRowDraft>,
    pub rates: RateDefaults,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            rows: vec![DoorRowDraft::seed()],
            rates: RateDefaults::default(),
        }
    }
}

impl AppState {
    /// Prices the current table from scratch.
    pub fn quote(&self) -> Quote {
        quote_drafts(&self.rows)
    }

    pub fn add_row(&mut self) -> String {
        let row = DoorRowDraft::from_rates(&self.rates);
        let id = row.id.clone();
        self.rows.push(row);
        id
    }

    pub fn remove_row(&mut self, id: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    pub fn edit_cell(&mut self, id: &str, field: DoorField, value: String) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.set(field, value);
                true
            }
            None => false,
        }
    }

    pub fn reset_rows(&mut self) {
        self.rows = vec![DoorRowDraft::seed()];
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.rates = persisted.rates;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            rates: self.rates.clone(),
        }
    }
}

/// Settings written to disk. Quote rows are never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub rates: RateDefaults,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_sample_row() {
        let state = AppState::default();
        assert_eq!(state.rows.len(), 1);
        let quote = state.quote();
        assert_eq!(quote.results.len(), 1);
        assert_eq!(quote.grand_total, 3504.0);
    }

    #[test]
    fn edits_reprice_on_next_quote() {
        let mut state = AppState::default();
        let id = state.rows[0].id.clone();

        assert!(state.edit_cell(&id, DoorField::Quantity, "2".to_string()));
        assert_eq!(state.quote().grand_total, 7008.0);

        assert!(state.edit_cell(&id, DoorField::FrameSize, "abc".to_string()));
        let quote = state.quote();
        assert!(quote.results.is_empty());
        assert_eq!(quote.errors[0].index, 1);
    }

    #[test]
    fn add_and_remove_rows() {
        let mut state = AppState::default();
        state.rates.labour_cost = 500.0;
        let id = state.add_row();
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.rows[1].labour_cost, "500.0");

        assert!(state.remove_row(&id));
        assert!(!state.remove_row(&id));
        assert!(!state.edit_cell(&id, DoorField::Quantity, "3".to_string()));
        assert_eq!(state.rows.len(), 1);
    }

    #[test]
    fn empty_table_quotes_zero() {
        let mut state = AppState::default();
        let id = state.rows[0].id.clone();
        state.remove_row(&id);
        let quote = state.quote();
        assert!(quote.results.is_empty());
        assert_eq!(quote.grand_total, 0.0);

        state.reset_rows();
        assert_eq!(state.rows.len(), 1);
    }

    #[test]
    fn persists_only_rates() {
        let mut state = AppState::default();
        state.rates.kol_price = 180.0;
        let persisted = state.to_persisted();

        let mut restored = AppState::default();
        restored.apply_persisted(persisted);
        assert_eq!(restored.rates.kol_price, 180.0);
        assert_eq!(restored.rows.len(), 1);
    }
}
