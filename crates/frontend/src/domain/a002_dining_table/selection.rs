use contracts::domain::a002_dining_table::DiningTable;

/// Which table the cart is seated at.
///
/// States: nothing selected, or exactly one id. Picking an available table
/// replaces the selection; picking an unavailable one changes nothing. A
/// selection belongs to the restaurant it was made in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSelection {
    selected: Option<SelectedTable>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SelectedTable {
    restaurant_id: String,
    table_id: String,
}

impl TableSelection {
    /// Returns the display name to report when the selection moved
    pub fn select(&mut self, restaurant_id: &str, table: &DiningTable) -> Option<String> {
        if !table.is_available {
            return None;
        }
        self.selected = Some(SelectedTable {
            restaurant_id: restaurant_id.to_string(),
            table_id: table.id.clone(),
        });
        Some(table.display_name.clone())
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|s| s.table_id.as_str())
    }

    /// The selected table, only if it was picked in `restaurant_id`
    pub fn selected_in(&self, restaurant_id: &str) -> Option<&str> {
        self.selected
            .as_ref()
            .filter(|s| s.restaurant_id == restaurant_id)
            .map(|s| s.table_id.as_str())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id() == Some(id)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(id: &str, available: bool) -> DiningTable {
        DiningTable {
            id: id.to_string(),
            display_name: format!("Table {}", id),
            is_available: available,
        }
    }

    #[test]
    fn test_initially_empty() {
        assert_eq!(TableSelection::default().selected_id(), None);
    }

    #[test]
    fn test_second_selection_replaces_first() {
        let mut sel = TableSelection::default();
        assert_eq!(sel.select("r1", &table("1", true)).as_deref(), Some("Table 1"));
        assert_eq!(sel.select("r1", &table("2", true)).as_deref(), Some("Table 2"));
        assert_eq!(sel.selected_id(), Some("2"));
        assert!(!sel.is_selected("1"));
    }

    #[test]
    fn test_same_table_twice_keeps_one() {
        let mut sel = TableSelection::default();
        sel.select("r1", &table("3", true));
        sel.select("r1", &table("3", true));
        assert_eq!(sel.selected_id(), Some("3"));
    }

    #[test]
    fn test_unavailable_table_is_noop() {
        let mut sel = TableSelection::default();
        sel.select("r1", &table("1", true));
        assert_eq!(sel.select("r1", &table("9", false)), None);
        assert_eq!(sel.selected_id(), Some("1"));

        let mut empty = TableSelection::default();
        assert_eq!(empty.select("r1", &table("9", false)), None);
        assert_eq!(empty.selected_id(), None);
    }

    #[test]
    fn test_selection_scoped_to_restaurant() {
        let mut sel = TableSelection::default();
        sel.select("r1", &table("4", true));
        assert_eq!(sel.selected_in("r1"), Some("4"));
        assert_eq!(sel.selected_in("r2"), None);
    }
}
