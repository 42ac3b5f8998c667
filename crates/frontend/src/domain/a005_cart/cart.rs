use crate::domain::a002_dining_table::TableSelection;
use contracts::domain::a003_menu_item::MenuItem;
use contracts::domain::a004_order::{OrderLine, PlaceOrderRequest};

/// Lines the customer is about to order, bound to one restaurant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    restaurant_id: Option<String>,
    lines: Vec<OrderLine>,
}

impl Cart {
    /// Adds one unit of `item`. A cart started at another restaurant is emptied first.
    pub fn add(&mut self, restaurant_id: &str, item: &MenuItem) {
        if self.restaurant_id.as_deref() != Some(restaurant_id) {
            self.lines.clear();
            self.restaurant_id = Some(restaurant_id.to_string());
        }
        match self.lines.iter_mut().find(|l| l.menu_item_id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(OrderLine {
                menu_item_id: item.id.clone(),
                name: item.name.clone(),
                quantity: 1,
                unit_price: item.price,
            }),
        }
    }

    pub fn increment(&mut self, menu_item_id: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.menu_item_id == menu_item_id) {
            line.quantity += 1;
        }
    }

    /// Dropping to zero removes the line
    pub fn decrement(&mut self, menu_item_id: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.menu_item_id == menu_item_id) {
            line.quantity = line.quantity.saturating_sub(1);
        }
        self.lines.retain(|l| l.quantity > 0);
    }

    pub fn remove(&mut self, menu_item_id: &str) {
        self.lines.retain(|l| l.menu_item_id != menu_item_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn restaurant_id(&self) -> Option<&str> {
        self.restaurant_id.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    /// `None` while the cart is empty or not seated at one of its restaurant's tables
    pub fn to_request(&self, selection: &TableSelection) -> Option<PlaceOrderRequest> {
        let restaurant_id = self.restaurant_id.clone()?;
        let table_id = selection
            .selected_in(&restaurant_id)
            .filter(|t| !t.is_empty())?;
        if self.is_empty() {
            return None;
        }
        Some(PlaceOrderRequest {
            restaurant_id,
            table_id: table_id.to_string(),
            lines: self.lines.clone(),
            total_price: self.subtotal(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_dining_table::DiningTable;

    fn seat(restaurant_id: &str, table_id: &str) -> TableSelection {
        let mut sel = TableSelection::default();
        sel.select(
            restaurant_id,
            &DiningTable {
                id: table_id.to_string(),
                display_name: format!("Table {}", table_id),
                is_available: true,
            },
        );
        sel
    }

    fn dish(id: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            category: "Main".into(),
            price,
            image_url: None,
        }
    }

    #[test]
    fn test_add_merges_same_item() {
        let mut cart = Cart::default();
        cart.add("r1", &dish("kacchi", 350.0));
        cart.add("r1", &dish("kacchi", 350.0));
        cart.add("r1", &dish("borhani", 80.0));
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal(), 780.0);
    }

    #[test]
    fn test_other_restaurant_resets_cart() {
        let mut cart = Cart::default();
        cart.add("r1", &dish("kacchi", 350.0));
        cart.add("r2", &dish("naan", 40.0));
        assert_eq!(cart.restaurant_id(), Some("r2"));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let mut cart = Cart::default();
        cart.add("r1", &dish("kacchi", 350.0));
        cart.increment("kacchi");
        cart.decrement("kacchi");
        assert_eq!(cart.item_count(), 1);
        cart.decrement("kacchi");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_request_needs_table_and_lines() {
        let mut cart = Cart::default();
        assert!(cart.to_request(&seat("r1", "t1")).is_none());

        cart.add("r1", &dish("kacchi", 350.0));
        assert!(cart.to_request(&TableSelection::default()).is_none());
        assert!(cart.to_request(&seat("r1", "")).is_none());

        let request = cart.to_request(&seat("r1", "t1")).unwrap();
        assert_eq!(request.restaurant_id, "r1");
        assert_eq!(request.table_id, "t1");
        assert_eq!(request.total_price, 350.0);

        cart.remove("kacchi");
        assert!(cart.to_request(&seat("r1", "t1")).is_none());
    }

    #[test]
    fn test_table_from_previous_restaurant_is_not_used() {
        let mut cart = Cart::default();
        cart.add("r1", &dish("kacchi", 350.0));
        let selection = seat("r1", "r1-table-4");
        assert!(cart.to_request(&selection).is_some());

        cart.add("r2", &dish("naan", 40.0));
        assert_eq!(cart.to_request(&selection), None);
        let request = cart.to_request(&seat("r2", "r2-table-1")).unwrap();
        assert_eq!(request.restaurant_id, "r2");
        assert_eq!(request.table_id, "r2-table-1");
    }
}
