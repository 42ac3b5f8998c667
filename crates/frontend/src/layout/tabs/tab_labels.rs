//! Tab titles, one per tab key. Falls back to the key itself.

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_restaurant" => "Restaurants",
        "a003_menu_item" => "Menu",
        "a004_order" => "Orders",
        "a005_cart" => "Cart",
        "d100_restaurant_dashboard" => "Dashboard",
        "d101_sales_report" => "Sales report",
        _ => "",
    }
}

/// Title to show for `key`, never empty
pub fn tab_title(key: &str) -> String {
    match tab_label_for_key(key) {
        "" => key.to_string(),
        label => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(tab_title("d101_sales_report"), "Sales report");
        assert_eq!(tab_title("x999_unknown"), "x999_unknown");
    }
}
