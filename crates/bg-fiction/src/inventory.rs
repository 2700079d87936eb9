//! Inventory listing.

/// Shown when nothing is carried.
pub const EMPTY_INVENTORY: &str = "You are not carrying anything.";

/// Describe carried items, one per line, in acquisition order.
pub fn describe_inventory(items: &[String]) -> String {
    if items.is_empty() {
        return EMPTY_INVENTORY.to_string();
    }
    format!("You are carrying:\n {}", items.join("\n "))
}
