pub mod categories;
pub mod list;

pub use categories::ShoppingCategory;
pub use list::{ShoppingList, ShoppingSection, generate_shopping_list, write_shopping_csv};
