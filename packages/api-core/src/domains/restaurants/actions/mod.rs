mod create_dish;
mod create_restaurant;
mod delete_restaurant;
mod edit_restaurant;
mod queries;

pub use create_dish::{create_dish, CreateDishInput};
pub use create_restaurant::create_restaurant;
pub use delete_restaurant::delete_restaurant;
pub use edit_restaurant::{edit_restaurant, EditRestaurantInput};
pub use queries::{all_restaurants, find_restaurant, search_restaurants};
