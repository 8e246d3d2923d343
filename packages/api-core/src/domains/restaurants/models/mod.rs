mod dish;
mod restaurant;

pub use dish::{Dish, DishOption, OptionChoice};
pub use restaurant::Restaurant;
