mod create_order;
mod edit_order;
mod queries;
mod take_order;

pub use create_order::{create_order, CreateOrderInput, OrderItemInput, OrderItemOptionInput};
pub use edit_order::edit_order;
pub use queries::{get_order, get_orders};
pub use take_order::take_order;
