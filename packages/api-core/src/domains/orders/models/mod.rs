mod order;

pub use order::{Order, OrderItem, OrderItemOption, OrderStatus};
