mod clear_promotions;
mod create_payment;
mod queries;

pub use clear_promotions::clear_expired_promotions;
pub use create_payment::create_payment;
pub use queries::get_payments;
