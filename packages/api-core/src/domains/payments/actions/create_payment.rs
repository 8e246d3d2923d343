use chrono::{Duration, Utc};
use tracing::info;

use crate::common::auth::RequestContext;
use crate::common::RestaurantId;
use crate::domains::payments::errors::PaymentError;
use crate::domains::payments::models::Payment;
use crate::domains::restaurants::policy;
use crate::kernel::Deps;

/// Promotion window bought by one payment.
const PROMOTION_DAYS: i64 = 7;

/// Record a promotion payment and promote the restaurant.
///
/// Only the restaurant's own owner may pay for it; the window is a fixed
/// seven days from now. Expired windows are cleared later by the sweep.
pub async fn create_payment(
    ctx: &RequestContext,
    transaction_id: String,
    restaurant_id: RestaurantId,
    deps: &Deps,
) -> Result<Payment, PaymentError> {
    let principal = ctx.current_user()?;

    let mut restaurant = deps
        .restaurants
        .find_restaurant_by_id(restaurant_id)
        .await?
        .ok_or(PaymentError::RestaurantNotFound)?;

    if !policy::is_owner(principal, &restaurant) {
        return Err(PaymentError::NotOwner);
    }

    let payment = Payment::new(transaction_id, principal.id, restaurant.id);
    let payment = deps.payments.insert_payment(payment).await?;

    restaurant.is_promoted = true;
    restaurant.promoted_until = Some(Utc::now() + Duration::days(PROMOTION_DAYS));
    deps.restaurants.update_restaurant(restaurant).await?;

    info!(payment_id = %payment.id, restaurant_id = %restaurant_id, "restaurant promoted");
    Ok(payment)
}
