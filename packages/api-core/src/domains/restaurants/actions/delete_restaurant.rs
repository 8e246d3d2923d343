use tracing::info;

use crate::common::auth::RequestContext;
use crate::common::RestaurantId;
use crate::domains::restaurants::errors::RestaurantError;
use crate::domains::restaurants::policy;
use crate::kernel::Deps;

/// Delete a restaurant. Owner-of-this-restaurant only.
pub async fn delete_restaurant(
    ctx: &RequestContext,
    restaurant_id: RestaurantId,
    deps: &Deps,
) -> Result<(), RestaurantError> {
    let principal = ctx.current_user()?;

    let restaurant = deps
        .restaurants
        .find_restaurant_by_id(restaurant_id)
        .await?
        .ok_or(RestaurantError::NotFound)?;

    if !policy::is_owner(principal, &restaurant) {
        return Err(RestaurantError::NotOwner);
    }

    deps.restaurants.delete_restaurant(restaurant_id).await?;
    info!(restaurant_id = %restaurant_id, "restaurant deleted");
    Ok(())
}
