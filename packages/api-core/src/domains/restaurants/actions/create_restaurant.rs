use tracing::info;

use crate::common::auth::RequestContext;
use crate::domains::restaurants::errors::RestaurantError;
use crate::domains::restaurants::models::Restaurant;
use crate::kernel::Deps;

/// Create a restaurant owned by the caller.
pub async fn create_restaurant(
    ctx: &RequestContext,
    name: String,
    address: String,
    deps: &Deps,
) -> Result<Restaurant, RestaurantError> {
    let principal = ctx.current_user()?;

    let restaurant = Restaurant::new(principal.id, name, address);
    let restaurant = deps.restaurants.insert_restaurant(restaurant).await?;

    info!(restaurant_id = %restaurant.id, owner_id = %principal.id, "restaurant created");
    Ok(restaurant)
}
