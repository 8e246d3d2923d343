use tracing::info;

use crate::common::auth::RequestContext;
use crate::common::RestaurantId;
use crate::domains::restaurants::errors::RestaurantError;
use crate::domains::restaurants::models::Restaurant;
use crate::domains::restaurants::policy;
use crate::kernel::Deps;

#[derive(Debug, Default, Clone)]
pub struct EditRestaurantInput {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Update a restaurant's details. Owner-of-this-restaurant only.
pub async fn edit_restaurant(
    ctx: &RequestContext,
    restaurant_id: RestaurantId,
    input: EditRestaurantInput,
    deps: &Deps,
) -> Result<Restaurant, RestaurantError> {
    let principal = ctx.current_user()?;

    let mut restaurant = deps
        .restaurants
        .find_restaurant_by_id(restaurant_id)
        .await?
        .ok_or(RestaurantError::NotFound)?;

    if !policy::is_owner(principal, &restaurant) {
        return Err(RestaurantError::NotOwner);
    }

    if let Some(name) = input.name {
        restaurant.name = name;
    }
    if let Some(address) = input.address {
        restaurant.address = address;
    }

    let restaurant = deps.restaurants.update_restaurant(restaurant).await?;
    info!(restaurant_id = %restaurant.id, "restaurant updated");
    Ok(restaurant)
}
