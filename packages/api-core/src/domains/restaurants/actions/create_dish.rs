use tracing::info;

use crate::common::auth::RequestContext;
use crate::common::RestaurantId;
use crate::domains::restaurants::errors::RestaurantError;
use crate::domains::restaurants::models::{Dish, DishOption};
use crate::domains::restaurants::policy;
use crate::kernel::Deps;

#[derive(Debug, Clone)]
pub struct CreateDishInput {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub price: i64,
    pub options: Vec<DishOption>,
}

/// Add a dish to a restaurant's menu. Owner-of-this-restaurant only.
pub async fn create_dish(
    ctx: &RequestContext,
    input: CreateDishInput,
    deps: &Deps,
) -> Result<Dish, RestaurantError> {
    let principal = ctx.current_user()?;

    let restaurant = deps
        .restaurants
        .find_restaurant_by_id(input.restaurant_id)
        .await?
        .ok_or(RestaurantError::NotFound)?;

    if !policy::is_owner(principal, &restaurant) {
        return Err(RestaurantError::NotOwner);
    }

    let dish = Dish::new(restaurant.id, input.name, input.price).with_options(input.options);
    let dish = deps.restaurants.insert_dish(dish).await?;

    info!(dish_id = %dish.id, restaurant_id = %restaurant.id, "dish created");
    Ok(dish)
}
