use crate::common::RestaurantId;
use crate::domains::restaurants::errors::RestaurantError;
use crate::domains::restaurants::models::Restaurant;
use crate::kernel::Deps;

/// All restaurants, public.
pub async fn all_restaurants(deps: &Deps) -> Result<Vec<Restaurant>, RestaurantError> {
    Ok(deps.restaurants.all_restaurants().await?)
}

/// One restaurant by id, public.
pub async fn find_restaurant(
    restaurant_id: RestaurantId,
    deps: &Deps,
) -> Result<Restaurant, RestaurantError> {
    deps.restaurants
        .find_restaurant_by_id(restaurant_id)
        .await?
        .ok_or(RestaurantError::NotFound)
}

/// Case-insensitive name search, public.
pub async fn search_restaurants(
    query: &str,
    deps: &Deps,
) -> Result<Vec<Restaurant>, RestaurantError> {
    Ok(deps.restaurants.search_restaurants_by_name(query).await?)
}
