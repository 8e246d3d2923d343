use super::Api;
use crate::common::auth::{authorize, Operation};
use crate::common::RestaurantId;
use crate::domains::restaurants::actions::{self, CreateDishInput, EditRestaurantInput};
use crate::domains::restaurants::errors::RestaurantError;
use crate::domains::restaurants::models::{Dish, Restaurant};

impl Api {
    pub async fn restaurants(&self, token: Option<&str>) -> Result<Vec<Restaurant>, RestaurantError> {
        let _ctx = authorize(Operation::Restaurants, token, &self.resolver).await?;
        actions::all_restaurants(&self.deps).await
    }

    pub async fn restaurant(
        &self,
        token: Option<&str>,
        restaurant_id: RestaurantId,
    ) -> Result<Restaurant, RestaurantError> {
        let _ctx = authorize(Operation::Restaurant, token, &self.resolver).await?;
        actions::find_restaurant(restaurant_id, &self.deps).await
    }

    pub async fn search_restaurant(
        &self,
        token: Option<&str>,
        query: &str,
    ) -> Result<Vec<Restaurant>, RestaurantError> {
        let _ctx = authorize(Operation::SearchRestaurant, token, &self.resolver).await?;
        actions::search_restaurants(query, &self.deps).await
    }

    pub async fn create_restaurant(
        &self,
        token: Option<&str>,
        name: String,
        address: String,
    ) -> Result<Restaurant, RestaurantError> {
        let ctx = authorize(Operation::CreateRestaurant, token, &self.resolver).await?;
        actions::create_restaurant(&ctx, name, address, &self.deps).await
    }

    pub async fn edit_restaurant(
        &self,
        token: Option<&str>,
        restaurant_id: RestaurantId,
        input: EditRestaurantInput,
    ) -> Result<Restaurant, RestaurantError> {
        let ctx = authorize(Operation::EditRestaurant, token, &self.resolver).await?;
        actions::edit_restaurant(&ctx, restaurant_id, input, &self.deps).await
    }

    pub async fn delete_restaurant(
        &self,
        token: Option<&str>,
        restaurant_id: RestaurantId,
    ) -> Result<(), RestaurantError> {
        let ctx = authorize(Operation::DeleteRestaurant, token, &self.resolver).await?;
        actions::delete_restaurant(&ctx, restaurant_id, &self.deps).await
    }

    pub async fn create_dish(
        &self,
        token: Option<&str>,
        input: CreateDishInput,
    ) -> Result<Dish, RestaurantError> {
        let ctx = authorize(Operation::CreateDish, token, &self.resolver).await?;
        actions::create_dish(&ctx, input, &self.deps).await
    }
}
