use tracing::info;

use crate::common::auth::RequestContext;
use crate::common::{DishId, RestaurantId};
use crate::domains::orders::errors::OrderError;
use crate::domains::orders::models::{Order, OrderItem, OrderItemOption};
use crate::domains::restaurants::models::Dish;
use crate::kernel::Deps;

#[derive(Debug, Clone)]
pub struct CreateOrderInput {
    pub restaurant_id: RestaurantId,
    pub items: Vec<OrderItemInput>,
}

#[derive(Debug, Clone)]
pub struct OrderItemInput {
    pub dish_id: DishId,
    pub options: Vec<OrderItemOptionInput>,
}

#[derive(Debug, Clone)]
pub struct OrderItemOptionInput {
    pub name: String,
    pub choice: Option<String>,
}

/// Place an order against a restaurant.
///
/// Every item's dish must exist on that restaurant's menu. The total is
/// priced here, at creation time: dish price plus option extras (an extra
/// on the option itself wins over per-choice extras). The order starts
/// Pending with no driver, and the restaurant's owner is signalled.
pub async fn create_order(
    ctx: &RequestContext,
    input: CreateOrderInput,
    deps: &Deps,
) -> Result<Order, OrderError> {
    let principal = ctx.current_user()?;

    let restaurant = deps
        .restaurants
        .find_restaurant_by_id(input.restaurant_id)
        .await?
        .ok_or(OrderError::RestaurantNotFound)?;

    let mut total = 0;
    let mut items = Vec::with_capacity(input.items.len());

    for item in input.items {
        let dish = deps
            .restaurants
            .find_dish_by_id(item.dish_id)
            .await?
            .filter(|dish| dish.restaurant_id == restaurant.id)
            .ok_or(OrderError::DishNotFound)?;

        total += price_item(&dish, &item.options);
        items.push(OrderItem {
            dish_id: dish.id,
            options: item
                .options
                .into_iter()
                .map(|o| OrderItemOption {
                    name: o.name,
                    choice: o.choice,
                })
                .collect(),
        });
    }

    let order = Order::new(principal.id, restaurant.id, restaurant.owner_id, items, total);
    let order = deps.orders.insert_order(order).await?;

    deps.notifier
        .pending_order_created(&order, restaurant.owner_id)
        .await;

    info!(order_id = %order.id, customer_id = %principal.id, total, "order created");
    Ok(order)
}

/// Price of one item: dish base price plus selected option extras.
fn price_item(dish: &Dish, selected: &[OrderItemOptionInput]) -> i64 {
    let mut price = dish.price;

    for picked in selected {
        let Some(option) = dish.options.iter().find(|o| o.name == picked.name) else {
            continue;
        };

        if let Some(extra) = option.extra {
            price += extra;
        } else if let Some(choice_name) = &picked.choice {
            if let Some(choice) = option.choices.iter().find(|c| &c.name == choice_name) {
                if let Some(extra) = choice.extra {
                    price += extra;
                }
            }
        }
    }

    price
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::restaurants::models::{DishOption, OptionChoice};

    fn dish_with_options() -> Dish {
        Dish::new(RestaurantId::new(), "Bibimbap".into(), 9000).with_options(vec![
            DishOption {
                name: "extra rice".into(),
                extra: Some(500),
                choices: Vec::new(),
            },
            DishOption {
                name: "spice".into(),
                extra: None,
                choices: vec![
                    OptionChoice {
                        name: "mild".into(),
                        extra: None,
                    },
                    OptionChoice {
                        name: "volcano".into(),
                        extra: Some(300),
                    },
                ],
            },
        ])
    }

    #[test]
    fn base_price_without_options() {
        assert_eq!(price_item(&dish_with_options(), &[]), 9000);
    }

    #[test]
    fn option_extra_is_added() {
        let selected = [OrderItemOptionInput {
            name: "extra rice".into(),
            choice: None,
        }];
        assert_eq!(price_item(&dish_with_options(), &selected), 9500);
    }

    #[test]
    fn choice_extra_is_added_when_option_has_none() {
        let selected = [OrderItemOptionInput {
            name: "spice".into(),
            choice: Some("volcano".into()),
        }];
        assert_eq!(price_item(&dish_with_options(), &selected), 9300);
    }

    #[test]
    fn free_choice_adds_nothing() {
        let selected = [OrderItemOptionInput {
            name: "spice".into(),
            choice: Some("mild".into()),
        }];
        assert_eq!(price_item(&dish_with_options(), &selected), 9000);
    }

    #[test]
    fn unknown_options_are_ignored() {
        let selected = [OrderItemOptionInput {
            name: "gold leaf".into(),
            choice: None,
        }];
        assert_eq!(price_item(&dish_with_options(), &selected), 9000);
    }
}
