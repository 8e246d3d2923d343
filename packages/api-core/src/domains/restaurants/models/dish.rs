use crate::common::{DishId, RestaurantId};

/// Menu item. Prices are integer cents.
#[derive(Debug, Clone)]
pub struct Dish {
    pub id: DishId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub price: i64,
    pub options: Vec<DishOption>,
}

/// Optional add-on for a dish.
///
/// Either the option itself carries an extra charge, or the charge sits on
/// the individual choices (e.g. option "size" with choices "L"/"XL").
#[derive(Debug, Clone)]
pub struct DishOption {
    pub name: String,
    pub extra: Option<i64>,
    pub choices: Vec<OptionChoice>,
}

#[derive(Debug, Clone)]
pub struct OptionChoice {
    pub name: String,
    pub extra: Option<i64>,
}

impl Dish {
    pub fn new(restaurant_id: RestaurantId, name: String, price: i64) -> Self {
        Self {
            id: DishId::new(),
            restaurant_id,
            name,
            price,
            options: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: Vec<DishOption>) -> Self {
        self.options = options;
        self
    }
}
