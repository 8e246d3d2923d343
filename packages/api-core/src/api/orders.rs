use super::Api;
use crate::common::auth::{authorize, Operation};
use crate::common::OrderId;
use crate::domains::orders::actions::{self, CreateOrderInput};
use crate::domains::orders::errors::OrderError;
use crate::domains::orders::models::{Order, OrderStatus};

impl Api {
    pub async fn create_order(
        &self,
        token: Option<&str>,
        input: CreateOrderInput,
    ) -> Result<Order, OrderError> {
        let ctx = authorize(Operation::CreateOrder, token, &self.resolver).await?;
        actions::create_order(&ctx, input, &self.deps).await
    }

    pub async fn get_orders(
        &self,
        token: Option<&str>,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, OrderError> {
        let ctx = authorize(Operation::GetOrders, token, &self.resolver).await?;
        actions::get_orders(&ctx, status, &self.deps).await
    }

    pub async fn get_order(
        &self,
        token: Option<&str>,
        order_id: OrderId,
    ) -> Result<Order, OrderError> {
        let ctx = authorize(Operation::GetOrder, token, &self.resolver).await?;
        actions::get_order(&ctx, order_id, &self.deps).await
    }

    pub async fn edit_order(
        &self,
        token: Option<&str>,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        let ctx = authorize(Operation::EditOrder, token, &self.resolver).await?;
        actions::edit_order(&ctx, order_id, status, &self.deps).await
    }

    pub async fn take_order(
        &self,
        token: Option<&str>,
        order_id: OrderId,
    ) -> Result<Order, OrderError> {
        let ctx = authorize(Operation::TakeOrder, token, &self.resolver).await?;
        actions::take_order(&ctx, order_id, &self.deps).await
    }
}
