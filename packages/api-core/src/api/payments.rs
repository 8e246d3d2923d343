use super::Api;
use crate::common::auth::{authorize, Operation};
use crate::common::RestaurantId;
use crate::domains::payments::actions;
use crate::domains::payments::errors::PaymentError;
use crate::domains::payments::models::Payment;

impl Api {
    pub async fn create_payment(
        &self,
        token: Option<&str>,
        transaction_id: String,
        restaurant_id: RestaurantId,
    ) -> Result<Payment, PaymentError> {
        let ctx = authorize(Operation::CreatePayment, token, &self.resolver).await?;
        actions::create_payment(&ctx, transaction_id, restaurant_id, &self.deps).await
    }

    pub async fn get_payments(&self, token: Option<&str>) -> Result<Vec<Payment>, PaymentError> {
        let ctx = authorize(Operation::GetPayments, token, &self.resolver).await?;
        actions::get_payments(&ctx, &self.deps).await
    }
}
