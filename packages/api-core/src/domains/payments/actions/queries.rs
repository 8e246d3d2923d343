use crate::common::auth::RequestContext;
use crate::domains::payments::errors::PaymentError;
use crate::domains::payments::models::Payment;
use crate::kernel::Deps;

/// The caller's own payments.
pub async fn get_payments(ctx: &RequestContext, deps: &Deps) -> Result<Vec<Payment>, PaymentError> {
    let principal = ctx.current_user()?;
    Ok(deps.payments.payments_for_user(principal.id).await?)
}
