use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::kernel::Deps;

/// Clear promotion flags whose window has lapsed.
///
/// Body of the periodic sweep; whatever schedules it (cron, task runner)
/// lives outside this core. Returns the number of restaurants cleared.
pub async fn clear_expired_promotions(deps: &Deps) -> Result<usize> {
    let expired = deps.restaurants.expired_promotions(Utc::now()).await?;
    let count = expired.len();

    for mut restaurant in expired {
        restaurant.is_promoted = false;
        restaurant.promoted_until = None;
        deps.restaurants.update_restaurant(restaurant).await?;
    }

    if count > 0 {
        info!(count, "expired promotions cleared");
    }
    Ok(count)
}
