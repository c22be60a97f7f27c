//! Budget aggregation - Derives spent/remaining/overspend for a trip.
//!
//! The budget status is never persisted: it is recomputed from the trip's
//! budget and its expense records on every request, so there is no
//! incremental counter to keep consistent.

use crate::{
    core::trip::load_owned_trip,
    entities::{Expense, expense},
    errors::Result,
};
use sea_orm::prelude::*;
use serde::Serialize;

/// Derived budget totals for one trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    /// The trip's total budget
    pub total_budget: f64,
    /// Sum of all expense amounts recorded against the trip
    pub spent: f64,
    /// `total_budget - spent`; negative when overspent
    pub remaining: f64,
    /// Whether spending has exceeded the budget
    pub overspend: bool,
}

/// Computes the current budget status for a trip.
///
/// Re-derives the requester's ownership of the trip, sums the trip's expense
/// amounts, and folds them against the budget. Stateless and recomputed on
/// every call.
pub async fn budget_status(
    db: &DatabaseConnection,
    trip_id: i64,
    user_id: &str,
) -> Result<BudgetStatus> {
    let trip = load_owned_trip(db, trip_id, user_id).await?;

    let expenses = Expense::find()
        .filter(expense::Column::TripId.eq(trip.id))
        .all(db)
        .await?;

    let spent: f64 = expenses.iter().map(|expense| expense.amount).sum();
    let remaining = trip.budget_total - spent;

    Ok(BudgetStatus {
        total_budget: trip.budget_total,
        spent,
        remaining,
        overspend: remaining < 0.0,
    })
}
