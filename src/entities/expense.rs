//! Expense entity - A single spending record against a trip's budget.
//!
//! Expenses have an independent lifecycle from itinerary content: they are
//! created, updated, and deleted individually and are never bulk-replaced.
//! Each expense carries both its owning `trip_id` and the `user_id` that
//! recorded it; authorization always walks through the parent trip.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Unique identifier for the expense
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the trip this expense belongs to
    pub trip_id: i64,
    /// Identity of the user who recorded the expense
    pub user_id: String,
    /// Spent amount
    pub amount: f64,
    /// Currency code, defaults to `"CNY"` when not supplied
    pub currency: String,
    /// Optional free-text note
    pub comment: Option<String>,
    /// Optional category for grouping expenses
    pub category: Option<String>,
    /// Optional date the expense occurred on
    pub expense_date: Option<Date>,
    /// When the expense was recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Expense and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each expense belongs to one trip
    #[sea_orm(
        belongs_to = "super::trip::Entity",
        from = "Column::TripId",
        to = "super::trip::Column::Id"
    )]
    Trip,
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trip.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
