//! Trip entity - The top-level itinerary-planning record, owned by one user.
//!
//! Each trip has an owning `user_id`, a title and destination, an inclusive
//! date range, a total budget, a companion count, and an ordered list of
//! preference tags stored as a JSON column. Itinerary points and expenses
//! hang off a trip and are removed with it.

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Trip database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trips")]
pub struct Model {
    /// Unique identifier for the trip
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Identity of the owning user, as resolved by the auth collaborator
    pub user_id: String,
    /// Display title of the trip
    pub title: String,
    /// Destination the itinerary is generated for
    pub destination: String,
    /// First day of the trip (inclusive)
    pub start_date: Date,
    /// Last day of the trip (inclusive, never before `start_date`)
    pub end_date: Date,
    /// Total budget for the trip, non-negative
    pub budget_total: f64,
    /// Number of travel companions, non-negative
    pub companion_count: i32,
    /// Ordered preference tags fed to the itinerary generator
    #[sea_orm(column_type = "Json")]
    pub preferences: Preferences,
    /// When the trip was created
    pub created_at: DateTimeUtc,
    /// When the trip was last updated
    pub updated_at: DateTimeUtc,
}

/// Ordered preference tags, persisted as a JSON array column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Preferences(pub Vec<String>);

/// Defines relationships between Trip and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each trip has many itinerary points
    #[sea_orm(has_many = "super::location::Entity")]
    Location,
    /// Each trip has many expenses
    #[sea_orm(has_many = "super::expense::Entity")]
    Expense,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expense.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
