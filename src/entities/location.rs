//! Location entity - A single itinerary point within a trip's day plan.
//!
//! Itinerary content is stored flat: each row carries its `trip_id`, a
//! 1-based `day` index, and a dense 1-based `order_index` within that day.
//! The nested day-plan view is reconstructed from these rows on read. Rows
//! are fully replaced on every regeneration, never patched in place.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Location database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    /// Unique identifier for the location
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the trip this location belongs to
    pub trip_id: i64,
    /// Which day of the trip this location is planned for (1-based)
    pub day: i32,
    /// Position within the day, dense and 1-based, assigned at write time
    pub order_index: i32,
    /// Name of the place or activity
    pub name: String,
    /// Longitude
    pub lng: f64,
    /// Latitude
    pub lat: f64,
    /// Short description of the place
    pub description: String,
    /// Category tag, e.g. sight, restaurant, hotel
    #[sea_orm(column_name = "type")]
    pub kind: String,
}

/// Defines relationships between Location and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each location belongs to one trip
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
