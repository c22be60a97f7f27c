//! Itinerary point storage and day-plan reconstruction.
//!
//! Itinerary content is persisted as flat location rows keyed by
//! `(trip_id, day, order_index)` and reconstructed into the nested
//! day → locations view on read. Writes are full replacements: every
//! regeneration deletes the trip's existing rows and inserts the new plan in
//! a single database transaction, so readers never observe a partially
//! written or intermediate empty itinerary.

use crate::{
    entities::{Location, location},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The ordered set of planned locations for one day of a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Which day of the trip this plan covers (1-based)
    pub day: i32,
    /// Locations to visit that day, in order
    pub locations: Vec<PlannedLocation>,
}

/// A single point of interest inside a day plan, as produced by the
/// generator and exposed to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedLocation {
    /// Name of the place or activity
    pub name: String,
    /// Longitude
    pub lng: f64,
    /// Latitude
    pub lat: f64,
    /// Short description of the place
    pub description: String,
    /// Category tag, e.g. sight, restaurant, hotel
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<location::Model> for PlannedLocation {
    fn from(location: location::Model) -> Self {
        Self {
            name: location.name,
            lng: location.lng,
            lat: location.lat,
            description: location.description,
            kind: location.kind,
        }
    }
}

/// Replaces a trip's stored itinerary with freshly generated day plans.
///
/// Runs as one database transaction: all existing location rows for the trip
/// are deleted, then one row is inserted per generated point with a dense
/// 1-based `order_index` within each day, in the order the generator produced
/// them. This is a full replace, never a merge - regeneration must not leave
/// stale points from a previous, differently-shaped plan.
pub async fn save_generated(
    db: &DatabaseConnection,
    trip_id: i64,
    day_plans: &[DayPlan],
) -> Result<()> {
    let txn = db.begin().await?;

    Location::delete_many()
        .filter(location::Column::TripId.eq(trip_id))
        .exec(&txn)
        .await?;

    for plan in day_plans {
        let mut order = 1;
        for planned in &plan.locations {
            let row = location::ActiveModel {
                trip_id: Set(trip_id),
                day: Set(plan.day),
                order_index: Set(order),
                name: Set(planned.name.clone()),
                lng: Set(planned.lng),
                lat: Set(planned.lat),
                description: Set(planned.description.clone()),
                kind: Set(planned.kind.clone()),
                ..Default::default()
            };
            row.insert(&txn).await?;
            order += 1;
        }
    }

    txn.commit().await?;
    Ok(())
}

/// Retrieves all location rows for a trip, ordered by day and order index.
///
/// This is the internal flat read used by view assembly; callers exposing
/// rows outside the crate go through [`trip_locations`] instead, which
/// re-derives ownership first.
pub async fn locations_for_trip(
    db: &DatabaseConnection,
    trip_id: i64,
) -> Result<Vec<location::Model>> {
    Location::find()
        .filter(location::Column::TripId.eq(trip_id))
        .order_by_asc(location::Column::Day)
        .order_by_asc(location::Column::OrderIndex)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Reconstructs the nested day-plan view from flat location rows.
///
/// Groups rows by day, sorts the groups ascending by day and each group
/// ascending by `order_index`, and emits one [`DayPlan`] per day. This is a
/// pure function of its input: calling it twice over the same rows returns
/// identical output.
#[must_use]
pub fn build_day_plans(locations: Vec<location::Model>) -> Vec<DayPlan> {
    let mut by_day: BTreeMap<i32, Vec<location::Model>> = BTreeMap::new();
    for location in locations {
        by_day.entry(location.day).or_default().push(location);
    }

    by_day
        .into_iter()
        .map(|(day, mut rows)| {
            rows.sort_by_key(|row| row.order_index);
            DayPlan {
                day,
                locations: rows.into_iter().map(PlannedLocation::from).collect(),
            }
        })
        .collect()
}

/// Retrieves a trip's location rows on behalf of a requester.
///
/// Re-derives the requester's ownership of the trip before reading.
pub async fn trip_locations(
    db: &DatabaseConnection,
    trip_id: i64,
    user_id: &str,
) -> Result<Vec<location::Model>> {
    crate::core::trip::load_owned_trip(db, trip_id, user_id).await?;
    locations_for_trip(db, trip_id).await
}

/// Retrieves the location rows for a single day of a trip, sorted by order
/// index, on behalf of a requester.
pub async fn day_locations(
    db: &DatabaseConnection,
    trip_id: i64,
    day: i32,
    user_id: &str,
) -> Result<Vec<location::Model>> {
    crate::core::trip::load_owned_trip(db, trip_id, user_id).await?;
    Location::find()
        .filter(location::Column::TripId.eq(trip_id))
        .filter(location::Column::Day.eq(day))
        .order_by_asc(location::Column::OrderIndex)
        .all(db)
        .await
        .map_err(Into::into)
}
