//! Trip orchestration - Owns the trip lifecycle and schedules regeneration.
//!
//! Provides create/read/list/update/delete operations for trips. Mutating
//! operations validate input before any write and schedule asynchronous
//! itinerary (re)generation without waiting for it; read operations assemble
//! the nested day-plan view from stored location rows. Every operation
//! re-derives the requester's ownership of the trip through
//! [`load_owned_trip`] before touching anything.

use crate::{
    core::{generation, itinerary},
    entities::{Expense, Location, Trip, expense, location, trip},
    errors::{Error, Result},
    generator::ItineraryGenerator,
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Incoming trip parameters for create and update requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDraft {
    /// Display title of the trip
    pub title: String,
    /// Destination the itinerary should be generated for
    pub destination: String,
    /// First day of the trip (inclusive)
    pub start_date: NaiveDate,
    /// Last day of the trip (inclusive)
    pub end_date: NaiveDate,
    /// Total budget, must be non-negative
    pub budget_total: f64,
    /// Number of travel companions, must be non-negative
    #[serde(default)]
    pub companion_count: i32,
    /// Ordered preference tags fed to the generator
    #[serde(default)]
    pub preferences: Vec<String>,
}

/// A trip together with its reconstructed itinerary, as exposed to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripView {
    /// Unique identifier for the trip
    pub id: i64,
    /// Identity of the owning user
    pub user_id: String,
    /// Display title of the trip
    pub title: String,
    /// Destination of the trip
    pub destination: String,
    /// First day of the trip (inclusive)
    pub start_date: NaiveDate,
    /// Last day of the trip (inclusive)
    pub end_date: NaiveDate,
    /// Total budget for the trip
    pub budget_total: f64,
    /// Number of travel companions
    pub companion_count: i32,
    /// Ordered preference tags
    pub preferences: Vec<String>,
    /// Reconstructed day plans; empty until the first generation completes
    pub day_plans: Vec<itinerary::DayPlan>,
    /// When the trip was created
    pub created_at: chrono::DateTime<Utc>,
    /// When the trip was last updated
    pub updated_at: chrono::DateTime<Utc>,
}

fn view_with_plans(trip: trip::Model, day_plans: Vec<itinerary::DayPlan>) -> TripView {
    TripView {
        id: trip.id,
        user_id: trip.user_id,
        title: trip.title,
        destination: trip.destination,
        start_date: trip.start_date,
        end_date: trip.end_date,
        budget_total: trip.budget_total,
        companion_count: trip.companion_count,
        preferences: trip.preferences.0,
        day_plans,
        created_at: trip.created_at,
        updated_at: trip.updated_at,
    }
}

async fn assemble_view(db: &DatabaseConnection, trip: trip::Model) -> Result<TripView> {
    let locations = itinerary::locations_for_trip(db, trip.id).await?;
    Ok(view_with_plans(trip, itinerary::build_day_plans(locations)))
}

fn validate_draft(draft: &TripDraft) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(Error::Validation {
            message: "title cannot be empty".to_string(),
        });
    }
    if draft.destination.trim().is_empty() {
        return Err(Error::Validation {
            message: "destination cannot be empty".to_string(),
        });
    }
    if draft.end_date < draft.start_date {
        return Err(Error::Validation {
            message: "end date cannot be before start date".to_string(),
        });
    }
    if !draft.budget_total.is_finite() || draft.budget_total < 0.0 {
        return Err(Error::Validation {
            message: format!("budget cannot be negative: {}", draft.budget_total),
        });
    }
    if draft.companion_count < 0 {
        return Err(Error::Validation {
            message: format!("companion count cannot be negative: {}", draft.companion_count),
        });
    }
    Ok(())
}

/// Loads a trip and verifies the requester owns it.
///
/// This is the reusable load-and-authorize step invoked at the start of every
/// trip-scoped operation: [`Error::TripNotFound`] if the id is unknown,
/// [`Error::Forbidden`] if the trip belongs to a different user. Forbidden is
/// deliberately distinct from not-found so the caller can branch on it.
pub async fn load_owned_trip<C>(db: &C, trip_id: i64, user_id: &str) -> Result<trip::Model>
where
    C: ConnectionTrait,
{
    let trip = Trip::find_by_id(trip_id)
        .one(db)
        .await?
        .ok_or(Error::TripNotFound { id: trip_id })?;

    if trip.user_id != user_id {
        return Err(Error::Forbidden {
            message: "you don't have permission to access this trip".to_string(),
        });
    }

    Ok(trip)
}

/// Creates a new trip and schedules asynchronous itinerary generation.
///
/// Validates the draft, persists the trip with both timestamps set to now,
/// and enqueues exactly one background generation task before returning. The
/// returned view always carries an empty itinerary - the caller re-reads the
/// trip later to see generated content.
pub async fn create_trip(
    db: &DatabaseConnection,
    generator: &Arc<dyn ItineraryGenerator>,
    draft: TripDraft,
    user_id: &str,
) -> Result<TripView> {
    validate_draft(&draft)?;

    let now = Utc::now();
    let model = trip::ActiveModel {
        user_id: Set(user_id.to_string()),
        title: Set(draft.title.trim().to_string()),
        destination: Set(draft.destination.trim().to_string()),
        start_date: Set(draft.start_date),
        end_date: Set(draft.end_date),
        budget_total: Set(draft.budget_total),
        companion_count: Set(draft.companion_count),
        preferences: Set(trip::Preferences(draft.preferences)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let saved = model.insert(db).await?;

    let _task = generation::spawn_regeneration(db.clone(), Arc::clone(generator), saved.clone());

    Ok(view_with_plans(saved, Vec::new()))
}

/// Retrieves a single trip with its reconstructed itinerary.
pub async fn get_trip(db: &DatabaseConnection, trip_id: i64, user_id: &str) -> Result<TripView> {
    let trip = load_owned_trip(db, trip_id, user_id).await?;
    assemble_view(db, trip).await
}

/// Retrieves all trips owned by a user, newest first, each with its
/// reconstructed itinerary.
pub async fn list_trips(db: &DatabaseConnection, user_id: &str) -> Result<Vec<TripView>> {
    let trips = Trip::find()
        .filter(trip::Column::UserId.eq(user_id))
        .order_by_desc(trip::Column::CreatedAt)
        .all(db)
        .await?;

    let mut views = Vec::with_capacity(trips.len());
    for trip in trips {
        views.push(assemble_view(db, trip).await?);
    }
    Ok(views)
}

/// Updates a trip's mutable fields and schedules itinerary regeneration.
///
/// Applies the same validation as create, sets the update timestamp to now,
/// and re-enqueues generation. The previously stored itinerary stays visible
/// until the replacement plan commits; no intermediate empty state is written.
pub async fn update_trip(
    db: &DatabaseConnection,
    generator: &Arc<dyn ItineraryGenerator>,
    trip_id: i64,
    draft: TripDraft,
    user_id: &str,
) -> Result<TripView> {
    let trip = load_owned_trip(db, trip_id, user_id).await?;
    validate_draft(&draft)?;

    let mut model: trip::ActiveModel = trip.into();
    model.title = Set(draft.title.trim().to_string());
    model.destination = Set(draft.destination.trim().to_string());
    model.start_date = Set(draft.start_date);
    model.end_date = Set(draft.end_date);
    model.budget_total = Set(draft.budget_total);
    model.companion_count = Set(draft.companion_count);
    model.preferences = Set(trip::Preferences(draft.preferences));
    model.updated_at = Set(Utc::now());
    let saved = model.update(db).await?;

    let _task = generation::spawn_regeneration(db.clone(), Arc::clone(generator), saved.clone());

    assemble_view(db, saved).await
}

/// Deletes a trip and everything that belongs to it.
///
/// The cascade runs inside one database transaction, in dependency order:
/// location rows, then expense rows, then the trip itself. A failure at any
/// step rolls the whole cascade back, leaving no orphaned records.
pub async fn delete_trip(db: &DatabaseConnection, trip_id: i64, user_id: &str) -> Result<()> {
    let trip = load_owned_trip(db, trip_id, user_id).await?;

    let txn = db.begin().await?;

    Location::delete_many()
        .filter(location::Column::TripId.eq(trip.id))
        .exec(&txn)
        .await?;

    Expense::delete_many()
        .filter(expense::Column::TripId.eq(trip.id))
        .exec(&txn)
        .await?;

    trip.delete(&txn).await?;

    txn.commit().await?;
    Ok(())
}
