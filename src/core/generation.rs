//! Background itinerary regeneration runner.
//!
//! Decouples the request path from generation latency: the orchestrator
//! enqueues exactly one task per create/update and returns immediately. The
//! task calls the generator and, on success, replaces the trip's stored
//! itinerary. Failures are logged and never reach the caller that scheduled
//! the task - the trip's previously stored itinerary stays untouched.
//!
//! There is no deduplication or cancellation: if a newer update schedules a
//! second task while an older one is still running, both run to completion
//! and the last replace to commit wins.

use crate::{core::itinerary, entities::trip, generator::ItineraryGenerator};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Schedules itinerary (re)generation for a trip snapshot.
///
/// Spawns a detached task that runs outside the calling request's lifetime.
/// The returned handle exists so tests can await completion; production
/// callers drop it - the task runs regardless.
pub fn spawn_regeneration(
    db: DatabaseConnection,
    generator: Arc<dyn ItineraryGenerator>,
    trip: trip::Model,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(trip_id = trip.id, "starting itinerary generation");

        let day_plans = match generator.generate_plan(&trip).await {
            Ok(day_plans) => day_plans,
            Err(err) => {
                error!(trip_id = trip.id, error = %err, "itinerary generation failed");
                return;
            }
        };

        match itinerary::save_generated(&db, trip.id, &day_plans).await {
            Ok(()) => info!(trip_id = trip.id, "itinerary generation completed"),
            Err(err) => {
                error!(trip_id = trip.id, error = %err, "failed to store generated itinerary");
            }
        }
    })
}
