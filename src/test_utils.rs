//! Shared test utilities for the trip planner.
//!
//! This module provides common helper functions for setting up test databases,
//! creating test entities with sensible defaults, and stubbing the itinerary
//! generator. Entity factories insert rows directly so CRUD tests never race
//! against a background generation task.

#![allow(clippy::unwrap_used)]

use crate::core::itinerary::{DayPlan, PlannedLocation};
use crate::core::trip::TripDraft;
use crate::entities::{expense, trip};
use crate::errors::{Error, Result};
use crate::generator::ItineraryGenerator;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use tokio::sync::Notify;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a `NaiveDate` from literal parts.
pub fn test_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builds a valid trip draft with sensible defaults.
///
/// # Defaults
/// * dates: 2024-06-01 to 2024-06-02
/// * `budget_total`: 2000.0
/// * `companion_count`: 1
pub fn test_draft(destination: &str) -> TripDraft {
    TripDraft {
        title: format!("{destination} getaway"),
        destination: destination.to_string(),
        start_date: test_date(2024, 6, 1),
        end_date: test_date(2024, 6, 2),
        budget_total: 2000.0,
        companion_count: 1,
        preferences: vec!["food".to_string(), "culture".to_string()],
    }
}

/// Inserts a trip row directly, bypassing orchestration.
///
/// # Defaults
/// * dates: 2024-06-01 to 2024-06-03
/// * `budget_total`: 1000.0
pub async fn insert_test_trip(
    db: &DatabaseConnection,
    user_id: &str,
    destination: &str,
) -> Result<trip::Model> {
    insert_custom_trip(
        db,
        user_id,
        destination,
        test_date(2024, 6, 1),
        test_date(2024, 6, 3),
        1000.0,
    )
    .await
}

/// Inserts a trip row with custom dates and budget, bypassing orchestration.
pub async fn insert_custom_trip(
    db: &DatabaseConnection,
    user_id: &str,
    destination: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    budget_total: f64,
) -> Result<trip::Model> {
    let now = Utc::now();
    let model = trip::ActiveModel {
        user_id: Set(user_id.to_string()),
        title: Set(format!("{destination} getaway")),
        destination: Set(destination.to_string()),
        start_date: Set(start_date),
        end_date: Set(end_date),
        budget_total: Set(budget_total),
        companion_count: Set(1),
        preferences: Set(trip::Preferences(vec!["food".to_string()])),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    model.insert(db).await.map_err(Into::into)
}

/// Inserts an expense row directly with the default currency.
pub async fn insert_test_expense(
    db: &DatabaseConnection,
    trip_id: i64,
    user_id: &str,
    amount: f64,
) -> Result<expense::Model> {
    let model = expense::ActiveModel {
        trip_id: Set(trip_id),
        user_id: Set(user_id.to_string()),
        amount: Set(amount),
        currency: Set(crate::core::expense::DEFAULT_CURRENCY.to_string()),
        comment: Set(None),
        category: Set(None),
        expense_date: Set(None),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    model.insert(db).await.map_err(Into::into)
}

/// A two-day Paris plan: day 1 has two locations, day 2 has one.
pub fn sample_day_plans() -> Vec<DayPlan> {
    vec![
        DayPlan {
            day: 1,
            locations: vec![
                PlannedLocation {
                    name: "Louvre".to_string(),
                    lng: 2.3376,
                    lat: 48.8606,
                    description: "World-famous art museum".to_string(),
                    kind: "sight".to_string(),
                },
                PlannedLocation {
                    name: "Eiffel Tower".to_string(),
                    lng: 2.2945,
                    lat: 48.8584,
                    description: "Iron lattice tower".to_string(),
                    kind: "sight".to_string(),
                },
            ],
        },
        DayPlan {
            day: 2,
            locations: vec![PlannedLocation {
                name: "Montmartre".to_string(),
                lng: 2.3431,
                lat: 48.8867,
                description: "Historic hilltop district".to_string(),
                kind: "sight".to_string(),
            }],
        },
    ]
}

struct StubGenerator {
    plans: Vec<DayPlan>,
}

#[async_trait]
impl ItineraryGenerator for StubGenerator {
    async fn generate_plan(&self, _trip: &trip::Model) -> Result<Vec<DayPlan>> {
        Ok(self.plans.clone())
    }
}

/// Generator that immediately returns the given plans.
pub fn stub_generator(plans: Vec<DayPlan>) -> Arc<dyn ItineraryGenerator> {
    Arc::new(StubGenerator { plans })
}

struct FailingGenerator;

#[async_trait]
impl ItineraryGenerator for FailingGenerator {
    async fn generate_plan(&self, _trip: &trip::Model) -> Result<Vec<DayPlan>> {
        Err(Error::Generation {
            message: "stubbed generator failure".to_string(),
        })
    }
}

/// Generator that always fails.
pub fn failing_generator() -> Arc<dyn ItineraryGenerator> {
    Arc::new(FailingGenerator)
}

struct GatedGenerator {
    gate: Arc<Notify>,
    plans: Vec<DayPlan>,
}

#[async_trait]
impl ItineraryGenerator for GatedGenerator {
    async fn generate_plan(&self, _trip: &trip::Model) -> Result<Vec<DayPlan>> {
        self.gate.notified().await;
        Ok(self.plans.clone())
    }
}

/// Generator that blocks until the returned gate is notified, then returns
/// the given plans. Lets tests observe the window before a background
/// generation completes.
pub fn gated_generator(plans: Vec<DayPlan>) -> (Arc<dyn ItineraryGenerator>, Arc<Notify>) {
    let gate = Arc::new(Notify::new());
    let generator = GatedGenerator {
        gate: Arc::clone(&gate),
        plans,
    };
    (Arc::new(generator), gate)
}

/// Generator whose generation never completes.
pub fn pending_generator() -> Arc<dyn ItineraryGenerator> {
    let (generator, _gate) = gated_generator(Vec::new());
    generator
}
