//! Deterministic mock itinerary generator.
//!
//! Produces a fixed breakfast / sightseeing / dinner rhythm for every day of
//! the trip's inclusive date range. Used in development and tests so the
//! orchestration and reconstruction paths can run without a real generation
//! backend.

use crate::core::itinerary::{DayPlan, PlannedLocation};
use crate::entities::trip;
use crate::errors::Result;
use crate::generator::ItineraryGenerator;
use async_trait::async_trait;

/// Generates a plausible-looking plan from the trip parameters alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockItineraryGenerator;

#[async_trait]
impl ItineraryGenerator for MockItineraryGenerator {
    async fn generate_plan(&self, trip: &trip::Model) -> Result<Vec<DayPlan>> {
        let day_count = (trip.end_date - trip.start_date).num_days() + 1;

        let mut plans = Vec::new();
        for day in 1..=day_count {
            let day = i32::try_from(day).unwrap_or(i32::MAX);
            // Spread the stops slightly so points within a day are distinct
            let offset = f64::from(day) * 0.01;
            plans.push(DayPlan {
                day,
                locations: vec![
                    PlannedLocation {
                        name: "Hotel restaurant".to_string(),
                        lng: 116.39 + offset,
                        lat: 39.90 + offset,
                        description: "Breakfast at the hotel".to_string(),
                        kind: "restaurant".to_string(),
                    },
                    PlannedLocation {
                        name: format!("{} highlights", trip.destination),
                        lng: 116.40 + offset,
                        lat: 39.91 + offset,
                        description: format!("Sightseeing around {}", trip.destination),
                        kind: "sight".to_string(),
                    },
                    PlannedLocation {
                        name: "Local restaurant".to_string(),
                        lng: 116.41 + offset,
                        lat: 39.92 + offset,
                        description: "Dinner at a local favourite".to_string(),
                        kind: "restaurant".to_string(),
                    },
                ],
            });
        }

        Ok(plans)
    }
}
