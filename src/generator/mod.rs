//! Itinerary content generator seam.
//!
//! The generation backend (an LLM service in production) is an external
//! collaborator: the core only depends on the [`ItineraryGenerator`] trait,
//! which takes a trip snapshot and returns an ordered day-by-day plan or
//! fails with an opaque error. Failures are never retried automatically; the
//! background runner logs them and leaves stored itinerary content untouched.

use crate::core::itinerary::DayPlan;
use crate::entities::trip;
use crate::errors::Result;
use async_trait::async_trait;

/// Mock generator producing deterministic plans without any network calls
pub mod mock;

pub use mock::MockItineraryGenerator;

/// Produces an ordered day-by-day list of points of interest for a trip.
///
/// Implementations receive the full trip snapshot (destination, date range,
/// budget, companion count, preference tags) and must return one `DayPlan`
/// per day in ascending day order, with each day's locations in visit order.
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    /// Generates a multi-day plan for the given trip, or fails with an
    /// opaque [`crate::errors::Error::Generation`] error.
    async fn generate_plan(&self, trip: &trip::Model) -> Result<Vec<DayPlan>>;
}
