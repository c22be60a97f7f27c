//! Core business logic module - Framework-agnostic trip planning operations.
//!
//! This module contains all business logic for the trip planner, independent
//! of any routing or transport layer. Operations take a database connection
//! and the resolved identity of the caller; authorization is re-derived
//! through the trip ownership chain at the start of every operation.

/// Budget aggregation - derived spent/remaining/overspend status
pub mod budget;
/// Expense ledger - ownership-guarded expense CRUD
pub mod expense;
/// Background itinerary regeneration runner
pub mod generation;
/// Itinerary point storage and day-plan reconstruction
pub mod itinerary;
/// Trip lifecycle orchestration
pub mod trip;
