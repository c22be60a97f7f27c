//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod expense;
pub mod location;
pub mod trip;

// Re-export specific types to avoid conflicts
pub use expense::{Column as ExpenseColumn, Entity as Expense, Model as ExpenseModel};
pub use location::{Column as LocationColumn, Entity as Location, Model as LocationModel};
pub use trip::{Column as TripColumn, Entity as Trip, Model as TripModel};
