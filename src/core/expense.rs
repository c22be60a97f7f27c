//! Expense ledger - Ownership-guarded expense CRUD for a trip.
//!
//! Expenses have an independent lifecycle from itinerary content: they are
//! added, updated, and deleted individually, never bulk-replaced. Every
//! operation re-derives the requester's ownership of the parent trip before
//! touching any expense, and an expense reached through the wrong trip id is
//! rejected rather than silently served. Amounts are accepted as either a
//! JSON number or a numeric string.

use crate::{
    core::trip::load_owned_trip,
    entities::{Expense, expense},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::Deserialize;

/// Currency applied when a draft does not specify one.
pub const DEFAULT_CURRENCY: &str = "CNY";

/// An expense amount as submitted by a client: a number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// Plain numeric amount
    Number(f64),
    /// Amount given as a decimal string, e.g. `"250.50"`
    Text(String),
}

fn parse_amount(input: &AmountInput) -> Result<f64> {
    let amount = match input {
        AmountInput::Number(amount) => *amount,
        AmountInput::Text(text) => text.trim().parse::<f64>().map_err(|_| Error::Validation {
            message: format!("invalid amount format: {text}"),
        })?,
    };

    if !amount.is_finite() {
        return Err(Error::Validation {
            message: format!("amount must be a finite number: {amount}"),
        });
    }

    Ok(amount)
}

/// Incoming expense for add requests. Only the amount is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    /// Spent amount, as a number or numeric string
    pub amount: AmountInput,
    /// Currency code; defaults to [`DEFAULT_CURRENCY`] when omitted
    #[serde(default)]
    pub currency: Option<String>,
    /// Optional free-text note
    #[serde(default)]
    pub comment: Option<String>,
    /// Optional category for grouping
    #[serde(default)]
    pub category: Option<String>,
    /// Optional date the expense occurred on
    #[serde(default)]
    pub expense_date: Option<NaiveDate>,
}

/// Partial update for an existing expense: only fields present in the
/// request are changed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePatch {
    /// New amount, if provided
    #[serde(default)]
    pub amount: Option<AmountInput>,
    /// New currency code, if provided
    #[serde(default)]
    pub currency: Option<String>,
    /// New comment, if provided
    #[serde(default)]
    pub comment: Option<String>,
    /// New category, if provided
    #[serde(default)]
    pub category: Option<String>,
    /// New expense date, if provided
    #[serde(default)]
    pub expense_date: Option<NaiveDate>,
}

fn draft_to_model(trip_id: i64, user_id: &str, draft: ExpenseDraft) -> Result<expense::ActiveModel> {
    let amount = parse_amount(&draft.amount)?;
    Ok(expense::ActiveModel {
        trip_id: Set(trip_id),
        user_id: Set(user_id.to_string()),
        amount: Set(amount),
        currency: Set(draft.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string())),
        comment: Set(draft.comment),
        category: Set(draft.category),
        expense_date: Set(draft.expense_date),
        created_at: Set(Utc::now()),
        ..Default::default()
    })
}

async fn load_expense_for_trip<C>(db: &C, trip_id: i64, expense_id: i64) -> Result<expense::Model>
where
    C: ConnectionTrait,
{
    let expense = Expense::find_by_id(expense_id)
        .one(db)
        .await?
        .ok_or(Error::ExpenseNotFound { id: expense_id })?;

    if expense.trip_id != trip_id {
        return Err(Error::Validation {
            message: "expense does not belong to the specified trip".to_string(),
        });
    }

    Ok(expense)
}

/// Records a single expense against a trip.
///
/// Re-derives the requester's ownership of the trip, parses and validates the
/// amount, and defaults the currency to [`DEFAULT_CURRENCY`] when omitted.
pub async fn add_expense(
    db: &DatabaseConnection,
    trip_id: i64,
    draft: ExpenseDraft,
    user_id: &str,
) -> Result<expense::Model> {
    let trip = load_owned_trip(db, trip_id, user_id).await?;

    let model = draft_to_model(trip.id, user_id, draft)?;
    model.insert(db).await.map_err(Into::into)
}

/// Records a batch of expenses against a trip.
///
/// Every draft is validated up front, before any insert: a single invalid
/// entry aborts the whole batch with nothing written. The inserts themselves
/// run in one database transaction.
pub async fn add_expenses_batch(
    db: &DatabaseConnection,
    trip_id: i64,
    drafts: Vec<ExpenseDraft>,
    user_id: &str,
) -> Result<Vec<expense::Model>> {
    let trip = load_owned_trip(db, trip_id, user_id).await?;

    let mut models = Vec::with_capacity(drafts.len());
    for draft in drafts {
        models.push(draft_to_model(trip.id, user_id, draft)?);
    }

    let txn = db.begin().await?;
    let mut saved = Vec::with_capacity(models.len());
    for model in models {
        saved.push(model.insert(&txn).await?);
    }
    txn.commit().await?;

    Ok(saved)
}

/// Applies a partial update to an expense.
///
/// Only fields present in the patch are changed. The expense must belong to
/// the trip named in the request, and the trip must belong to the requester.
pub async fn update_expense(
    db: &DatabaseConnection,
    trip_id: i64,
    expense_id: i64,
    patch: ExpensePatch,
    user_id: &str,
) -> Result<expense::Model> {
    let expense = load_expense_for_trip(db, trip_id, expense_id).await?;
    load_owned_trip(db, trip_id, user_id).await?;

    let mut model: expense::ActiveModel = expense.into();
    if let Some(amount) = &patch.amount {
        model.amount = Set(parse_amount(amount)?);
    }
    if let Some(currency) = patch.currency {
        model.currency = Set(currency);
    }
    if let Some(comment) = patch.comment {
        model.comment = Set(Some(comment));
    }
    if let Some(category) = patch.category {
        model.category = Set(Some(category));
    }
    if let Some(expense_date) = patch.expense_date {
        model.expense_date = Set(Some(expense_date));
    }

    model.update(db).await.map_err(Into::into)
}

/// Deletes a single expense from a trip.
pub async fn delete_expense(
    db: &DatabaseConnection,
    trip_id: i64,
    expense_id: i64,
    user_id: &str,
) -> Result<()> {
    load_owned_trip(db, trip_id, user_id).await?;
    let expense = load_expense_for_trip(db, trip_id, expense_id).await?;

    expense.delete(db).await?;
    Ok(())
}

/// Retrieves all expenses recorded against a trip, newest first.
pub async fn list_expenses(
    db: &DatabaseConnection,
    trip_id: i64,
    user_id: &str,
) -> Result<Vec<expense::Model>> {
    load_owned_trip(db, trip_id, user_id).await?;

    Expense::find()
        .filter(expense::Column::TripId.eq(trip_id))
        .order_by_desc(expense::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a single expense by id, verifying it belongs to the given trip.
pub async fn get_expense(
    db: &DatabaseConnection,
    trip_id: i64,
    expense_id: i64,
    user_id: &str,
) -> Result<expense::Model> {
    load_owned_trip(db, trip_id, user_id).await?;
    load_expense_for_trip(db, trip_id, expense_id).await
}
