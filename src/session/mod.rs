//! Order composition session.
//!
//! Holds the composition state for one screen visit: the loaded food, the
//! working extras list, and the food quantity. Mutators derive a fresh
//! total on every change; confirmation submits one order record per unit
//! of food quantity, sequentially. The state machine gates mutation while
//! a load or a confirmation is in flight.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::clients::{FoodLookup, LookupError, OrderGateway, SubmissionError};
use crate::menu::{Extra, Food};
use crate::order::Order;
use crate::pricing::order_total;

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors surfaced by the session to the presentation layer.
///
/// The session never swallows a collaborator failure and never retries on
/// its own; retry is a caller-initiated repeat of the same operation.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The initial food lookup failed; the screen has nothing to show.
    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// A submission call failed partway through a confirmation. Orders
    /// already accepted are not rolled back.
    #[error("submitted {submitted} of {total} orders: {source}")]
    Submission {
        submitted: u32,
        total: u32,
        source: SubmissionError,
    },

    /// The operation is not valid in the session's current state.
    #[error("operation not permitted while {0}")]
    InvalidState(SessionState),
}

/// Lifecycle of one composition session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No food loaded yet.
    Uninitialized,
    /// The lookup call is in flight.
    Loading,
    /// Loaded; quantity mutation and confirmation are permitted.
    Ready,
    /// A confirmation is in flight; mutation is blocked.
    Submitting,
    /// Every order of a confirmation was accepted. Terminal; the host
    /// discards the session.
    Completed,
    /// The last confirmation failed partway. The next interaction returns
    /// the session to ready; confirmation may also be retried directly.
    SubmissionFailed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Uninitialized => "uninitialized",
            SessionState::Loading => "loading",
            SessionState::Ready => "ready",
            SessionState::Submitting => "submitting",
            SessionState::Completed => "completed",
            SessionState::SubmissionFailed => "submission-failed",
        };
        f.write_str(name)
    }
}

/// Receipt for a completed confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Number of order records accepted, one per unit of food quantity.
    pub orders_submitted: u32,
    /// Correlation id shared by all records of this confirmation.
    pub correlation_id: String,
}

/// Composition state and lifecycle for one screen visit.
///
/// Exclusively owned by the screen session. Mutators take `&mut self`, so
/// no mutation can overlap the suspension points inside `load` and
/// `confirm_order`.
pub struct OrderSession {
    lookup: Arc<dyn FoodLookup>,
    gateway: Arc<dyn OrderGateway>,
    state: SessionState,
    food: Option<Food>,
    extras: Vec<Extra>,
    food_quantity: u32,
}

impl OrderSession {
    pub fn new(lookup: Arc<dyn FoodLookup>, gateway: Arc<dyn OrderGateway>) -> Self {
        Self {
            lookup,
            gateway,
            state: SessionState::Uninitialized,
            food: None,
            extras: Vec::new(),
            food_quantity: 1,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The loaded food, if any.
    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    /// Working extras list with chosen quantities.
    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    /// Current food quantity.
    pub fn food_quantity(&self) -> u32 {
        self.food_quantity
    }

    /// Chosen quantity for one extra, if the id is known.
    pub fn extra_quantity(&self, extra_id: u64) -> Option<u32> {
        self.extras
            .iter()
            .find(|e| e.id == extra_id)
            .map(|e| e.quantity)
    }

    /// Load the food and its extras catalog.
    ///
    /// Permitted once, from `Uninitialized`. Extra quantities start at 0
    /// regardless of what the lookup returned; food quantity starts at 1.
    /// On failure the session stays uninitialized and the error is
    /// surfaced to the caller.
    pub async fn load(&mut self, food_id: u64) -> Result<()> {
        if self.state != SessionState::Uninitialized {
            return Err(SessionError::InvalidState(self.state));
        }
        self.state = SessionState::Loading;

        let food = match self.lookup.fetch_food(food_id).await {
            Ok(food) => food,
            Err(e) => {
                self.state = SessionState::Uninitialized;
                warn!(food.id = food_id, error = %e, "Food lookup failed");
                return Err(e.into());
            }
        };

        self.extras = food
            .extras
            .iter()
            .cloned()
            .map(|mut extra| {
                extra.quantity = 0;
                extra
            })
            .collect();
        self.food_quantity = 1;

        info!(
            food.id = food.id,
            food.name = %food.name,
            extras = self.extras.len(),
            "Loaded food"
        );

        self.food = Some(food);
        self.state = SessionState::Ready;
        Ok(())
    }

    /// True when quantity mutation is permitted.
    fn mutable(&self) -> bool {
        matches!(
            self.state,
            SessionState::Ready | SessionState::SubmissionFailed
        )
    }

    /// Re-enter `Ready` after a failed confirmation.
    fn resume_ready(&mut self) {
        if self.state == SessionState::SubmissionFailed {
            self.state = SessionState::Ready;
        }
    }

    /// Increment one extra's quantity by 1.
    ///
    /// Unknown ids are stale UI events and are ignored. Returns the
    /// freshly derived total.
    pub fn increment_extra(&mut self, extra_id: u64) -> f64 {
        if self.mutable() {
            self.resume_ready();
            if let Some(extra) = self.extras.iter_mut().find(|e| e.id == extra_id) {
                extra.quantity += 1;
                debug!(extra.id = extra_id, quantity = extra.quantity, "Extra incremented");
            }
        }
        self.total()
    }

    /// Decrement one extra's quantity by 1, flooring at 0.
    pub fn decrement_extra(&mut self, extra_id: u64) -> f64 {
        if self.mutable() {
            self.resume_ready();
            if let Some(extra) = self.extras.iter_mut().find(|e| e.id == extra_id) {
                if extra.quantity > 0 {
                    extra.quantity -= 1;
                    debug!(extra.id = extra_id, quantity = extra.quantity, "Extra decremented");
                }
            }
        }
        self.total()
    }

    /// Increment the food quantity by 1. No upper bound.
    pub fn increment_food(&mut self) -> f64 {
        if self.mutable() {
            self.resume_ready();
            self.food_quantity += 1;
        }
        self.total()
    }

    /// Decrement the food quantity by 1, flooring at 1.
    pub fn decrement_food(&mut self) -> f64 {
        if self.mutable() {
            self.resume_ready();
            if self.food_quantity > 1 {
                self.food_quantity -= 1;
            }
        }
        self.total()
    }

    /// Derive the current total price.
    ///
    /// Always recomputed from the food price, food quantity, and extras;
    /// never cached. Zero before a food is loaded.
    pub fn total(&self) -> f64 {
        match &self.food {
            Some(food) => order_total(food.price, self.food_quantity, &self.extras),
            None => 0.0,
        }
    }

    /// Submit the composed order, one record per unit of food quantity.
    ///
    /// Records are identical snapshots sharing one correlation id and are
    /// submitted sequentially: each call resolves before the next is
    /// issued, so the backend observes them in a deterministic order. The
    /// first failure aborts the remainder; accepted orders are not rolled
    /// back, and the error reports how many went through. Calling again
    /// after a failure repeats the full confirmation.
    pub async fn confirm_order(&mut self) -> Result<SubmissionReceipt> {
        if !self.mutable() {
            return Err(SessionError::InvalidState(self.state));
        }
        let food = self
            .food
            .as_ref()
            .ok_or(SessionError::InvalidState(self.state))?;

        let order = Order::snapshot(food, &self.extras);
        let total = self.food_quantity;
        self.state = SessionState::Submitting;

        for submitted in 0..total {
            if let Err(e) = self.gateway.submit_order(&order).await {
                self.state = SessionState::SubmissionFailed;
                warn!(
                    food.id = order.food_id,
                    correlation_id = %order.correlation_id,
                    submitted,
                    total,
                    error = %e,
                    "Confirmation aborted"
                );
                return Err(SessionError::Submission {
                    submitted,
                    total,
                    source: e,
                });
            }
        }

        self.state = SessionState::Completed;
        info!(
            food.id = order.food_id,
            correlation_id = %order.correlation_id,
            orders = total,
            "Confirmation completed"
        );

        Ok(SubmissionReceipt {
            orders_submitted: total,
            correlation_id: order.correlation_id,
        })
    }
}
