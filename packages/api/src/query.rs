//! # Query view state
//!
//! Every dashboard view follows the same lifecycle:
//!
//! ```text
//! Idle ──submit──▶ Pending ──▶ Loaded(result)
//!   ▲                  │
//!   │                  └─────▶ Failed(message)
//!   └──────── next submit ◀────────┘
//! ```
//!
//! [`QueryView`] owns that state for one view. Each accepted submit hands out a
//! [`Ticket`]; only the ticket of the most recent submit may complete the view,
//! so a slow response to an older request can never overwrite a newer one.

use crate::error::ApiError;

/// Which query a view performs. Carries the view's fixed messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Ip,
    Phone,
    Username,
    MyIp,
    /// The chained detail lookup of the My IP page.
    IpDetail,
}

impl QueryKind {
    /// Message shown when the input is blank.
    pub fn validation_message(self) -> &'static str {
        match self {
            QueryKind::Ip | QueryKind::IpDetail | QueryKind::MyIp => "Please enter an IP address",
            QueryKind::Phone => "Please enter a phone number",
            QueryKind::Username => "Please enter a username",
        }
    }

    /// Message shown when the API gives no usable `detail`.
    pub fn fallback_message(self) -> &'static str {
        match self {
            QueryKind::Ip => "Query failed, please check IP address format",
            QueryKind::Phone => "Query failed, please check phone number format",
            QueryKind::Username => "Search failed, please check username format",
            QueryKind::MyIp => "Failed to get IP",
            QueryKind::IpDetail => "Failed to get IP details",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QueryKind::Ip => "IP lookup",
            QueryKind::Phone => "Phone lookup",
            QueryKind::Username => "Username search",
            QueryKind::MyIp => "My IP",
            QueryKind::IpDetail => "IP details",
        }
    }
}

/// Exactly one of these is active per view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState<T> {
    #[default]
    Idle,
    Pending,
    Loaded(T),
    Failed(String),
}

impl<T> QueryState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            QueryState::Loaded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Proof that a submit was accepted. Compared against the view's generation
/// when the response arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// State of one query view plus the generation fencing its responses.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryView<T> {
    kind: QueryKind,
    state: QueryState<T>,
    generation: u64,
}

impl<T> QueryView<T> {
    pub fn new(kind: QueryKind) -> Self {
        Self {
            kind,
            state: QueryState::Idle,
            generation: 0,
        }
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn state(&self) -> &QueryState<T> {
        &self.state
    }

    /// Start a submit. Blank input fails the view immediately and returns
    /// `None`, in which case no request must be sent. Otherwise the view goes
    /// pending and the trimmed input is returned with the submit's ticket.
    pub fn begin(&mut self, input: &str) -> Option<(Ticket, String)> {
        let trimmed = input.trim();
        // a blank submit still supersedes whatever is in flight
        self.generation += 1;
        if trimmed.is_empty() {
            self.state = QueryState::Failed(self.kind.validation_message().to_string());
            return None;
        }
        self.state = QueryState::Pending;
        Some((Ticket(self.generation), trimmed.to_string()))
    }

    /// Start a submit that takes no input (the My IP refresh).
    pub fn begin_without_input(&mut self) -> Ticket {
        self.generation += 1;
        self.state = QueryState::Pending;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Complete the submit identified by `ticket`. Returns `false`, leaving the
    /// view untouched, when a newer submit has superseded it.
    pub fn finish(&mut self, ticket: Ticket, outcome: Result<T, ApiError>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("{}: dropping stale response", self.kind.label());
            return false;
        }
        self.state = match outcome {
            Ok(result) => QueryState::Loaded(result),
            Err(err) => {
                tracing::warn!("{} failed: {err}", self.kind.label());
                QueryState::Failed(err.user_message(self.kind.fallback_message()))
            }
        };
        true
    }

    /// Back to idle, invalidating anything still in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = QueryState::Idle;
    }
}

/// Where a view's state lives: the value itself in tests, a signal in the UI.
///
/// Query flows only touch state through `update`, never across an `.await`.
pub trait ViewCell<V> {
    fn update<R>(&mut self, f: impl FnOnce(&mut V) -> R) -> R;
}

impl<T> ViewCell<QueryView<T>> for QueryView<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut QueryView<T>) -> R) -> R {
        f(self)
    }
}

mod signal_cell {
    use dioxus::prelude::*;

    use super::ViewCell;

    impl<V: 'static> ViewCell<V> for Signal<V> {
        fn update<R>(&mut self, f: impl FnOnce(&mut V) -> R) -> R {
            let mut guard = self.write();
            f(&mut *guard)
        }
    }
}
