//! The flow ticket — cross-page recharge state.
//!
//! The three recharge pages are independent route loads, so in-memory state
//! can vanish between steps (back navigation, external links). The ticket is
//! the durable copy: one versioned JSON blob in the session store, with the
//! in-memory copy acting purely as a cache. Every read goes through a single
//! cache-then-store accessor so the two can never diverge into separate code
//! paths.

use crate::domain::recharge::{OperatorDetection, Plan};
use crate::store::Store;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Session-store key for the in-progress ticket.
pub const KEY_TICKET: &str = "recharge_ticket";

/// Session-store key for the final outcome blob read by the status page.
pub const KEY_RESULT: &str = "recharge_result";

/// Everything the user has specified about the recharge so far.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowTicket {
    pub version: u8,
    pub flow_id: String,
    pub mobile_number: String,
    pub operator_code: String,
    pub operator_id: String,
    pub operator_name: String,
    pub circle_code: String,
    pub circle_name: String,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub plan_id: Option<String>,
}

impl FlowTicket {
    pub const VERSION: u8 = 1;

    /// A fresh ticket from a successful operator detection.
    pub fn from_detection(flow_id: String, mobile_number: String, det: &OperatorDetection) -> Self {
        Self {
            version: Self::VERSION,
            flow_id,
            mobile_number,
            operator_code: det.operator_code.as_str().to_string(),
            operator_id: det.operator_id.clone(),
            operator_name: det.operator_name.clone(),
            circle_code: det.circle_code.as_str().to_string(),
            circle_name: det.circle_name.clone(),
            amount: None,
            plan_id: None,
        }
    }

    /// Both identifiers the plans endpoint needs. Partial detection state is
    /// not usable.
    pub fn has_detection(&self) -> bool {
        !self.operator_id.is_empty() && !self.circle_code.is_empty()
    }

    pub fn ready_for_checkout(&self) -> bool {
        !self.mobile_number.is_empty()
            && self.amount.map(|a| a > Decimal::ZERO).unwrap_or(false)
    }

    pub fn select_plan(&mut self, plan: &Plan) {
        self.amount = Some(plan.amount);
        self.plan_id = plan.id.clone();
    }
}

/// Cache-then-store accessor for the flow ticket.
pub struct TicketStore {
    cache: Option<FlowTicket>,
    store: Store,
}

impl TicketStore {
    pub fn new(store: Store) -> Self {
        Self { cache: None, store }
    }

    /// Current ticket, from cache if warm, else from the session store.
    /// A stored ticket with an unknown version is treated as absent.
    pub fn read(&mut self) -> Option<FlowTicket> {
        if self.cache.is_none() {
            self.cache = self
                .store
                .get_json::<FlowTicket>(KEY_TICKET)
                .filter(|t| t.version == FlowTicket::VERSION);
        }
        self.cache.clone()
    }

    /// Write-through: cache and store together, always.
    pub fn write(&mut self, ticket: FlowTicket) {
        self.store.set_json(KEY_TICKET, &ticket);
        self.cache = Some(ticket);
    }

    pub fn clear(&mut self) {
        self.cache = None;
        self.store.remove(KEY_TICKET);
    }

    /// Drop only the in-memory copy, as a fresh page mount would. The next
    /// `read` falls back to the session store.
    pub fn reset_cache(&mut self) {
        self.cache = None;
    }

    pub fn session_store(&self) -> &Store {
        &self.store
    }
}
