//! Recharge orchestration flow.
//!
//! Coordinates operator detection, plan browsing, checkout, the payment
//! gateway handoff, provider recharge execution, and status polling across
//! what are, in the host UI, three separate page loads. Cross-page state
//! lives in the [`ticket`] module; timing lives in the [`poll`] module.
//!
//! The flow talks to the world through three seams, so tests run without a
//! network or real timers:
//! - [`RechargeBackend`] — detection, plans, provider execution/status
//! - [`PaymentBackend`] — order creation and verification
//! - [`PaymentGateway`] — the host's checkout widget

pub mod poll;
pub mod ticket;

pub use poll::{FixedPoll, PollPolicy};
pub use ticket::{FlowTicket, TicketStore, KEY_RESULT, KEY_TICKET};

use crate::domain::payment::{
    CheckoutOptions, CreateOrderRequest, GatewayEvent, PaymentGateway, PaymentOrder,
    VerifyPaymentRequest, VerifyPaymentResponse,
};
use crate::domain::recharge::{
    OperatorDetection, Plan, PlanCategory, ProviderRechargeRequest, ProviderRechargeResponse,
    ProviderStatus, ProviderStatusResponse,
};
use crate::error::SdkError;
use crate::shared::{CircleCode, MobileNumber, OperatorCode};
use crate::store::Store;

use chrono::{DateTime, Utc};
use futures_timer::Delay;
use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long the plans page shows its error before redirecting back to entry
/// when detection state is missing. UI timing only; the SDK returns the
/// precondition error immediately.
pub const MISSING_DETECTION_REDIRECT: Duration = Duration::from_secs(3);

// ─── Backend seams ───────────────────────────────────────────────────────────

/// Recharge-side backend operations the flow depends on.
#[allow(async_fn_in_trait)]
pub trait RechargeBackend {
    async fn detect_operator(
        &self,
        mobile_number: &MobileNumber,
    ) -> Result<OperatorDetection, SdkError>;

    async fn plans(
        &self,
        operator_code: &OperatorCode,
        operator_id: &str,
        circle_code: &CircleCode,
        category: PlanCategory,
    ) -> Result<Vec<Plan>, SdkError>;

    async fn provider_recharge(
        &self,
        request: &ProviderRechargeRequest,
    ) -> Result<ProviderRechargeResponse, SdkError>;

    async fn provider_status(&self, order_id: &str) -> Result<ProviderStatusResponse, SdkError>;
}

/// Payment-side backend operations the flow depends on.
#[allow(async_fn_in_trait)]
pub trait PaymentBackend {
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<PaymentOrder, SdkError>;

    async fn verify(
        &self,
        request: &VerifyPaymentRequest,
    ) -> Result<VerifyPaymentResponse, SdkError>;
}

// ─── Outcome types ───────────────────────────────────────────────────────────

/// Terminal status of a recharge attempt.
///
/// TIMEOUT is deliberately distinct from FAILED: the provider may still
/// complete the recharge later, so the user is told to check history rather
/// than assume the money is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeStatus {
    Pending,
    Success,
    Failed,
    Timeout,
}

/// What the status page renders. Written to the session store under
/// [`KEY_RESULT`] before navigation, since the status page is reached by a
/// full route change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RechargeOutcome {
    pub status: OutcomeStatus,
    #[serde(default)]
    pub provider_order_id: Option<String>,
    #[serde(default)]
    pub operator_ref: Option<String>,
    pub amount: Decimal,
    pub mobile_number: String,
    pub timestamp: DateTime<Utc>,
}

/// Where checkout routes the user once a clean outcome exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRoute {
    Success,
    Pending,
    Failed,
}

impl StatusRoute {
    pub fn as_query(&self) -> &'static str {
        match self {
            StatusRoute::Success => "success",
            StatusRoute::Pending => "pending",
            StatusRoute::Failed => "failed",
        }
    }

    pub fn path(&self) -> String {
        format!("/recharge/status?status={}", self.as_query())
    }
}

/// Result of a checkout attempt that did not error.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// The user closed the widget without paying. No state changed; the
    /// checkout page stays as it was.
    Dismissed,
    /// The attempt ran to a clean end; navigate to the status page.
    Routed {
        route: StatusRoute,
        outcome: RechargeOutcome,
    },
}

// ─── The flow ────────────────────────────────────────────────────────────────

/// Multi-page recharge orchestration.
///
/// One instance per browser tab in a real host; tests construct one per
/// scenario with mock seams.
pub struct RechargeFlow<B: RechargeBackend, P: PaymentBackend> {
    backend: B,
    payments: P,
    tickets: TicketStore,
    plans: Vec<Plan>,
    poll: Box<dyn PollPolicy>,
}

impl<B: RechargeBackend, P: PaymentBackend> RechargeFlow<B, P> {
    pub fn new(backend: B, payments: P, session_store: Store, poll: Box<dyn PollPolicy>) -> Self {
        Self {
            backend,
            payments,
            tickets: TicketStore::new(session_store),
            plans: Vec::new(),
            poll,
        }
    }

    /// Current ticket via the cache-then-store accessor.
    pub fn ticket(&mut self) -> Option<FlowTicket> {
        self.tickets.read()
    }

    /// Simulate what a fresh page mount does to in-memory state: the cache is
    /// gone, the session store survives.
    pub fn reset_in_memory(&mut self) {
        self.tickets.reset_cache();
        self.plans.clear();
    }

    /// Plans currently on display (the last successful fetch).
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    // ── Entry → Detecting → Detected ─────────────────────────────────────

    /// Validate the mobile number and detect its operator and circle.
    ///
    /// Success starts a fresh ticket (and discards any previous outcome);
    /// failure mutates nothing, so the entry page keeps its state.
    pub async fn detect_operator(&mut self, mobile: &str) -> Result<OperatorDetection, SdkError> {
        let mobile = MobileNumber::parse(mobile)?;
        let detection = self.backend.detect_operator(&mobile).await?;

        self.tickets.session_store().remove(KEY_RESULT);
        let ticket = FlowTicket::from_detection(
            new_correlation_id(),
            mobile.as_str().to_string(),
            &detection,
        );
        tracing::debug!(
            flow_id = %ticket.flow_id,
            operator = %detection.operator_code,
            circle = %detection.circle_code,
            "operator detected"
        );
        self.tickets.write(ticket);
        Ok(detection)
    }

    // ── Browsing plans ───────────────────────────────────────────────────

    /// Fetch the plan catalog for one category.
    ///
    /// Precondition: a ticket with operator id + circle code, read through
    /// the fallback accessor. Without it the plans page must not call the
    /// backend at all; the host shows the error and redirects to entry after
    /// [`MISSING_DETECTION_REDIRECT`].
    ///
    /// A fetch failure leaves the previously displayed plans untouched.
    pub async fn load_plans(&mut self, category: PlanCategory) -> Result<&[Plan], SdkError> {
        let ticket = self
            .tickets
            .read()
            .filter(FlowTicket::has_detection)
            .ok_or_else(|| {
                SdkError::Precondition(
                    "no detected operator for this session, returning to recharge entry"
                        .to_string(),
                )
            })?;

        let plans = self
            .backend
            .plans(
                &OperatorCode::from(ticket.operator_code.clone()),
                &ticket.operator_id,
                &CircleCode::from(ticket.circle_code.clone()),
                category,
            )
            .await?;
        self.plans = plans;
        Ok(&self.plans)
    }

    /// Capture a browsed plan's amount into the ticket.
    pub fn select_plan(&mut self, plan: &Plan) -> Result<(), SdkError> {
        if plan.amount <= Decimal::ZERO {
            return Err(SdkError::Validation(
                "plan amount must be greater than zero".to_string(),
            ));
        }
        let mut ticket = self.tickets.read().ok_or_else(|| {
            SdkError::Precondition("no recharge in progress".to_string())
        })?;
        ticket.select_plan(plan);
        self.tickets.write(ticket);
        Ok(())
    }

    /// Capture a custom amount into the ticket.
    pub fn set_amount(&mut self, amount: Decimal) -> Result<(), SdkError> {
        if amount <= Decimal::ZERO {
            return Err(SdkError::Validation(
                "please enter an amount greater than zero".to_string(),
            ));
        }
        let mut ticket = self.tickets.read().ok_or_else(|| {
            SdkError::Precondition("no recharge in progress".to_string())
        })?;
        ticket.amount = Some(amount);
        ticket.plan_id = None;
        self.tickets.write(ticket);
        Ok(())
    }

    // ── Checkout ─────────────────────────────────────────────────────────

    /// Run the pay action: order creation, gateway handoff, verification,
    /// provider recharge, outcome persistence, final routing.
    ///
    /// Errors before the gateway reports success are retry-friendly; the
    /// checkout page stays put. From verification onward every failure maps
    /// to [`SdkError::PaymentCaptured`] carrying the gateway payment id, and
    /// nothing is retried automatically.
    pub async fn checkout<G: PaymentGateway>(
        &mut self,
        gateway: &G,
        terms_accepted: bool,
    ) -> Result<CheckoutOutcome, SdkError> {
        if !terms_accepted {
            return Err(SdkError::Validation(
                "please accept the terms and conditions to continue".to_string(),
            ));
        }

        let ticket = self.tickets.read().ok_or_else(|| {
            SdkError::Precondition("no recharge in progress".to_string())
        })?;
        if !ticket.ready_for_checkout() {
            return Err(SdkError::Validation(
                "mobile number and amount are required before payment".to_string(),
            ));
        }
        let amount = ticket.amount.unwrap_or_default();

        let order = self
            .payments
            .create_order(&CreateOrderRequest {
                amount: to_minor_units(amount)?,
                currency: "INR".to_string(),
                receipt: Some(ticket.flow_id.clone()),
            })
            .await?;

        let event = gateway
            .open(&CheckoutOptions::for_order(&order, &ticket.mobile_number))
            .await?;
        let payment = match event {
            GatewayEvent::Dismissed => return Ok(CheckoutOutcome::Dismissed),
            GatewayEvent::Completed(payment) => payment,
        };

        // Money has moved. Every failure from here carries the payment id.
        let verification = self
            .payments
            .verify(&VerifyPaymentRequest {
                razorpay_order_id: payment.order_id.clone(),
                razorpay_payment_id: payment.payment_id.clone(),
                razorpay_signature: payment.signature.clone(),
            })
            .await
            .map_err(|e| SdkError::PaymentCaptured {
                payment_id: payment.payment_id.clone(),
                message: e.to_string(),
            })?;
        if !verification.verified {
            return Err(SdkError::PaymentCaptured {
                payment_id: payment.payment_id.clone(),
                message: verification
                    .message
                    .unwrap_or_else(|| "payment verification failed".to_string()),
            });
        }

        let outcome = self
            .complete_recharge(
                &ticket.mobile_number,
                &OperatorCode::from(ticket.operator_code.clone()),
                &CircleCode::from(ticket.circle_code.clone()),
                amount,
            )
            .await
            .map_err(|e| SdkError::PaymentCaptured {
                payment_id: payment.payment_id.clone(),
                message: e.to_string(),
            })?;

        self.tickets
            .session_store()
            .set_json(KEY_RESULT, &outcome);

        let route = match outcome.status {
            OutcomeStatus::Success => StatusRoute::Success,
            OutcomeStatus::Timeout => StatusRoute::Pending,
            _ => StatusRoute::Failed,
        };
        tracing::info!(route = route.as_query(), "checkout finished");
        Ok(CheckoutOutcome::Routed { route, outcome })
    }

    // ── Provider execution + confirmation polling ────────────────────────

    /// Execute the provider recharge once, then poll for confirmation.
    ///
    /// The recharge call is never retried: the provider endpoint is not
    /// guaranteed idempotent for a failed-but-actually-submitted recharge.
    /// Polling is bounded by the injected [`PollPolicy`]; exhausting it with
    /// the order still PENDING yields a TIMEOUT outcome, not an error.
    pub async fn complete_recharge(
        &self,
        mobile_number: &str,
        operator_code: &OperatorCode,
        circle_code: &CircleCode,
        amount: Decimal,
    ) -> Result<RechargeOutcome, SdkError> {
        let order_id = new_correlation_id();
        tracing::info!(%order_id, %operator_code, "submitting provider recharge");

        let ack = self
            .backend
            .provider_recharge(&ProviderRechargeRequest {
                order_id: order_id.clone(),
                mobile_number: mobile_number.to_string(),
                operator_code: operator_code.clone(),
                circle_code: circle_code.clone(),
                amount,
            })
            .await?;

        let outcome = |status: OutcomeStatus,
                       provider_order_id: Option<String>,
                       operator_ref: Option<String>| RechargeOutcome {
            status,
            provider_order_id: provider_order_id
                .or_else(|| ack.provider_order_id.clone())
                .or_else(|| Some(order_id.clone())),
            operator_ref: operator_ref.or_else(|| ack.operator_ref.clone()),
            amount,
            mobile_number: mobile_number.to_string(),
            timestamp: Utc::now(),
        };

        Delay::new(self.poll.initial_delay()).await;

        let mut attempt = 0u32;
        loop {
            attempt += 1;
            let status = self.backend.provider_status(&order_id).await?;
            tracing::debug!(%order_id, attempt, status = %status.status, "provider status");

            match status.status {
                ProviderStatus::Success => {
                    return Ok(outcome(
                        OutcomeStatus::Success,
                        status.provider_order_id,
                        status.operator_ref,
                    ));
                }
                ProviderStatus::Failed => {
                    return Ok(outcome(
                        OutcomeStatus::Failed,
                        status.provider_order_id,
                        status.operator_ref,
                    ));
                }
                ProviderStatus::Pending => match self.poll.next_delay(attempt) {
                    Some(delay) => Delay::new(delay).await,
                    None => {
                        tracing::warn!(%order_id, attempt, "polling exhausted, reporting timeout");
                        return Ok(outcome(
                            OutcomeStatus::Timeout,
                            status.provider_order_id,
                            status.operator_ref,
                        ));
                    }
                },
            }
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Correlation id: epoch millis + zero-padded random 6-digit suffix.
/// Collision probability is treated as negligible, not guaranteed.
fn new_correlation_id() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{}{:06}", Utc::now().timestamp_millis(), suffix)
}

/// Rupees to paise for the payment order.
fn to_minor_units(amount: Decimal) -> Result<u64, SdkError> {
    (amount * Decimal::from(100))
        .round()
        .to_u64()
        .ok_or_else(|| SdkError::Validation("amount out of range".to_string()))
}
