use crate::domain::value_objects::{MemberId, Money};
use crate::ports::payment_verifier::{PaymentVerifier as PaymentVerifierTrait, Result};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Mock implementation of PaymentVerifier
///
/// Approves either every payment or only the (member, amount) pairs
/// registered with `approve`. No gateway is contacted.
pub struct PaymentVerifier {
    approve_all: bool,
    approved_payments: Mutex<HashSet<(MemberId, Money)>>,
}

impl PaymentVerifier {
    /// Verifier that accepts every payment
    pub fn approve_all() -> Self {
        Self {
            approve_all: true,
            approved_payments: Mutex::new(HashSet::new()),
        }
    }

    /// Verifier that declines everything not registered with `approve`
    pub fn decline_all() -> Self {
        Self {
            approve_all: false,
            approved_payments: Mutex::new(HashSet::new()),
        }
    }

    /// Register a payment that should be accepted
    pub fn approve(&self, member_id: MemberId, amount: Money) {
        self.approved().insert((member_id, amount));
    }

    fn approved(&self) -> MutexGuard<'_, HashSet<(MemberId, Money)>> {
        self.approved_payments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PaymentVerifier {
    fn default() -> Self {
        Self::decline_all()
    }
}

impl PaymentVerifierTrait for PaymentVerifier {
    fn verify_payment(&self, member_id: MemberId, amount: Money) -> Result<bool> {
        if self.approve_all {
            return Ok(true);
        }
        Ok(self.approved().contains(&(member_id, amount)))
    }
}
