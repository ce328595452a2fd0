pub mod member_store;
pub mod notifier;
pub mod payment_verifier;

pub use member_store::MemberStore;
pub use notifier::{Notifier, SentNotification};
pub use payment_verifier::PaymentVerifier;
