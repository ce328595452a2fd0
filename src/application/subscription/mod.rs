mod errors;
mod expiration_sweep;
mod subscription_service;

pub use errors::{Result, SubscriptionApplicationError};
pub use expiration_sweep::deactivate_expired_members;
pub use subscription_service::{ServiceDependencies, renew_subscription};
