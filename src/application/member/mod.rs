mod errors;
mod member_lookup;

pub use errors::{MemberApplicationError, Result};
pub use member_lookup::{MemberDependencies, get_member, is_active};
