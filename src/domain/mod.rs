pub mod commands;
pub mod errors;
pub mod events;
pub mod member;
pub mod value_objects;

pub use errors::*;
pub use events::*;
pub use member::Member;
pub use value_objects::*;
