pub mod role_toggle;

pub use role_toggle::*;
