pub mod bridge_request;
pub mod bridge_tokens;
pub mod close_request;
pub mod initialize;
pub mod validator_set_change;

pub use bridge_request::*;
pub use bridge_tokens::*;
pub use close_request::*;
pub use initialize::*;
pub use validator_set_change::*;
