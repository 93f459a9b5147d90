pub mod change_monthly_unlocked;
pub mod emergency_unlock;
pub mod emit_treasury_quote;
pub mod initialize_token;
pub mod transfer_ownership;
pub mod transfer_tokens;

pub use change_monthly_unlocked::*;
pub use emergency_unlock::*;
pub use emit_treasury_quote::*;
pub use initialize_token::*;
pub use transfer_ownership::*;
pub use transfer_tokens::*;
