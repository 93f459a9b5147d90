pub mod accrual_state;
pub mod token_state;

pub use accrual_state::*;
pub use token_state::*;
