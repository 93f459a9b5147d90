pub mod access;
pub mod accrual;
pub mod gate;
