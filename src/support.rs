//! Supporting utilities used by equipment models.

pub mod psychrometrics;
pub mod regression;
pub mod units;
