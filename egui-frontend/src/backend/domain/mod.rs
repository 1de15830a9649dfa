//! # Domain Module
//!
//! Contains all business logic for the finance control application.
//!
//! This module encapsulates the core rules that define how amounts are
//! validated, how the balance moves, and how the transaction log and
//! chart series grow. It operates independently of any UI framework.
//!
//! ## Module Organization
//!
//! - **money_management**: Amount input validation and the rejection error
//! - **balance_service**: The running balance and its sign flag
//! - **transaction_service**: The append-only log and the submit fan-out
//! - **series_service**: Per-direction chart buffers and x counters
//!
//! ## Business Rules
//!
//! - An amount is accepted only if it is a non-empty string of decimal digits
//! - Inflows add to the balance, outflows subtract; the balance may go negative
//! - Transactions are immutable, timestamped, and never removed
//! - Each accepted transaction produces exactly one chart point

pub mod balance_service;
pub mod money_management;
pub mod series_service;
pub mod transaction_service;

pub use balance_service::*;
pub use money_management::*;
pub use series_service::*;
pub use transaction_service::*;
