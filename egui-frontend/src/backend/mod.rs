//! # Backend Module
//!
//! Contains all non-UI logic for the finance control application.
//!
//! The backend is designed to be UI-agnostic: the egui layer renders from
//! its accessors every frame and feeds it user actions, but the business
//! rules would work unchanged behind any other frontend.

pub mod domain;

use anyhow::Result;
use log::info;

pub use domain::*;

/// Main application state that holds all services
pub struct Backend {
    pub transaction_service: TransactionService,
}

impl Backend {
    /// Initialize the backend with all required services
    pub fn new() -> Result<Backend> {
        info!("Setting up domain model");
        let money_management = MoneyManagementService::new();
        let transaction_service = TransactionService::new(money_management);

        Ok(Backend {
            transaction_service,
        })
    }
}
