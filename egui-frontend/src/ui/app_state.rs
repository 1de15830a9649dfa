//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the finance control app.
//!
//! ## Key Types:
//! - `FinanceControlApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize a new app instance with its backend
//! - `submit_amount()` - Submit the amount field in a given direction
//!
//! ## State Management:
//! The FinanceControlApp struct holds the backend (business state) and the
//! form state in a single location. The UI components read from the
//! backend's accessors every frame instead of owning any mutable business
//! fields themselves.

use log::info;
use shared::{CurrencyFormatter, TrackerConfig, TransactionDirection};

use crate::backend::Backend;

/// Main application struct for the egui finance tracker
pub struct FinanceControlApp {
    pub backend: Backend,

    // Presentation helpers
    pub config: TrackerConfig,
    pub formatter: CurrencyFormatter,

    // Form state
    pub amount_input: String,
    pub focus_amount_input: bool,
}

impl FinanceControlApp {
    /// Create a new FinanceControlApp with default values
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: TrackerConfig,
    ) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing FinanceControlApp");

        // Apply the dark tracker theme once at startup
        crate::ui::components::styling::setup_tracker_style(&cc.egui_ctx);

        let backend = Backend::new()?;
        Ok(Self::from_parts(backend, config))
    }

    fn from_parts(backend: Backend, config: TrackerConfig) -> Self {
        let formatter = config.formatter();
        Self {
            backend,
            config,
            formatter,
            amount_input: String::new(),
            focus_amount_input: true,
        }
    }

    /// Submit the current contents of the amount field.
    ///
    /// The field is cleared whether the input was accepted or rejected,
    /// and keyboard focus returns to it.
    pub fn submit_amount(&mut self, direction: TransactionDirection) {
        match self
            .backend
            .transaction_service
            .submit(&self.amount_input, direction)
        {
            Ok(transaction) => {
                info!(
                    "✅ Recorded {}: {}",
                    transaction.direction,
                    self.formatter.format(transaction.amount)
                );
            }
            Err(rejected) => {
                log::debug!("🚫 Input rejected: {}", rejected);
            }
        }

        self.amount_input.clear();
        self.focus_amount_input = true;
    }

    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        let backend = Backend::new().expect("backend setup cannot fail");
        Self::from_parts(backend, TrackerConfig::default())
    }
}
