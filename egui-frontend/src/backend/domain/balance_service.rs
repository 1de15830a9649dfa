//! Balance tracking domain logic for the finance control app.

use shared::TransactionDirection;

/// Running account balance with its sign-derived presentation flag.
///
/// The balance has no bounds; spending more than was added simply takes
/// it negative.
#[derive(Debug, Clone, Default)]
pub struct BalanceService {
    balance: f64,
}

impl BalanceService {
    pub fn new() -> Self {
        Self { balance: 0.0 }
    }

    /// Apply an accepted amount to the balance and return the new total.
    ///
    /// Inflow adds the amount, outflow subtracts it. The amount is already
    /// validated by the caller, so nothing here can fail.
    pub fn apply(&mut self, amount: f64, direction: TransactionDirection) -> f64 {
        match direction {
            TransactionDirection::Inflow => self.balance += amount,
            TransactionDirection::Outflow => self.balance -= amount,
        }
        self.balance
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// True when the balance is below zero; drives the red balance text.
    pub fn is_negative(&self) -> bool {
        self.balance < 0.0
    }
}
