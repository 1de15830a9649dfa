//! Transaction service domain logic for the finance control app.
use crate::backend::domain::{
    balance_service::BalanceService,
    money_management::{MoneyManagementService, RejectedInput},
    series_service::SeriesService,
};
use log::{debug, info};
use shared::{Transaction, TransactionDirection};

/// Orchestrates a submitted amount across the balance, the append-only
/// transaction log, and the chart series.
#[derive(Debug, Clone)]
pub struct TransactionService {
    money_management: MoneyManagementService,
    balance_service: BalanceService,
    series_service: SeriesService,
    transactions: Vec<Transaction>,
}

impl TransactionService {
    pub fn new(money_management: MoneyManagementService) -> Self {
        Self {
            money_management,
            balance_service: BalanceService::new(),
            series_service: SeriesService::new(),
            transactions: Vec::new(),
        }
    }

    /// Validate a submitted amount string and fan the accepted value out
    /// to the balance, the log, and the matching chart series.
    ///
    /// On rejection nothing changes; the caller clears the input field.
    /// Every step after validation is local and infallible, so there is
    /// no partial-failure state to recover from.
    pub fn submit(
        &mut self,
        raw_text: &str,
        direction: TransactionDirection,
    ) -> Result<Transaction, RejectedInput> {
        let amount = match self.money_management.validate_amount(raw_text) {
            Ok(amount) => amount,
            Err(rejected) => {
                debug!("Rejected amount input {:?}: {}", raw_text, rejected);
                return Err(rejected);
            }
        };

        let now_millis = chrono::Utc::now().timestamp_millis();
        let transaction = Transaction {
            id: Transaction::generate_id(direction, now_millis),
            timestamp: now_millis / 1000,
            amount,
            direction,
        };

        let new_balance = self.balance_service.apply(amount, direction);
        let position = self.append(transaction.clone());
        let point = self.series_service.append(amount, direction);

        info!(
            "Recorded {} of {:.2} at position {} (balance {:.2}, point ({}, {:.2}))",
            direction, amount, position, new_balance, point.x, point.y
        );

        Ok(transaction)
    }

    /// Append a transaction to the log and return its position.
    ///
    /// The log is strictly append-only; there is no removal operation.
    pub fn append(&mut self, transaction: Transaction) -> usize {
        self.transactions.push(transaction);
        self.transactions.len() - 1
    }

    /// All recorded transactions, in submission order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn balance(&self) -> f64 {
        self.balance_service.balance()
    }

    pub fn balance_is_negative(&self) -> bool {
        self.balance_service.is_negative()
    }

    pub fn series(&self) -> &SeriesService {
        &self.series_service
    }
}

impl Default for TransactionService {
    fn default() -> Self {
        Self::new(MoneyManagementService::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> TransactionService {
        TransactionService::default()
    }

    #[test]
    fn test_submit_inflow_updates_balance_log_and_series() {
        let mut service = create_test_service();

        let transaction = service
            .submit("100", TransactionDirection::Inflow)
            .unwrap();

        assert_eq!(transaction.amount, 100.0);
        assert_eq!(transaction.direction, TransactionDirection::Inflow);
        assert_eq!(service.balance(), 100.0);
        assert_eq!(service.transactions().len(), 1);
        assert_eq!(service.transactions()[0], transaction);

        let inflow = service.series().inflow().points();
        assert_eq!(inflow.len(), 1);
        assert_eq!((inflow[0].x, inflow[0].y), (0, 100.0));
    }

    #[test]
    fn test_submit_outflow_after_inflow() {
        let mut service = create_test_service();

        service.submit("100", TransactionDirection::Inflow).unwrap();
        service.submit("30", TransactionDirection::Outflow).unwrap();

        assert_eq!(service.balance(), 70.0);
        assert!(!service.balance_is_negative());

        // The outflow series starts at x=0, independent of the inflow series
        let outflow = service.series().outflow().points();
        assert_eq!(outflow.len(), 1);
        assert_eq!((outflow[0].x, outflow[0].y), (0, 30.0));
    }

    #[test]
    fn test_submit_rejected_leaves_state_unchanged() {
        let mut service = create_test_service();
        service.submit("50", TransactionDirection::Inflow).unwrap();

        for raw in ["", "12.5", "-5", "abc"] {
            let result = service.submit(raw, TransactionDirection::Inflow);
            assert!(result.is_err(), "{raw:?} should be rejected");
        }

        assert_eq!(service.balance(), 50.0);
        assert_eq!(service.transactions().len(), 1);
        assert_eq!(service.series().inflow().len(), 1);
        assert!(service.series().outflow().is_empty());
    }

    #[test]
    fn test_log_preserves_submission_order() {
        let mut service = create_test_service();

        service.submit("1", TransactionDirection::Inflow).unwrap();
        service.submit("2", TransactionDirection::Outflow).unwrap();
        service.submit("3", TransactionDirection::Inflow).unwrap();

        let amounts: Vec<f64> = service.transactions().iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_balance_goes_negative_on_large_outflow() {
        let mut service = create_test_service();

        service.submit("10", TransactionDirection::Inflow).unwrap();
        service.submit("25", TransactionDirection::Outflow).unwrap();

        assert_eq!(service.balance(), -15.0);
        assert!(service.balance_is_negative());
    }

    #[test]
    fn test_transaction_ids_parse_back() {
        let mut service = create_test_service();

        let transaction = service.submit("42", TransactionDirection::Outflow).unwrap();
        let (direction, millis) = Transaction::parse_id(&transaction.id).unwrap();

        assert_eq!(direction, TransactionDirection::Outflow);
        assert_eq!(millis / 1000, transaction.timestamp);
    }
}
