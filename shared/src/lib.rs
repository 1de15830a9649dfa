use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction ID in format: "transaction::<inflow|outflow>::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Seconds since the Unix epoch, shown in the transaction table
    pub timestamp: i64,
    /// Transaction amount (always positive; the direction carries the sign)
    pub amount: f64,
    /// Direction of the money flow, for balance math and rendering
    pub direction: TransactionDirection,
}

/// Direction of a money flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionDirection {
    /// Money added to the balance (the "+" button)
    Inflow,
    /// Money taken out of the balance (the "−" button)
    Outflow,
}

impl TransactionDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionDirection::Inflow => "inflow",
            TransactionDirection::Outflow => "outflow",
        }
    }
}

impl fmt::Display for TransactionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single point on one of the flow charts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: i64,
    pub y: f64,
}

/// Configuration for the tracker window and currency display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub currency_symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            thousands_separator: ',',
            decimal_separator: '.',
            window_title: "My Financial Control".to_string(),
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl TrackerConfig {
    /// Build the currency formatter described by this configuration
    pub fn formatter(&self) -> CurrencyFormatter {
        CurrencyFormatter::new(
            self.currency_symbol.clone(),
            self.thousands_separator,
            self.decimal_separator,
        )
    }
}

/// Explicit currency formatting, decoupled from the system locale.
///
/// Takes a numeric amount and returns a display string with thousands
/// separators and two decimal places, e.g. `-$1,234.56`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormatter {
    symbol: String,
    thousands_separator: char,
    decimal_separator: char,
}

impl CurrencyFormatter {
    pub fn new(symbol: String, thousands_separator: char, decimal_separator: char) -> Self {
        Self {
            symbol,
            thousands_separator,
            decimal_separator,
        }
    }

    /// Format an amount for display
    pub fn format(&self, amount: f64) -> String {
        // Work in rounded cents so that 0.005-style inputs don't produce
        // "-$0.00" or a mismatched whole part.
        let cents = (amount.abs() * 100.0).round() as u64;
        let negative = amount < 0.0 && cents > 0;
        let whole = cents / 100;
        let fraction = cents % 100;

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(ch);
        }

        format!(
            "{}{}{}{}{:02}",
            if negative { "-" } else { "" },
            self.symbol,
            grouped,
            self.decimal_separator,
            fraction
        )
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        TrackerConfig::default().formatter()
    }
}

impl Transaction {
    /// Generate a transaction ID from the direction and a millisecond timestamp
    pub fn generate_id(direction: TransactionDirection, epoch_millis: i64) -> String {
        format!("transaction::{}::{}", direction.as_str(), epoch_millis)
    }

    /// Parse a transaction ID to extract its components
    pub fn parse_id(id: &str) -> Result<(TransactionDirection, i64), TransactionIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 3 || parts[0] != "transaction" {
            return Err(TransactionIdError::InvalidFormat);
        }

        let direction = match parts[1] {
            "inflow" => TransactionDirection::Inflow,
            "outflow" => TransactionDirection::Outflow,
            _ => return Err(TransactionIdError::InvalidDirection),
        };

        let epoch_millis = parts[2]
            .parse::<i64>()
            .map_err(|_| TransactionIdError::InvalidTimestamp)?;

        Ok((direction, epoch_millis))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransactionIdError {
    InvalidFormat,
    InvalidDirection,
    InvalidTimestamp,
}

impl fmt::Display for TransactionIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionIdError::InvalidFormat => write!(f, "Invalid transaction ID format"),
            TransactionIdError::InvalidDirection => write!(f, "Invalid direction in transaction ID"),
            TransactionIdError::InvalidTimestamp => write!(f, "Invalid timestamp in transaction ID"),
        }
    }
}

impl std::error::Error for TransactionIdError {}
