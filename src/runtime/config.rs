//! Comanda configuration.
//!
//! Two behaviors differ between deployments of the order form and are
//! therefore switches rather than constants:
//!
//! - **Ticket numbering**: whether an accepted order gets a daily comanda
//!   number, for every order type, none, or only some.
//! - **Payment requirement**: whether a missing payment method rejects the
//!   order, or is filled in with a default (cash) instead.
//!
//! Values come from [`ComandaConfig::default`], a serde payload, or the
//! environment via [`ComandaConfig::from_env`].

use crate::model::{OrderType, ParseChoiceError, PaymentMethod};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use thiserror::Error;

pub const ENV_TICKET_NUMBERING: &str = "COMANDA_TICKET_NUMBERING";
pub const ENV_REQUIRE_PAYMENT: &str = "COMANDA_REQUIRE_PAYMENT";
pub const ENV_DEFAULT_PAYMENT: &str = "COMANDA_DEFAULT_PAYMENT";
pub const ENV_TIMESTAMP_FORMAT: &str = "COMANDA_TIMESTAMP_FORMAT";

/// `toLocaleString("pt-BR")` layout: `18/10/2026, 14:05:33`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Which order types receive a daily comanda number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketNumbering {
    #[default]
    Always,
    Never,
    Only(BTreeSet<OrderType>),
}

impl TicketNumbering {
    pub fn applies_to(&self, order_type: OrderType) -> bool {
        match self {
            TicketNumbering::Always => true,
            TicketNumbering::Never => false,
            TicketNumbering::Only(types) => types.contains(&order_type),
        }
    }
}

impl FromStr for TicketNumbering {
    type Err = ParseChoiceError;

    /// `always`, `never`, or a comma-separated list of order types.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(TicketNumbering::Always),
            "never" => Ok(TicketNumbering::Never),
            _ => {
                let types = s
                    .split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(OrderType::from_str)
                    .collect::<Result<BTreeSet<_>, _>>()?;
                Ok(TicketNumbering::Only(types))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComandaConfig {
    pub ticket_numbering: TicketNumbering,
    /// When false, a missing payment method falls back to `default_payment`.
    pub require_payment: bool,
    pub default_payment: PaymentMethod,
    /// chrono format string for [`OrderRecord::timestamp`](crate::model::OrderRecord::timestamp).
    pub timestamp_format: String,
}

impl Default for ComandaConfig {
    fn default() -> Self {
        Self {
            ticket_numbering: TicketNumbering::Always,
            require_payment: true,
            default_payment: PaymentMethod::Cash,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl ComandaConfig {
    /// Loads configuration from `COMANDA_*` environment variables.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_TICKET_NUMBERING) {
            config.ticket_numbering = value.parse().map_err(|e: ParseChoiceError| ConfigError::InvalidValue {
                var: ENV_TICKET_NUMBERING,
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(value) = lookup(ENV_REQUIRE_PAYMENT) {
            config.require_payment = parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
                var: ENV_REQUIRE_PAYMENT,
                value: value.clone(),
                reason: "expected true or false".to_string(),
            })?;
        }
        if let Some(value) = lookup(ENV_DEFAULT_PAYMENT) {
            config.default_payment = value.parse().map_err(|e: ParseChoiceError| ConfigError::InvalidValue {
                var: ENV_DEFAULT_PAYMENT,
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(value) = lookup(ENV_TIMESTAMP_FORMAT) {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: ENV_TIMESTAMP_FORMAT,
                    value,
                    reason: "format must not be empty".to_string(),
                });
            }
            config.timestamp_format = value;
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ComandaConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ComandaConfig::default());
        assert!(config.require_payment);
        assert_eq!(config.default_payment, PaymentMethod::Cash);
        for order_type in OrderType::ALL {
            assert!(config.ticket_numbering.applies_to(order_type));
        }
    }

    #[test]
    fn test_ticket_numbering_list() {
        let config = ComandaConfig::from_lookup(lookup(&[(ENV_TICKET_NUMBERING, "marmita, misto")])).unwrap();
        assert!(!config.ticket_numbering.applies_to(OrderType::Feijoada));
        assert!(config.ticket_numbering.applies_to(OrderType::Marmita));
        assert!(config.ticket_numbering.applies_to(OrderType::Mixed));
    }

    #[test]
    fn test_ticket_numbering_never() {
        let numbering: TicketNumbering = "Never".parse().unwrap();
        assert_eq!(numbering, TicketNumbering::Never);
        assert!(!numbering.applies_to(OrderType::Marmita));
    }

    #[test]
    fn test_payment_overrides() {
        let config = ComandaConfig::from_lookup(lookup(&[
            (ENV_REQUIRE_PAYMENT, "false"),
            (ENV_DEFAULT_PAYMENT, "pix"),
            (ENV_TIMESTAMP_FORMAT, "%Y-%m-%d %H:%M"),
        ]))
        .unwrap();
        assert!(!config.require_payment);
        assert_eq!(config.default_payment, PaymentMethod::Pix);
        assert_eq!(config.timestamp_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = ComandaConfig::from_lookup(lookup(&[(ENV_REQUIRE_PAYMENT, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: ENV_REQUIRE_PAYMENT, .. }));

        let err = ComandaConfig::from_lookup(lookup(&[(ENV_TICKET_NUMBERING, "pizza")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: ENV_TICKET_NUMBERING, .. }));
    }

    #[test]
    fn test_deserialize_partial_payload() {
        let config: ComandaConfig =
            serde_json::from_str(r#"{"ticket_numbering": "never", "require_payment": false}"#).unwrap();
        assert_eq!(config.ticket_numbering, TicketNumbering::Never);
        assert!(!config.require_payment);
        assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    }
}
