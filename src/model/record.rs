use crate::model::{FeijoadaSelection, MarmitaSelection, OrderType, PaymentMethod};
use serde::Serialize;

/// What was ordered, shaped by the order type.
///
/// Each variant carries only the lists its order type uses. Every selection
/// of a list is kept, even one with nothing picked, so the printed ticket
/// numbers dishes the same way the form did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OrderDetails {
    #[serde(rename_all = "camelCase")]
    Feijoada {
        feijoada_selections: Vec<FeijoadaSelection>,
        observation: String,
    },
    #[serde(rename_all = "camelCase")]
    Marmita {
        marmita_selections: Vec<MarmitaSelection>,
        observation: String,
    },
    #[serde(rename_all = "camelCase")]
    Mixed {
        marmita_selections: Vec<MarmitaSelection>,
        feijoada_selections: Vec<FeijoadaSelection>,
        observation: String,
    },
}

impl OrderDetails {
    pub fn order_type(&self) -> OrderType {
        match self {
            OrderDetails::Feijoada { .. } => OrderType::Feijoada,
            OrderDetails::Marmita { .. } => OrderType::Marmita,
            OrderDetails::Mixed { .. } => OrderType::Mixed,
        }
    }

    pub fn marmita_selections(&self) -> &[MarmitaSelection] {
        match self {
            OrderDetails::Marmita { marmita_selections, .. }
            | OrderDetails::Mixed { marmita_selections, .. } => marmita_selections,
            OrderDetails::Feijoada { .. } => &[],
        }
    }

    pub fn feijoada_selections(&self) -> &[FeijoadaSelection] {
        match self {
            OrderDetails::Feijoada { feijoada_selections, .. }
            | OrderDetails::Mixed { feijoada_selections, .. } => feijoada_selections,
            OrderDetails::Marmita { .. } => &[],
        }
    }

    pub fn observation(&self) -> &str {
        match self {
            OrderDetails::Feijoada { observation, .. }
            | OrderDetails::Marmita { observation, .. }
            | OrderDetails::Mixed { observation, .. } => observation,
        }
    }
}

/// An accepted order, ready to be shown and printed as a comanda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub client: String,
    pub payment: PaymentMethod,
    pub order_type: OrderType,
    /// Local time of submission, already formatted for display.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_sequence_number: Option<u64>,
    pub details: OrderDetails,
}

impl OrderRecord {
    /// Ticket header, e.g. `Comanda 007`. `None` for unnumbered orders.
    pub fn ticket_label(&self) -> Option<String> {
        self.daily_sequence_number
            .map(|number| format!("Comanda {:03}", number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DishSize;
    use serde_json::json;

    fn record(number: Option<u64>) -> OrderRecord {
        OrderRecord {
            client: "Maria".to_string(),
            payment: PaymentMethod::Pix,
            order_type: OrderType::Marmita,
            timestamp: "18/10/2026, 12:30:00".to_string(),
            daily_sequence_number: number,
            details: OrderDetails::Marmita {
                marmita_selections: vec![MarmitaSelection {
                    size: Some(DishSize::P),
                    ..Default::default()
                }],
                observation: String::new(),
            },
        }
    }

    #[test]
    fn test_ticket_label_pads_to_three_digits() {
        assert_eq!(record(Some(7)).ticket_label().as_deref(), Some("Comanda 007"));
        assert_eq!(record(Some(1234)).ticket_label().as_deref(), Some("Comanda 1234"));
        assert_eq!(record(None).ticket_label(), None);
    }

    #[test]
    fn test_unnumbered_record_omits_sequence_number() {
        let value = serde_json::to_value(record(None)).unwrap();
        assert_eq!(
            value,
            json!({
                "client": "Maria",
                "payment": "pix",
                "orderType": "Marmita",
                "timestamp": "18/10/2026, 12:30:00",
                "details": {
                    "marmitaSelections": [{"size": "P"}],
                    "observation": ""
                }
            })
        );
    }

    #[test]
    fn test_mixed_details_keep_empty_selections() {
        let details = OrderDetails::Mixed {
            marmita_selections: vec![MarmitaSelection::default(), MarmitaSelection::default()],
            feijoada_selections: vec![FeijoadaSelection::default()],
            observation: "sem cebola".to_string(),
        };
        assert_eq!(details.order_type(), OrderType::Mixed);
        assert_eq!(details.marmita_selections().len(), 2);
        assert_eq!(details.feijoada_selections().len(), 1);
        assert_eq!(details.observation(), "sem cebola");

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(
            value,
            json!({
                "marmitaSelections": [{}, {}],
                "feijoadaSelections": [{}],
                "observation": "sem cebola"
            })
        );
    }
}
