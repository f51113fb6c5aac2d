//! The order form session.
//!
//! An [`OrderDraft`] accumulates what staff pick on the form and turns into
//! an immutable [`OrderRecord`] on [`OrderDraft::submit`]. Edits never fail:
//! an edit aimed at a selection that does not exist is a no-op and reports
//! `false`.

pub mod error;
pub mod selections;

pub use error::*;
pub use selections::*;

use crate::counter::{KeyValueStore, SequenceCounter};
use crate::model::{
    BeanType, Cutlery, DishSize, FeijoadaPortion, FeijoadaSelection, FeijoadaSlot, FeijoadaType,
    MarmitaSelection, OrderDetails, OrderRecord, OrderType, ParseChoiceError, Pasta, PaymentMethod,
    Protein, SideDish,
};
use crate::runtime::{ComandaConfig, DEFAULT_TIMESTAMP_FORMAT};
use chrono::{DateTime, Local};
use std::collections::BTreeSet;
use std::fmt::Write;
use tracing::{debug, info, warn};

/// One editable field of a [`MarmitaSelection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarmitaField {
    Size(Option<DishSize>),
    Protein(Option<Protein>),
    BeanType(Option<BeanType>),
    Pasta(Option<Pasta>),
    SideDishes(BTreeSet<SideDish>),
    Cutlery(Option<Cutlery>),
}

impl MarmitaField {
    fn apply(self, marmita: &mut MarmitaSelection) {
        match self {
            MarmitaField::Size(v) => marmita.size = v,
            MarmitaField::Protein(v) => marmita.protein = v,
            MarmitaField::BeanType(v) => marmita.bean_type = v,
            MarmitaField::Pasta(v) => marmita.pasta = v,
            MarmitaField::SideDishes(v) => marmita.side_dishes = v,
            MarmitaField::Cutlery(v) => marmita.cutlery = v,
        }
    }
}

/// One editable field of a [`FeijoadaSelection`].
///
/// `Portion` replaces the whole kit/plate/side-only choice, so picking one
/// of the three always clears the other two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeijoadaField {
    Type(Option<FeijoadaType>),
    Portion(Option<FeijoadaPortion>),
}

impl FeijoadaField {
    fn apply(self, feijoada: &mut FeijoadaSelection) {
        match self {
            FeijoadaField::Type(v) => feijoada.feijoada_type = v,
            FeijoadaField::Portion(v) => feijoada.portion = v,
        }
    }
}

/// Mutable state of one order form session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    client_name: String,
    payment_method: Option<PaymentMethod>,
    order_type: OrderType,
    marmitas: Selections<MarmitaSelection>,
    feijoadas: Selections<FeijoadaSelection>,
    observation: String,
}

impl OrderDraft {
    /// A blank form: feijoada order, one empty selection per list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the form for the next order.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // --- General fields ---

    pub fn set_client_name(&mut self, name: impl Into<String>) {
        self.client_name = name.into();
    }

    pub fn set_payment_method(&mut self, method: Option<PaymentMethod>) {
        self.payment_method = method;
    }

    pub fn set_order_type(&mut self, order_type: OrderType) {
        self.order_type = order_type;
    }

    pub fn set_observation(&mut self, observation: impl Into<String>) {
        self.observation = observation.into();
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn observation(&self) -> &str {
        &self.observation
    }

    pub fn marmitas(&self) -> &Selections<MarmitaSelection> {
        &self.marmitas
    }

    pub fn feijoadas(&self) -> &Selections<FeijoadaSelection> {
        &self.feijoadas
    }

    // --- Marmita selections ---

    pub fn update_marmita_field(&mut self, index: usize, field: MarmitaField) -> bool {
        match self.marmitas.get_mut(index) {
            Some(marmita) => {
                field.apply(marmita);
                true
            }
            None => false,
        }
    }

    pub fn update_active_marmita(&mut self, field: MarmitaField) -> bool {
        self.update_marmita_field(self.marmitas.active_index(), field)
    }

    /// Adds `dish` to the marmita's side dishes, or removes it if present.
    pub fn toggle_side_dish(&mut self, index: usize, dish: SideDish) -> bool {
        match self.marmitas.get_mut(index) {
            Some(marmita) => {
                if !marmita.side_dishes.remove(&dish) {
                    marmita.side_dishes.insert(dish);
                }
                true
            }
            None => false,
        }
    }

    pub fn add_marmita_selection(&mut self) -> usize {
        self.marmitas.add()
    }

    pub fn remove_marmita_selection(&mut self, index: usize) -> bool {
        self.marmitas.remove(index)
    }

    pub fn select_marmita(&mut self, index: usize) -> bool {
        self.marmitas.select(index)
    }

    // --- Feijoada selections ---

    pub fn update_feijoada_field(&mut self, index: usize, field: FeijoadaField) -> bool {
        match self.feijoadas.get_mut(index) {
            Some(feijoada) => {
                field.apply(feijoada);
                true
            }
            None => false,
        }
    }

    pub fn update_active_feijoada(&mut self, field: FeijoadaField) -> bool {
        self.update_feijoada_field(self.feijoadas.active_index(), field)
    }

    /// Sets one of the kit/plate/side-only slots from a widget value.
    ///
    /// Any value, including the empty one, replaces the current portion, so
    /// the other two slots always end up empty.
    pub fn set_feijoada_slot(
        &mut self,
        index: usize,
        slot: FeijoadaSlot,
        value: &str,
    ) -> Result<bool, ParseChoiceError> {
        let portion = FeijoadaPortion::from_slot(slot, value)?;
        Ok(self.update_feijoada_field(index, FeijoadaField::Portion(portion)))
    }

    pub fn add_feijoada_selection(&mut self) -> usize {
        self.feijoadas.add()
    }

    pub fn remove_feijoada_selection(&mut self, index: usize) -> bool {
        self.feijoadas.remove(index)
    }

    pub fn select_feijoada(&mut self, index: usize) -> bool {
        self.feijoadas.select(index)
    }

    // --- Submission ---

    /// Checks the required fields and resolves the payment method.
    ///
    /// A blank (or whitespace-only) client name is always missing. A missing
    /// payment method is an error only when `config.require_payment` is set;
    /// otherwise it resolves to `config.default_payment`.
    pub fn validate(&self, config: &ComandaConfig) -> Result<PaymentMethod, ValidationError> {
        let missing_client = self.client_name.trim().is_empty();
        let missing_payment = config.require_payment && self.payment_method.is_none();
        if missing_client || missing_payment {
            return Err(ValidationError {
                missing_client,
                missing_payment,
            });
        }
        Ok(self.payment_method.unwrap_or(config.default_payment))
    }

    /// The `details` projection for the current order type.
    pub fn details(&self) -> OrderDetails {
        let observation = self.observation.clone();
        match self.order_type {
            OrderType::Feijoada => OrderDetails::Feijoada {
                feijoada_selections: self.feijoadas.to_vec(),
                observation,
            },
            OrderType::Marmita => OrderDetails::Marmita {
                marmita_selections: self.marmitas.to_vec(),
                observation,
            },
            OrderType::Mixed => OrderDetails::Mixed {
                marmita_selections: self.marmitas.to_vec(),
                feijoada_selections: self.feijoadas.to_vec(),
                observation,
            },
        }
    }

    /// Turns the draft into an [`OrderRecord`].
    ///
    /// Validation runs first; a rejected draft never touches the counter.
    /// The daily number is drawn for `now`'s local date when the configured
    /// ticket numbering covers this order type. The draft itself is not
    /// modified; call [`reset`](Self::reset) after a successful submission.
    pub fn submit<S: KeyValueStore>(
        &self,
        counter: &mut SequenceCounter<S>,
        config: &ComandaConfig,
        now: DateTime<Local>,
    ) -> Result<OrderRecord, ValidationError> {
        debug!(draft = ?self, "submit called");

        let payment = match self.validate(config) {
            Ok(payment) => payment,
            Err(e) => {
                warn!(
                    missing_client = e.missing_client,
                    missing_payment = e.missing_payment,
                    "Order rejected"
                );
                return Err(e);
            }
        };

        let daily_sequence_number = config
            .ticket_numbering
            .applies_to(self.order_type)
            .then(|| counter.next_number(now.date_naive()));

        let record = OrderRecord {
            client: self.client_name.clone(),
            payment,
            order_type: self.order_type,
            timestamp: format_timestamp(now, &config.timestamp_format),
            daily_sequence_number,
            details: self.details(),
        };

        info!(
            client = %record.client,
            order_type = %record.order_type,
            number = ?record.daily_sequence_number,
            "Order accepted"
        );
        Ok(record)
    }
}

/// Formats `now`, falling back to the default layout if `format` is not a
/// valid chrono format string.
fn format_timestamp(now: DateTime<Local>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_ok() {
        return out;
    }
    warn!(format, "Invalid timestamp format, using default");
    now.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
}
