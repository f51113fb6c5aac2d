use crate::model::{
    parse_optional, BeanType, Cutlery, DishSize, FeijoadaType, KitSize, ParseChoiceError, Pasta, Protein, SideDish,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One boxed-meal configuration.
///
/// Every field is optional while the form is being filled in. Unset fields
/// are left out of the serialized record, so a half-filled marmita prints
/// only what the staff actually picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarmitaSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<DishSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<Protein>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bean_type: Option<BeanType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pasta: Option<Pasta>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub side_dishes: BTreeSet<SideDish>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutlery: Option<Cutlery>,
}

impl MarmitaSelection {
    /// True when nothing has been picked yet.
    pub fn is_empty(&self) -> bool {
        self.size.is_none()
            && self.protein.is_none()
            && self.bean_type.is_none()
            && self.pasta.is_none()
            && self.side_dishes.is_empty()
            && self.cutlery.is_none()
    }
}

/// The three mutually exclusive ways a feijoada is served.
///
/// Holding the choice in one enum means a selection can never carry a kit
/// size and a plate size at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeijoadaPortion {
    /// "Kit Feijoada": the full kit.
    Kit(KitSize),
    /// "Feijoada Marmita": feijoada served as a boxed plate.
    Plate(DishSize),
    /// "Só Feijoada": just the stew.
    SideOnly(DishSize),
}

/// Tag for one of the three exclusive portion slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeijoadaSlot {
    Kit,
    Plate,
    SideOnly,
}

impl FeijoadaPortion {
    /// Builds the portion for `slot` from a widget value. The empty string
    /// yields `None`.
    pub fn from_slot(slot: FeijoadaSlot, value: &str) -> Result<Option<Self>, ParseChoiceError> {
        Ok(match slot {
            FeijoadaSlot::Kit => parse_optional::<KitSize>(value)?.map(FeijoadaPortion::Kit),
            FeijoadaSlot::Plate => parse_optional::<DishSize>(value)?.map(FeijoadaPortion::Plate),
            FeijoadaSlot::SideOnly => parse_optional::<DishSize>(value)?.map(FeijoadaPortion::SideOnly),
        })
    }

    pub fn slot(&self) -> FeijoadaSlot {
        match self {
            FeijoadaPortion::Kit(_) => FeijoadaSlot::Kit,
            FeijoadaPortion::Plate(_) => FeijoadaSlot::Plate,
            FeijoadaPortion::SideOnly(_) => FeijoadaSlot::SideOnly,
        }
    }
}

/// One feijoada configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "FeijoadaWire", from = "FeijoadaWire")]
pub struct FeijoadaSelection {
    pub feijoada_type: Option<FeijoadaType>,
    pub portion: Option<FeijoadaPortion>,
}

impl FeijoadaSelection {
    pub fn kit_size(&self) -> Option<KitSize> {
        match self.portion {
            Some(FeijoadaPortion::Kit(size)) => Some(size),
            _ => None,
        }
    }

    pub fn plate_size(&self) -> Option<DishSize> {
        match self.portion {
            Some(FeijoadaPortion::Plate(size)) => Some(size),
            _ => None,
        }
    }

    pub fn side_only_size(&self) -> Option<DishSize> {
        match self.portion {
            Some(FeijoadaPortion::SideOnly(size)) => Some(size),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.feijoada_type.is_none() && self.portion.is_none()
    }
}

/// Flat three-slot shape used on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeijoadaWire {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    feijoada_type: Option<FeijoadaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kit_size: Option<KitSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    plate_size: Option<DishSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    side_only_size: Option<DishSize>,
}

impl From<FeijoadaSelection> for FeijoadaWire {
    fn from(selection: FeijoadaSelection) -> Self {
        Self {
            feijoada_type: selection.feijoada_type,
            kit_size: selection.kit_size(),
            plate_size: selection.plate_size(),
            side_only_size: selection.side_only_size(),
        }
    }
}

impl From<FeijoadaWire> for FeijoadaSelection {
    // A wire payload with more than one slot set keeps the first in kit,
    // plate, side-only order.
    fn from(wire: FeijoadaWire) -> Self {
        let portion = wire
            .kit_size
            .map(FeijoadaPortion::Kit)
            .or(wire.plate_size.map(FeijoadaPortion::Plate))
            .or(wire.side_only_size.map(FeijoadaPortion::SideOnly));
        Self {
            feijoada_type: wire.feijoada_type,
            portion,
        }
    }
}
