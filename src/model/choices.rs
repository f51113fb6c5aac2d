//! Closed menu vocabularies.
//!
//! Every option the order form offers is a variant here. The wire value (what
//! the selector widgets send and what a serialized record carries) is the
//! `Display` form; [`FromStr`] also accepts a few aliases.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// A widget handed over a value that is not on the menu.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid {field}: {value:?}")]
pub struct ParseChoiceError {
    pub field: &'static str,
    pub value: String,
}

/// Generates `Display` and `FromStr` for a menu enum from its wire values.
///
/// The first string of each arm is the canonical wire value, the rest are
/// accepted aliases.
macro_rules! menu_choice {
    ($ty:ident, $field:literal, { $($variant:ident => $wire:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $ty {
            /// The canonical wire value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $wire,)+
                }
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire $(| $alias)* => Ok($ty::$variant),)+
                    other => Err(ParseChoiceError {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// How the client pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "pix")]
    Pix,
    #[serde(rename = "credito", alias = "credit")]
    Credit,
    #[serde(rename = "debito", alias = "debit")]
    Debit,
    #[serde(rename = "dinheiro", alias = "cash")]
    Cash,
}

menu_choice!(PaymentMethod, "payment method", {
    Pix => "pix",
    Credit => "credito" | "credit",
    Debit => "debito" | "debit",
    Cash => "dinheiro" | "cash",
});

/// Which dishes an order carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrderType {
    #[default]
    #[serde(alias = "feijoada")]
    Feijoada,
    #[serde(alias = "marmita")]
    Marmita,
    #[serde(alias = "misto", alias = "mixed")]
    Mixed,
}

menu_choice!(OrderType, "order type", {
    Feijoada => "Feijoada" | "feijoada",
    Marmita => "Marmita" | "marmita",
    Mixed => "Mixed" | "mixed" | "misto",
});

impl OrderType {
    pub const ALL: [OrderType; 3] = [OrderType::Feijoada, OrderType::Marmita, OrderType::Mixed];
}

/// P/M/G portion size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishSize {
    P,
    M,
    G,
}

menu_choice!(DishSize, "size", {
    P => "P" | "p",
    M => "M" | "m",
    G => "G" | "g",
});

/// The feijoada kit is only sold in M and G.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KitSize {
    M,
    G,
}

menu_choice!(KitSize, "kit size", {
    M => "M" | "m",
    G => "G" | "g",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protein {
    DoDia,
    BifeChapa,
    BifeAcebolado,
    BifeCavalo,
    BistecaChapa,
    BistecaEmpanada,
    FrangoChapa,
    FrangoEmpanado,
}

menu_choice!(Protein, "protein", {
    DoDia => "do_dia",
    BifeChapa => "bife_chapa",
    BifeAcebolado => "bife_acebolado",
    BifeCavalo => "bife_cavalo",
    BistecaChapa => "bisteca_chapa",
    BistecaEmpanada => "bisteca_empanada",
    FrangoChapa => "frango_chapa",
    FrangoEmpanado => "frango_empanado",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeanType {
    #[serde(rename = "preto", alias = "black")]
    Black,
    #[serde(rename = "marrom", alias = "brown")]
    Brown,
}

menu_choice!(BeanType, "bean type", {
    Black => "preto" | "black",
    Brown => "marrom" | "brown",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pasta {
    #[serde(rename = "alho e oleo", alias = "alho_e_oleo")]
    GarlicAndOil,
    #[serde(rename = "da_casa")]
    House,
}

menu_choice!(Pasta, "pasta", {
    GarlicAndOil => "alho e oleo" | "alho_e_oleo",
    House => "da_casa",
});

/// Multi-select extras. Ordered so a selection's set prints deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideDish {
    BatataFrita,
    Legumes,
}

menu_choice!(SideDish, "side dish", {
    BatataFrita => "batata_frita",
    Legumes => "legumes",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cutlery {
    #[serde(rename = "sim_talher", alias = "yes")]
    Yes,
    #[serde(rename = "nao_talher", alias = "no")]
    No,
}

menu_choice!(Cutlery, "cutlery", {
    Yes => "sim_talher" | "yes",
    No => "nao_talher" | "no",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeijoadaType {
    #[serde(rename = "magra", alias = "lean")]
    Lean,
    #[serde(rename = "mista", alias = "mixed")]
    Mixed,
}

menu_choice!(FeijoadaType, "feijoada type", {
    Lean => "magra" | "lean",
    Mixed => "mista" | "mixed",
});

/// Parses an optional widget value: the empty string means "nothing selected".
pub fn parse_optional<T: FromStr<Err = ParseChoiceError>>(value: &str) -> Result<Option<T>, ParseChoiceError> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}
