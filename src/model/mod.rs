//! Pure data: the menu vocabulary, dish selections and the accepted order record.

pub mod choices;
pub mod record;
pub mod selection;

pub use choices::*;
pub use record::*;
pub use selection::*;
