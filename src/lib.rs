//! # Vic Comanda
//!
//! > **Order entry and daily ticket numbering for Vic Marmitaria.**
//!
//! Staff fill in an order form (client, payment, feijoada and/or marmita
//! options, an observation) and get back a comanda: an immutable record that
//! the front end shows and prints.
//!
//! ## 🏗️ Design
//!
//! ### Types carry the menu rules
//! Every menu option is a closed enum. A feijoada's kit, plate and side-only
//! sizes are one [`FeijoadaPortion`](model::FeijoadaPortion), so only one of
//! them can ever be set. The record's [`OrderDetails`](model::OrderDetails)
//! has one variant per order type carrying only the lists that type uses.
//!
//! ### Injected persistence
//! The daily counter reads and writes through a
//! [`KeyValueStore`](counter::KeyValueStore). Tests use
//! [`MemoryStore`](counter::MemoryStore); the demo persists to a JSON file.
//!
//! ### One owner for the counter
//! Numbering is a read-modify-write. The [`desk`] actor owns the counter and
//! serves every form session in the process through a channel, so numbers
//! are never handed out twice within one process.
//!
//! ### Observability
//! `tracing` throughout; [`runtime::setup_tracing`] installs the subscriber.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: menu vocabulary, selections, [`OrderRecord`](model::OrderRecord).
//! - [`counter`]: storage trait, stores and the [`SequenceCounter`](counter::SequenceCounter).
//! - [`draft`]: the form session, [`OrderDraft`](draft::OrderDraft), and its validation.
//! - [`desk`]: the actor that accepts drafts, and its [`DeskClient`](desk::DeskClient).
//! - [`runtime`]: [`ComandaSystem`](runtime::ComandaSystem), configuration and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! COMANDA_TICKET_NUMBERING=never RUST_LOG=debug cargo run
//! ```

pub mod counter;
pub mod desk;
pub mod draft;
pub mod model;
pub mod runtime;
