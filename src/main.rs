//! Demo: one rejected and one accepted order through the desk.

use tracing::{error, info, Instrument};
use vic_comanda::counter::JsonFileStore;
use vic_comanda::desk::DeskError;
use vic_comanda::draft::{FeijoadaField, MarmitaField, OrderDraft};
use vic_comanda::model::{DishSize, FeijoadaSlot, FeijoadaType, OrderType, PaymentMethod, Protein, SideDish};
use vic_comanda::runtime::{setup_tracing, ComandaConfig, ComandaSystem};

const DEFAULT_COUNTER_FILE: &str = "comanda-counters.json";

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ComandaConfig::from_env().map_err(|e| e.to_string())?;
    let counter_file =
        std::env::var("COMANDA_COUNTER_FILE").unwrap_or_else(|_| DEFAULT_COUNTER_FILE.to_string());
    info!(counter_file = %counter_file, "Starting comanda desk");

    let system = ComandaSystem::new(config, JsonFileStore::open(&counter_file));

    let mut draft = OrderDraft::new();
    draft.set_order_type(OrderType::Mixed);
    draft.update_active_marmita(MarmitaField::Size(Some(DishSize::G)));
    draft.update_active_marmita(MarmitaField::Protein(Some(Protein::FrangoEmpanado)));
    draft.toggle_side_dish(0, SideDish::BatataFrita);
    draft.update_feijoada_field(0, FeijoadaField::Type(Some(FeijoadaType::Lean)));
    draft
        .set_feijoada_slot(0, FeijoadaSlot::Kit, "M")
        .map_err(|e| e.to_string())?;
    draft.set_observation("Sem cebola");

    // Nothing identifies the client yet: the desk must reject this.
    let span = tracing::info_span!("incomplete_order");
    let rejected = async { system.desk_client.submit(&draft).await }
        .instrument(span)
        .await;
    match rejected {
        Err(DeskError::Validation(e)) => info!(error = %e, "Rejected as expected"),
        Err(e) => return Err(e.to_string()),
        Ok(_) => error!("Incomplete order was accepted"),
    }

    draft.set_client_name("Maria");
    draft.set_payment_method(Some(PaymentMethod::Pix));

    let span = tracing::info_span!("order_processing");
    let record = async { system.desk_client.submit(&draft).await }
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;
    draft.reset();

    let ticket = record.ticket_label().unwrap_or_else(|| "-".to_string());
    let json = serde_json::to_string_pretty(&record).map_err(|e| e.to_string())?;
    info!(ticket = %ticket, "Comanda ready\n{}", json);

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
