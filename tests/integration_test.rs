use chrono::{DateTime, Local, TimeZone};
use serde_json::json;
use vic_comanda::counter::{JsonFileStore, KeyValueStore, MemoryStore};
use vic_comanda::desk::{ComandaDesk, DeskError};
use vic_comanda::draft::{MarmitaField, OrderDraft, ValidationError};
use vic_comanda::model::{DishSize, FeijoadaSlot, OrderType, PaymentMethod, Protein};
use vic_comanda::runtime::{ComandaConfig, ComandaSystem, TicketNumbering};

fn evening() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 10, 18, 20, 15, 0).unwrap()
}

fn marmita_draft(client: &str) -> OrderDraft {
    let mut draft = OrderDraft::new();
    draft.set_client_name(client);
    draft.set_payment_method(Some(PaymentMethod::Pix));
    draft.set_order_type(OrderType::Marmita);
    draft.update_active_marmita(MarmitaField::Size(Some(DishSize::G)));
    draft.update_active_marmita(MarmitaField::Protein(Some(Protein::BifeChapa)));
    draft
}

/// Full end-to-end flow: rejected draft, correction, accepted record.
#[tokio::test]
async fn test_full_comanda_flow() {
    let (desk, client) = ComandaDesk::new(8, MemoryStore::new(), ComandaConfig::default());
    let system = ComandaSystem::start(desk.with_clock(evening), client);

    let mut draft = marmita_draft("");
    let err = system
        .desk_client
        .submit(&draft)
        .await
        .expect_err("blank client must be rejected");
    assert_eq!(
        err,
        DeskError::Validation(ValidationError {
            missing_client: true,
            missing_payment: false,
        })
    );

    // The draft is still there to be corrected.
    assert_eq!(draft.marmitas().active().size, Some(DishSize::G));
    draft.set_client_name("Maria");

    let record = system
        .desk_client
        .submit(&draft)
        .await
        .expect("Failed to submit order");

    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "client": "Maria",
            "payment": "pix",
            "orderType": "Marmita",
            "timestamp": "18/10/2026, 20:15:00",
            "dailySequenceNumber": 1,
            "details": {
                "marmitaSelections": [{"size": "G", "protein": "bife_chapa"}],
                "observation": ""
            }
        })
    );

    let store = system.shutdown().await.expect("Failed to shutdown system");
    assert_eq!(store.get("comanda-counter-2026-10-18").as_deref(), Some("1"));
}

/// Many sessions submitting at once still get distinct, gap-free numbers.
#[tokio::test]
async fn test_concurrent_sessions_get_distinct_numbers() {
    let (desk, client) = ComandaDesk::new(4, MemoryStore::new(), ComandaConfig::default());
    let system = ComandaSystem::start(desk.with_clock(evening), client);

    let mut handles = vec![];
    for i in 0..20 {
        let desk_client = system.desk_client.clone();
        handles.push(tokio::spawn(async move {
            let draft = marmita_draft(&format!("Cliente {i}"));
            desk_client.submit(&draft).await
        }));
    }

    let mut numbers = vec![];
    for handle in handles {
        let record = handle.await.unwrap().expect("submit failed");
        numbers.push(record.daily_sequence_number.expect("numbered"));
    }
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=20).collect::<Vec<u64>>());

    system.shutdown().await.unwrap();
}

/// Mixed orders keep both lists, sized as on the form.
#[tokio::test]
async fn test_mixed_order_keeps_list_lengths() {
    let (desk, client) = ComandaDesk::new(8, MemoryStore::new(), ComandaConfig::default());
    let system = ComandaSystem::start(desk.with_clock(evening), client);

    let mut draft = marmita_draft("Ana");
    draft.set_order_type(OrderType::Mixed);
    draft.add_marmita_selection();
    draft.add_feijoada_selection();
    draft.add_feijoada_selection();
    draft.set_feijoada_slot(2, FeijoadaSlot::Plate, "P").unwrap();

    let record = system.desk_client.submit(&draft).await.unwrap();
    assert_eq!(record.details.marmita_selections().len(), 2);
    assert_eq!(record.details.feijoada_selections().len(), 3);

    let details = serde_json::to_value(&record.details).unwrap();
    assert_eq!(
        details["feijoadaSelections"],
        json!([{}, {}, {"plateSize": "P"}])
    );
    assert_eq!(details["marmitaSelections"][1], json!({}));

    system.shutdown().await.unwrap();
}

/// With numbering off, records carry no number and the store stays empty.
#[tokio::test]
async fn test_unnumbered_configuration() {
    let config = ComandaConfig {
        ticket_numbering: TicketNumbering::Never,
        ..Default::default()
    };
    let (desk, client) = ComandaDesk::new(8, MemoryStore::new(), config);
    let system = ComandaSystem::start(desk.with_clock(evening), client);

    let record = system.desk_client.submit(&marmita_draft("Rui")).await.unwrap();
    assert_eq!(record.daily_sequence_number, None);
    assert!(serde_json::to_value(&record).unwrap().get("dailySequenceNumber").is_none());

    let store = system.shutdown().await.unwrap();
    assert!(store.is_empty());
}

/// The counter file carries numbering across restarts of the desk.
#[tokio::test]
async fn test_counter_file_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("counters.json");

    for expected in 1..=2u64 {
        let (desk, client) =
            ComandaDesk::new(8, JsonFileStore::open(&path), ComandaConfig::default());
        let system = ComandaSystem::start(desk.with_clock(evening), client);

        let record = system.desk_client.submit(&marmita_draft("Bia")).await.unwrap();
        assert_eq!(record.daily_sequence_number, Some(expected));

        system.shutdown().await.unwrap();
    }

    let contents: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(contents, json!({"comanda-counter-2026-10-18": "2"}));
}

/// A desk that never ran leaves its clients with a closed channel.
#[tokio::test]
async fn test_client_reports_closed_desk() {
    let (desk, client) = ComandaDesk::new(8, MemoryStore::new(), ComandaConfig::default());
    drop(desk);

    let err = client.submit(&marmita_draft("Leo")).await.unwrap_err();
    assert_eq!(err, DeskError::Closed);
}
