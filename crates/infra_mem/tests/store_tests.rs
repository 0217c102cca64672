//! Behavioral tests for the in-memory adapters

use chrono::{NaiveDate, Utc};
use core_kernel::{BillingPeriod, MeterReadingId, Money, RoomId, TenantId};
use rust_decimal_macros::dec;

use domain_billing::{
    Invoice, InvoiceStore, MeterReading, MeterReadingStore, RoomDirectory, UtilityCharge,
};
use infra_mem::{InMemoryInvoiceStore, InMemoryMeterReadingStore, InMemoryRoomDirectory};

fn invoice_for(room_id: RoomId, period: BillingPeriod) -> Invoice {
    Invoice::new(
        room_id,
        TenantId::new(),
        Money::thb(dec!(3500)),
        UtilityCharge {
            units: 10,
            amount: Money::thb(dec!(180)),
        },
        UtilityCharge {
            units: 60,
            amount: Money::thb(dec!(480)),
        },
        period,
        period.reference_date() + chrono::Days::new(7),
    )
}

fn reading_for(room_id: RoomId, water: i64, electric: i64) -> MeterReading {
    MeterReading {
        id: MeterReadingId::new_v7(),
        room_id,
        water_previous: 0,
        water_current: water,
        electric_previous: 0,
        electric_current: electric,
        reading_date: Utc::now(),
    }
}

mod invoice_store {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryInvoiceStore::new();
        let period = BillingPeriod::new(2024, 6).unwrap();
        let invoice = invoice_for(RoomId::new(), period);

        store.insert(&invoice).await.unwrap();
        let loaded = store.get(invoice.id).await.unwrap().unwrap();
        assert_eq!(loaded.total_amount, invoice.total_amount);
    }

    #[tokio::test]
    async fn test_room_period_uniqueness_is_enforced() {
        let store = InMemoryInvoiceStore::new();
        let room_id = RoomId::new();
        let period = BillingPeriod::new(2024, 6).unwrap();

        store.insert(&invoice_for(room_id, period)).await.unwrap();
        let err = store
            .insert(&invoice_for(room_id, period))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_same_room_different_period_is_allowed() {
        let store = InMemoryInvoiceStore::new();
        let room_id = RoomId::new();

        let june = BillingPeriod::new(2024, 6).unwrap();
        store.insert(&invoice_for(room_id, june)).await.unwrap();
        store
            .insert(&invoice_for(room_id, june.next()))
            .await
            .unwrap();
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_update_requires_prior_insert() {
        let store = InMemoryInvoiceStore::new();
        let invoice = invoice_for(RoomId::new(), BillingPeriod::new(2024, 6).unwrap());

        let err = store.update(&invoice).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_pending_due_before_filters_on_status_and_date() {
        let store = InMemoryInvoiceStore::new();
        let period = BillingPeriod::new(2024, 6).unwrap();

        let mut due = invoice_for(RoomId::new(), period);
        due.due_date = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
        store.insert(&due).await.unwrap();

        let mut not_yet_due = invoice_for(RoomId::new(), period);
        not_yet_due.due_date = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        store.insert(&not_yet_due).await.unwrap();

        let mut paid = invoice_for(RoomId::new(), period);
        paid.due_date = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
        paid.record_manual_payment().unwrap();
        store.insert(&paid).await.unwrap();

        let cutoff = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let found = store.pending_due_before(cutoff).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, due.id);
    }

    #[tokio::test]
    async fn test_due_date_equal_to_cutoff_is_not_overdue() {
        let store = InMemoryInvoiceStore::new();
        let mut invoice = invoice_for(RoomId::new(), BillingPeriod::new(2024, 6).unwrap());
        invoice.due_date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        store.insert(&invoice).await.unwrap();

        let found = store
            .pending_due_before(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
            .await
            .unwrap();
        assert!(found.is_empty());
    }
}

mod meter_store {
    use super::*;

    #[tokio::test]
    async fn test_latest_is_most_recent_insert() {
        let store = InMemoryMeterReadingStore::new();
        let room_id = RoomId::new();

        store.insert(&reading_for(room_id, 100, 2000)).await.unwrap();
        store.insert(&reading_for(room_id, 110, 2060)).await.unwrap();

        let latest = store.latest_for(room_id).await.unwrap().unwrap();
        assert_eq!(latest.water_current, 110);
    }

    #[tokio::test]
    async fn test_history_is_most_recent_first_and_bounded() {
        let store = InMemoryMeterReadingStore::new();
        let room_id = RoomId::new();

        for i in 1..=5 {
            store
                .insert(&reading_for(room_id, i * 10, i * 100))
                .await
                .unwrap();
        }

        let history = store.history_for(room_id, 3).await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].water_current, 50);
        assert_eq!(history[2].water_current, 30);
    }

    #[tokio::test]
    async fn test_history_is_a_fresh_snapshot_each_call() {
        let store = InMemoryMeterReadingStore::new();
        let room_id = RoomId::new();
        store.insert(&reading_for(room_id, 10, 100)).await.unwrap();

        let first = store.history_for(room_id, 12).await.unwrap();
        store.insert(&reading_for(room_id, 20, 200)).await.unwrap();
        let second = store.history_for(room_id, 12).await.unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_room_has_no_history() {
        let store = InMemoryMeterReadingStore::new();
        assert!(store.latest_for(RoomId::new()).await.unwrap().is_none());
        assert!(store.history_for(RoomId::new(), 12).await.unwrap().is_empty());
    }
}

mod room_directory {
    use super::*;
    use domain_billing::{Room, RoomStatus};

    fn room(number: &str, status: RoomStatus) -> Room {
        Room {
            id: RoomId::new(),
            room_number: number.to_string(),
            base_rent: Money::thb(dec!(3500)),
            tenant_id: Some(TenantId::new()),
            status,
        }
    }

    #[tokio::test]
    async fn test_occupied_rooms_filters_and_orders() {
        let directory = InMemoryRoomDirectory::new();
        directory.put(room("202", RoomStatus::Occupied));
        directory.put(room("101", RoomStatus::Occupied));
        directory.put(room("102", RoomStatus::Vacant));
        directory.put(room("103", RoomStatus::Maintenance));

        let occupied = directory.occupied_rooms().await.unwrap();
        let numbers: Vec<&str> = occupied.iter().map(|r| r.room_number.as_str()).collect();
        assert_eq!(numbers, vec!["101", "202"]);
    }

    #[tokio::test]
    async fn test_put_replaces_existing_record() {
        let directory = InMemoryRoomDirectory::new();
        let mut r = room("101", RoomStatus::Occupied);
        directory.put(r.clone());

        r.status = RoomStatus::Vacant;
        directory.put(r.clone());

        let loaded = directory.get(r.id).await.unwrap().unwrap();
        assert_eq!(loaded.status, RoomStatus::Vacant);
    }
}
