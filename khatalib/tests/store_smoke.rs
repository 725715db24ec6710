use chrono::NaiveDate;
use khatalib::model::{Charge, Payment, PriceTemplate};
use khatalib::storage::{FileStorage, MemoryStorage};
use khatalib::store::LedgerStore;
use rust_decimal::Decimal;

fn charge(id: &str, service: &str, amount: i64) -> Charge {
    Charge {
        id: id.into(),
        service: service.into(),
        amount: Decimal::from(amount),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        added_by: "Sanjaya".into(),
        timestamp: 0,
    }
}

fn payment(id: &str, method: &str, amount: i64) -> Payment {
    Payment {
        id: id.into(),
        method: method.into(),
        amount: Decimal::from(amount),
        date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        added_by: "Ravi".into(),
        note: None,
        timestamp: 0,
    }
}

#[test]
fn first_read_is_seeded() {
    let store = LedgerStore::new(MemoryStorage::new());
    let state = store.read().expect("read");
    assert!(state.charges.is_empty());
    assert!(state.payments.is_empty());
    assert!(state.security_logs.is_empty());
    let names: Vec<_> = state.templates.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        ["Background Change", "Photo Retouch", "Album Basic", "Album Premium"]
    );
}

#[test]
fn single_charge_scenario() {
    let store = LedgerStore::new(MemoryStorage::new());
    let c = charge("1", "Retouch", 300);
    store.add_charge(c.clone()).expect("add charge");

    let state = store.read().expect("read");
    assert_eq!(state.charges, vec![c]);
    assert_eq!(state.total_costs(), Decimal::from(300));
}

#[test]
fn appends_preserve_insertion_order() {
    let store = LedgerStore::new(MemoryStorage::new());
    for i in 1..=5 {
        store
            .add_charge(charge(&i.to_string(), "Design", 100 * i))
            .expect("add charge");
    }
    store.add_payment(payment("p1", "Cash", 200)).expect("add payment");
    store.add_payment(payment("p2", "Bank", 300)).expect("add payment");

    let state = store.read().expect("read");
    let ids: Vec<_> = state.charges.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    let pids: Vec<_> = state.payments.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(pids, ["p1", "p2"]);
    assert_eq!(state.total_paid(), Decimal::from(500));
    assert_eq!(state.balance(), Decimal::from(500 - 1500));
}

#[test]
fn templates_replaced_wholesale() {
    let store = LedgerStore::new(MemoryStorage::new());
    let next = vec![PriceTemplate {
        id: "10".into(),
        name: "Logo Design Package".into(),
        amount: Decimal::from(1500),
    }];
    store.save_templates(next.clone()).expect("save templates");
    assert_eq!(store.read().expect("read").templates, next);
}

#[test]
fn file_storage_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let store = LedgerStore::new(FileStorage::new(dir.path()));
        store.add_charge(charge("1", "Album Basic", 6000)).expect("add charge");
    }
    let store = LedgerStore::new(FileStorage::new(dir.path()));
    let state = store.read().expect("read");
    assert_eq!(state.charges.len(), 1);
    assert_eq!(state.charges[0].service, "Album Basic");
}
