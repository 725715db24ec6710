use khatalib::model::{LoginStatus, SecurityLog};
use khatalib::storage::MemoryStorage;
use khatalib::store::{LedgerStore, MAX_SECURITY_LOGS};

fn log(id: u32) -> SecurityLog {
    SecurityLog {
        id: id.to_string(),
        attempted_email: format!("intruder{id}@example.com"),
        timestamp: i64::from(id),
        date: "2024-01-01 00:00:00".into(),
        status: LoginStatus::UnauthorizedEmail,
    }
}

#[test]
fn keeps_only_most_recent_twenty() {
    let store = LedgerStore::new(MemoryStorage::new());
    for id in 1..=25 {
        store.add_security_log(log(id)).expect("add log");
    }

    let state = store.read().expect("read");
    assert_eq!(state.security_logs.len(), MAX_SECURITY_LOGS);
    let ids: Vec<_> = state.security_logs.iter().map(|l| l.id.as_str()).collect();
    let expected: Vec<String> = (6..=25).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn below_cap_nothing_evicted() {
    let store = LedgerStore::new(MemoryStorage::new());
    for id in 1..=7 {
        store.add_security_log(log(id)).expect("add log");
    }
    assert_eq!(store.read().expect("read").security_logs.len(), 7);
}

#[test]
fn clear_empties_regardless_of_content() {
    let store = LedgerStore::new(MemoryStorage::new());
    for id in 1..=12 {
        store.add_security_log(log(id)).expect("add log");
    }
    store.clear_security_logs().expect("clear");
    assert!(store.read().expect("read").security_logs.is_empty());
}
