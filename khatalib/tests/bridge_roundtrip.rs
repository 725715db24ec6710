use chrono::NaiveDate;
use khatalib::bridge;
use khatalib::model::{
    Charge, LedgerState, LoginStatus, Payment, PriceTemplate, SecurityLog,
};
use rust_decimal::Decimal;

fn sample_state() -> LedgerState {
    LedgerState {
        charges: vec![Charge {
            id: "c1".into(),
            service: "Photo Retouch".into(),
            amount: Decimal::from(300),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            added_by: "Sanjaya".into(),
            timestamp: 1704067200000,
        }],
        payments: vec![Payment {
            id: "p1".into(),
            method: "Bank Transfer".into(),
            amount: "450.5".parse().unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            added_by: "Ravi".into(),
            note: Some("первый транш".into()),
            timestamp: 1705276800000,
        }],
        templates: vec![PriceTemplate {
            id: "1".into(),
            name: "Background Change".into(),
            amount: Decimal::from(500),
        }],
        security_logs: Vec::new(),
    }
}

#[test]
fn roundtrip_preserves_state() {
    let state = sample_state();
    let blob = bridge::encode(&state).expect("encode");
    let back = bridge::decode(&blob).expect("decode");
    assert_eq!(back, state);
}

#[test]
fn roundtrip_of_single_charge_exact() {
    let mut state = sample_state();
    state.payments.clear();
    state.templates.clear();
    let back = bridge::decode(&bridge::encode(&state).expect("encode")).expect("decode");
    assert_eq!(back.charges, state.charges);
    assert!(back.payments.is_empty());
    assert!(back.templates.is_empty());
    assert!(back.security_logs.is_empty());
}

#[test]
fn security_logs_never_exported() {
    let mut state = sample_state();
    state.security_logs.push(SecurityLog {
        id: "s1".into(),
        attempted_email: "intruder@example.com".into(),
        timestamp: 1,
        date: "2024-01-01 00:00:00".into(),
        status: LoginStatus::WrongPassword,
    });

    let back = bridge::decode(&bridge::encode(&state).expect("encode")).expect("decode");
    assert!(back.security_logs.is_empty());
}

#[test]
fn blob_is_query_string_safe() {
    let blob = bridge::encode(&sample_state()).expect("encode");
    assert!(blob
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn share_link_and_extract() {
    let state = sample_state();
    let link = bridge::share_link("https://khata.example", &state).expect("link");
    assert!(link.starts_with("https://khata.example?bridge="));

    let blob = bridge::extract_blob(&link).expect("blob in link");
    assert_eq!(bridge::decode(blob).expect("decode"), state);

    // параметр не первый в query
    let link = format!("https://khata.example?tab=dashboard&bridge={blob}");
    assert_eq!(bridge::extract_blob(&link), Some(blob));

    assert_eq!(bridge::extract_blob("https://khata.example"), None);
}
