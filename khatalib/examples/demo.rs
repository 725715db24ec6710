use chrono::NaiveDate;
use khatalib::model::{Charge, Payment};
use khatalib::storage::MemoryStorage;
use khatalib::store::LedgerStore;
use khatalib::{bridge, report};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: журнал в памяти, сводка и ссылка для переноса
    let store = LedgerStore::new(MemoryStorage::new());

    store.add_charge(Charge {
        id: "1".into(),
        service: "Photo Retouch".into(),
        amount: Decimal::from(300),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?,
        added_by: "Sanjaya".into(),
        timestamp: 0,
    })?;
    store.add_payment(Payment {
        id: "2".into(),
        method: "Cash".into(),
        amount: Decimal::from(200),
        date: NaiveDate::from_ymd_opt(2024, 1, 10).ok_or("bad date")?,
        added_by: "Ravi".into(),
        note: None,
        timestamp: 0,
    })?;

    let state = store.read()?;
    print!("{}", report::render(&state));
    println!("{}", bridge::share_link("https://khata.example", &state)?);
    Ok(())
}
