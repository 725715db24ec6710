//! Текстовая сводка по журналу. Считается локально и детерминированно,
//! без внешних сервисов.

use crate::model::LedgerState;
use chrono::Local;
use rust_decimal::Decimal;
use std::fmt::Write as _;

/// Отчёт в духе «DESIGN LEDGER REPORT»: итоги и статус расчётов.
pub fn render(state: &LedgerState) -> String {
    let costs = state.total_costs();
    let paid = state.total_paid();
    let balance = state.balance();

    let mut out = String::new();
    let _ = writeln!(out, "DESIGN LEDGER REPORT");
    let _ = writeln!(
        out,
        "Generated: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "Total Costs: Rs. {costs}");
    let _ = writeln!(out, "Total Paid: Rs. {paid}");
    let _ = writeln!(out, "Net Balance: Rs. {balance}");
    let _ = writeln!(out, "Status: {}", status_line(state, balance));
    out
}

fn status_line(state: &LedgerState, balance: Decimal) -> String {
    if state.charges.is_empty() && state.payments.is_empty() {
        return "ledger is empty, add charges or payments first".to_string();
    }
    if balance < Decimal::ZERO {
        format!("job giver owes Rs. {}", -balance)
    } else if balance > Decimal::ZERO {
        format!("overpaid by Rs. {balance}")
    } else {
        "fully settled".to_string()
    }
}
