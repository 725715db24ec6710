//! Доменные модели. Формат сериализации: camelCase, поле `type` у услуги,
//! суммы — обычные JSON-числа.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "DESIGNER")]
    Designer,
    #[serde(rename = "JOB_GIVER")]
    JobGiver,
}

/// Начисление за услугу. Создаёт дизайнер; после добавления не меняется.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    pub id: String,
    #[serde(rename = "type")]
    pub service: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub date: NaiveDate,
    pub added_by: String,
    #[serde(default)]
    pub timestamp: i64,
}

/// Оплата от заказчика; после добавления не меняется.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub method: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub date: NaiveDate,
    pub added_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub timestamp: i64,
}

/// Шаблон цены для быстрого ввода начислений.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceTemplate {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoginStatus {
    #[serde(rename = "WRONG_PASSWORD")]
    WrongPassword,
    #[serde(rename = "UNAUTHORIZED_EMAIL")]
    UnauthorizedEmail,
}

/// Запись о неудачной попытке входа. Локальная, в перенос не попадает.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityLog {
    pub id: String,
    pub attempted_email: String,
    pub timestamp: i64,
    pub date: String,
    pub status: LoginStatus,
}

/// Полное состояние журнала — единица хранения, оповещения и переноса.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerState {
    #[serde(default)]
    pub charges: Vec<Charge>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub templates: Vec<PriceTemplate>,
    #[serde(default)]
    pub security_logs: Vec<SecurityLog>,
}

impl LedgerState {
    /// Состояние при первом запуске: пустая история и четыре
    /// предустановленных шаблона цен.
    pub fn seeded() -> Self {
        let template = |id: &str, name: &str, amount: i64| PriceTemplate {
            id: id.to_string(),
            name: name.to_string(),
            amount: Decimal::from(amount),
        };
        LedgerState {
            charges: Vec::new(),
            payments: Vec::new(),
            templates: vec![
                template("1", "Background Change", 500),
                template("2", "Photo Retouch", 300),
                template("3", "Album Basic", 6000),
                template("4", "Album Premium", 9000),
            ],
            security_logs: Vec::new(),
        }
    }

    pub fn total_costs(&self) -> Decimal {
        self.charges.iter().map(|c| c.amount).sum()
    }

    pub fn total_paid(&self) -> Decimal {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// Сальдо: оплачено минус начислено. Отрицательное — заказчик должен.
    pub fn balance(&self) -> Decimal {
        self.total_paid() - self.total_costs()
    }
}

pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

/// Непрозрачный идентификатор, производный от текущего времени (мс эпохи).
pub fn time_id() -> String {
    now_millis().to_string()
}
