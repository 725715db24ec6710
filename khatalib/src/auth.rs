//! Статический список допущенных пользователей. Это не настоящая
//! аутентификация: инструмент для двоих, пароли лежат в коде.
//! Неудачные попытки фиксируются в журнале безопасности.

use crate::model::{now_millis, time_id, LoginStatus, Role, SecurityLog};
use chrono::Local;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

pub const AUTHORIZED_USERS: &[UserProfile] = &[
    UserProfile {
        name: "Sanjaya",
        email: "sanjaya@designledger.app",
        password: "sanjaya123",
        role: Role::Designer,
    },
    UserProfile {
        name: "Ravi",
        email: "ravi@designledger.app",
        password: "ravi123",
        role: Role::JobGiver,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success(UserProfile),
    WrongPassword,
    UnauthorizedEmail,
}

/// Проверка пары email/пароль. Email нормализуется (регистр, пробелы).
pub fn attempt(email: &str, password: &str) -> LoginOutcome {
    let normalized = email.trim().to_lowercase();
    match AUTHORIZED_USERS.iter().find(|u| u.email == normalized) {
        Some(user) if user.password == password => LoginOutcome::Success(user.clone()),
        Some(_) => LoginOutcome::WrongPassword,
        None => LoginOutcome::UnauthorizedEmail,
    }
}

/// Запись для журнала безопасности о неудачной попытке входа.
pub fn failure_log(attempted_email: &str, status: LoginStatus) -> SecurityLog {
    SecurityLog {
        id: time_id(),
        attempted_email: attempted_email.to_string(),
        timestamp: now_millis(),
        date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        status,
    }
}
