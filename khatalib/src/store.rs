//! Хранилище журнала. Одна точка входа для всех мутаций: каждая —
//! чтение-изменение-запись документа целиком, затем оповещение.
//! Между процессами действует правило «последняя запись побеждает».

use crate::bridge;
use crate::error::Result;
use crate::model::{Charge, LedgerState, Payment, PriceTemplate, SecurityLog};
use crate::notify::{ChangeNotifier, Loopback, Subscription, SyncTransport};
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

/// Фиксированный ключ документа в хранилище.
pub const STORAGE_KEY: &str = "design_ledger_db";

/// Журнал безопасности ограничен последними записями.
pub const MAX_SECURITY_LOGS: usize = 20;

pub struct LedgerStore<S: Storage> {
    storage: S,
    key: String,
    notifier: ChangeNotifier,
}

impl<S: Storage> LedgerStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_transport(storage, Arc::new(Loopback))
    }

    pub fn with_transport(storage: S, transport: Arc<dyn SyncTransport>) -> Self {
        LedgerStore {
            storage,
            key: STORAGE_KEY.to_string(),
            notifier: ChangeNotifier::new(transport),
        }
    }

    /// Текущее состояние. Отсутствие документа — не ошибка: возвращается
    /// начальное состояние с предустановленными шаблонами.
    pub fn read(&self) -> Result<LedgerState> {
        match self.storage.load(&self.key)? {
            Some(doc) => Ok(serde_json::from_str(&doc)?),
            None => Ok(LedgerState::seeded()),
        }
    }

    fn persist(&self, state: &LedgerState) -> Result<()> {
        let doc = serde_json::to_string(state)?;
        self.storage.save(&self.key, &doc)?;
        self.notifier.broadcast(state);
        Ok(())
    }

    pub fn add_charge(&self, charge: Charge) -> Result<()> {
        debug!(id = %charge.id, "add charge");
        let mut state = self.read()?;
        state.charges.push(charge);
        self.persist(&state)
    }

    pub fn add_payment(&self, payment: Payment) -> Result<()> {
        debug!(id = %payment.id, "add payment");
        let mut state = self.read()?;
        state.payments.push(payment);
        self.persist(&state)
    }

    /// Полная замена набора шаблонов.
    pub fn save_templates(&self, templates: Vec<PriceTemplate>) -> Result<()> {
        let mut state = self.read()?;
        state.templates = templates;
        self.persist(&state)
    }

    /// Добавляет запись; при переполнении вытесняются самые старые.
    pub fn add_security_log(&self, log: SecurityLog) -> Result<()> {
        let mut state = self.read()?;
        state.security_logs.push(log);
        evict_old_logs(&mut state);
        self.persist(&state)
    }

    pub fn clear_security_logs(&self) -> Result<()> {
        let mut state = self.read()?;
        state.security_logs.clear();
        self.persist(&state)
    }

    /// Импорт блоба «моста»: при успехе состояние заменяется целиком
    /// (без слияния — история принадлежит одной стороне за раз).
    /// Любой дефект входа — отказ без изменений; наружу не паникует.
    pub fn import_data(&self, blob: &str) -> bool {
        let mut state = match bridge::decode(blob) {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "bridge import rejected");
                return false;
            }
        };
        // лимит журнала безопасности действует и для входящих документов
        evict_old_logs(&mut state);
        match self.persist(&state) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "bridge import failed to persist");
                false
            }
        }
    }

    /// Подписка на изменения; колбэк сразу вызывается с текущим
    /// состоянием, чтобы новый подписчик не оставался пустым.
    pub fn subscribe(
        &self,
        callback: impl Fn(&LedgerState) + Send + Sync + 'static,
    ) -> Result<Subscription> {
        let state = self.read()?;
        callback(&state);
        Ok(self.notifier.subscribe(callback))
    }

    /// Перечитать состояние и раздать локальным подписчикам — приёмная
    /// сторона сигнала из другого процесса.
    pub fn refresh(&self) -> Result<()> {
        let state = self.read()?;
        self.notifier.deliver(&state);
        Ok(())
    }
}

/// Держит журнал безопасности в пределах лимита, старые записи первыми.
fn evict_old_logs(state: &mut LedgerState) {
    if state.security_logs.len() > MAX_SECURITY_LOGS {
        let overflow = state.security_logs.len() - MAX_SECURITY_LOGS;
        state.security_logs.drain(..overflow);
    }
}
