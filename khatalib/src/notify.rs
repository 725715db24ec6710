//! Оповещения «состояние изменилось». Без полезной нагрузки: подписчики
//! всегда перечитывают состояние целиком, поэтому повторная доставка
//! безопасна, а порядок между подписчиками не оговаривается.

use crate::model::LedgerState;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

/// Транспорт сигнала в другие процессы/контексты того же пользователя.
/// Сигнал не несёт данных — получатель перечитывает хранилище сам.
pub trait SyncTransport: Send + Sync {
    fn publish(&self);
}

/// Транспорт-заглушка для одиночного процесса.
pub struct Loopback;

impl SyncTransport for Loopback {
    fn publish(&self) {}
}

type Callback = Box<dyn Fn(&LedgerState) + Send + Sync>;
type Registry = Mutex<HashMap<u64, Callback>>;

pub struct ChangeNotifier {
    subscribers: Arc<Registry>,
    next_id: AtomicU64,
    transport: Arc<dyn SyncTransport>,
}

impl ChangeNotifier {
    pub fn new(transport: Arc<dyn SyncTransport>) -> Self {
        ChangeNotifier {
            subscribers: Arc::new(Mutex::new(HashMap::new())),
            next_id: AtomicU64::new(0),
            transport,
        }
    }

    pub fn subscribe(
        &self,
        callback: impl Fn(&LedgerState) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut subs = self.subscribers.lock().expect("notifier mutex poisoned");
        subs.insert(id, Box::new(callback));
        Subscription {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Локальное изменение: уведомить подписчиков и дать сигнал наружу.
    pub fn broadcast(&self, state: &LedgerState) {
        self.deliver(state);
        self.transport.publish();
    }

    /// Доставка без повторной публикации — изменение пришло извне.
    pub fn deliver(&self, state: &LedgerState) {
        let subs = self.subscribers.lock().expect("notifier mutex poisoned");
        for callback in subs.values() {
            callback(state);
        }
    }
}

/// Подписка; при выходе из области видимости отписывается сама.
pub struct Subscription {
    id: u64,
    subscribers: Weak<Registry>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subs) = self.subscribers.upgrade() {
            if let Ok(mut subs) = subs.lock() {
                subs.remove(&self.id);
            }
        }
    }
}
