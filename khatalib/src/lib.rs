//! khatalib — общий журнал расчётов «дизайнер — заказчик»: хранилище,
//! оповещения об изменениях и перенос состояния между устройствами по ссылке.

pub mod auth;
pub mod bridge;
pub mod error;
pub mod model;
pub mod notify;
pub mod report;
pub mod storage;
pub mod store;
