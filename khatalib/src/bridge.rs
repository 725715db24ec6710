//! «Мост» — перенос состояния между двумя устройствами через ссылку,
//! которую пересылают вручную (мессенджер, почта).
//!
//! Формат блоба: `base64(percentEncode(JSON({charges, payments, templates})))`.
//! Журнал безопасности локален и в перенос никогда не попадает.

use crate::error::{KhataError, Result};
use crate::model::{Charge, LedgerState, Payment, PriceTemplate, SecurityLog};
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use serde::Deserialize;

/// Имя query-параметра, в котором блоб едет внутри ссылки.
pub const BRIDGE_PARAM: &str = "bridge";

/// Типизированная форма входящего блоба. Принимаем только то, в чём есть
/// хотя бы одно из полей `charges`/`payments`; всё прочее — отказ.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BridgePayload {
    charges: Option<Vec<Charge>>,
    payments: Option<Vec<Payment>>,
    #[serde(default)]
    templates: Vec<PriceTemplate>,
    #[serde(default)]
    security_logs: Vec<SecurityLog>,
}

/// Кодирует состояние в текст, пригодный как значение query-параметра.
pub fn encode(state: &LedgerState) -> Result<String> {
    let export = LedgerState {
        security_logs: Vec::new(),
        ..state.clone()
    };
    let json = serde_json::to_string(&export)?;
    let escaped = urlencoding::encode(&json);
    Ok(URL_SAFE_NO_PAD.encode(escaped.as_bytes()))
}

/// Обратное преобразование. Любой дефект входа — ошибка, состояние
/// вызывающей стороны не трогается.
pub fn decode(blob: &str) -> Result<LedgerState> {
    let trimmed = blob.trim();
    let raw = URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| STANDARD.decode(trimmed))?;
    let escaped = String::from_utf8(raw)
        .map_err(|e| KhataError::Parse(format!("not utf-8: {e}")))?;
    let json = urlencoding::decode(&escaped)
        .map_err(|e| KhataError::Parse(format!("bad percent-encoding: {e}")))?;
    let payload: BridgePayload = serde_json::from_str(&json)?;
    if payload.charges.is_none() && payload.payments.is_none() {
        return Err(KhataError::Decode(
            "neither charges nor payments present".into(),
        ));
    }
    Ok(LedgerState {
        charges: payload.charges.unwrap_or_default(),
        payments: payload.payments.unwrap_or_default(),
        templates: payload.templates,
        security_logs: payload.security_logs,
    })
}

/// Готовая ссылка для пересылки: `<base_url>?bridge=<blob>`.
pub fn share_link(base_url: &str, state: &LedgerState) -> Result<String> {
    let blob = encode(state)?;
    let sep = if base_url.contains('?') { '&' } else { '?' };
    Ok(format!("{base_url}{sep}{BRIDGE_PARAM}={blob}"))
}

/// Достаёт блоб из вставленной ссылки; `None`, если параметра нет.
pub fn extract_blob(link: &str) -> Option<&str> {
    link.split(['?', '&', '#']).find_map(|part| {
        part.strip_prefix(BRIDGE_PARAM)
            .and_then(|rest| rest.strip_prefix('='))
    })
}
