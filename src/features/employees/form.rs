use std::collections::BTreeMap;

use serde::Serialize;
use web_sys::{FormData, HtmlFormElement};

use super::modal::collect_fields;
use crate::core::error::{BoardError, BoardResult};

/// Reads every string entry of `form`. File entries are skipped.
pub fn read_form(form: &HtmlFormElement) -> BoardResult<BTreeMap<String, String>> {
    let data = FormData::new_with_form(form)
        .map_err(|e| BoardError::form(format!("FormData unavailable: {:?}", e)))?;
    let entries = js_sys::try_iter(&data)
        .map_err(|e| BoardError::form(format!("FormData not iterable: {:?}", e)))?
        .ok_or_else(|| BoardError::form("FormData not iterable"))?;

    let mut pairs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BoardError::form(format!("{:?}", e)))?;
        let pair = js_sys::Array::from(&entry);
        if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            pairs.push((key, value));
        }
    }
    Ok(collect_fields(pairs))
}

/// Logs a submission instead of posting it anywhere.
pub fn log_submission(form_id: &str, fields: &BTreeMap<String, String>) {
    web_sys::console::log_1(&format!("Form {} submitted", form_id).into());
    match fields.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
        Ok(value) => web_sys::console::log_2(&"Submitted fields:".into(), &value),
        Err(e) => web_sys::console::error_1(&format!("Cannot log form {}: {}", form_id, e).into()),
    }
}

pub fn submit_form(form_id: &str, form: Option<HtmlFormElement>) {
    let result = form
        .ok_or_else(|| BoardError::form(format!("form {} is not mounted", form_id)))
        .and_then(|f| read_form(&f));
    match result {
        Ok(fields) => log_submission(form_id, &fields),
        Err(e) => web_sys::console::error_1(&e.to_string().into()),
    }
}
