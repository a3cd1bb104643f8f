//! JavaScript binding.

use wasm_bindgen::prelude::*;

use crate::labeling::{evaluate, Configuration, Entry, UpperBound};

/// `fizzBuzz(n, config?)`: returns an array of strings and numbers.
///
/// `config` has the shape `{ rules: [{ divisor, replacement }] }`; when
/// `undefined` or `null` the default rules are used. Invalid input throws
/// an `Error` with the validation message.
#[wasm_bindgen(js_name = fizzBuzz)]
pub fn fizz_buzz(n: f64, config: JsValue) -> Result<JsValue, JsError> {
    let entries = label_range(n, move || {
        if config.is_undefined() || config.is_null() {
            Ok(None)
        } else {
            serde_wasm_bindgen::from_value(config)
                .map(Some)
                .map_err(|err| err.to_string())
        }
    })
    .map_err(|message| JsError::new(&message))?;
    serde_wasm_bindgen::to_value(&entries).map_err(|err| JsError::new(&err.to_string()))
}

/// Checks the bound, then loads the configuration, then evaluates.
///
/// `load_config` is not called when the bound is invalid. `Ok(None)`
/// selects the default rules.
fn label_range<F>(n: f64, load_config: F) -> Result<Vec<Entry>, String>
where
    F: FnOnce() -> Result<Option<Configuration>, String>,
{
    let upper_bound = UpperBound::try_from(n).map_err(|err| err.to_string())?;
    let config = load_config()?;
    evaluate(upper_bound, config.as_ref()).map_err(|err| err.to_string())
}
