//! JavaScript bindings.
//!
//! Exposes the search to a browser front end. The search runs on the
//! calling thread, so callers should invoke it from a Web Worker.

use wasm_bindgen::prelude::*;

use crate::select::{PlanRequest, SelectConfig};

/// Solves `{ activities, budget }` and returns the selection result.
///
/// `satisfaction_ratio` defaults to 0.8 when omitted.
#[wasm_bindgen(js_name = solveJson)]
pub fn solve_json(request: JsValue, satisfaction_ratio: Option<f64>) -> Result<JsValue, JsError> {
    let request: PlanRequest = serde_wasm_bindgen::from_value(request)?;
    let mut config = SelectConfig::default();
    if let Some(ratio) = satisfaction_ratio {
        config = config.with_satisfaction_ratio(ratio);
    }
    let result = request.solve(&config)?;
    Ok(serde_wasm_bindgen::to_value(&result)?)
}
