//! Fingerprint determinista de una traza completa.
//!
//! Entra: versión del motor, objetivo (min/max) y la secuencia de steps.
//! No entran `run_id` ni timestamps, así dos ejecuciones con la misma entrada
//! (incluido el orden de aristas) producen el mismo fingerprint.
use serde_json::json;

use super::hash_value;
use crate::constants::ENGINE_VERSION;
use crate::engine::TreeGoal;
use crate::step::Step;

pub fn trace_fingerprint(goal: TreeGoal, steps: &[Step]) -> String {
    hash_value(&json!({
        "engine_version": ENGINE_VERSION,
        "goal": goal,
        "steps": steps,
    }))
}
