//! Definiciones relacionadas a Steps.
//!
//! Un `Step` es un punto de decisión registrado durante una ejecución de
//! Kruskal. Este módulo define:
//! - `StepAction`: etiqueta discreta (`considering | added | rejected | completed`).
//! - `StepOutcome`: descripción del resultado de una decisión.
//! - `Step`: snapshot inmutable con aristas acumuladas, costo y union-find.

mod action;
mod record;

pub use action::{StepAction, StepOutcome};
pub use record::Step;
