//! Batch validation core.
//!
//! A batch of event records is validated by an ordered chain of hooks, each
//! implementing one rule family. Hooks accumulate coded error reports keyed
//! by record index and never abort the batch early; the caller receives the
//! complete list of violations in one pass.

pub mod context;
pub mod fault;
pub mod hooks;
pub mod pipeline;
pub mod preheat;
pub mod reporter;

pub use context::ValidationContext;
pub use fault::ValidationFault;
pub use hooks::{EventDateHook, PreCheckHook, ValidationHook};
pub use pipeline::{ValidationPipeline, build_default_pipeline};
pub use preheat::{InMemoryPreheat, Preheat};
pub use reporter::{RecordReporter, ReportDraft, ValidationReporter, new_report};
