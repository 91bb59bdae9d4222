//! Ordered hook dispatch over one batch.
//!
//! The pipeline is collect-everything, not fail-fast: every hook runs to
//! completion regardless of what earlier hooks reported, so the caller gets
//! the complete list of problems in one pass.

use tracing::debug;
use tracker_model::{Batch, ValidationReport};

use crate::context::ValidationContext;
use crate::hooks::{EventDateHook, PreCheckHook, ValidationHook};

/// An ordered list of validation hooks.
///
/// Hooks are kept sorted ascending by rank; the sort is stable, so hooks
/// sharing a rank run in registration order.
pub struct ValidationPipeline {
    hooks: Vec<Box<dyn ValidationHook>>,
}

impl Default for ValidationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a hook, keeping the list sorted by rank.
    #[must_use]
    pub fn register(mut self, hook: Box<dyn ValidationHook>) -> Self {
        self.hooks.push(hook);
        self.hooks.sort_by_key(|hook| hook.rank());
        self
    }

    /// Hook names in dispatch order.
    pub fn hook_names(&self) -> Vec<&'static str> {
        self.hooks.iter().map(|hook| hook.name()).collect()
    }

    /// Run every hook over the batch and concatenate their reports in
    /// hook-rank then per-hook record order.
    ///
    /// Always returns a report, possibly empty; no per-record problem can
    /// abort the pass.
    pub fn validate(&self, batch: &Batch, ctx: &ValidationContext<'_>) -> ValidationReport {
        let mut reports = Vec::new();
        for hook in &self.hooks {
            let hook_reports = hook.validate(batch, ctx);
            debug!(
                hook = hook.name(),
                rank = hook.rank(),
                count = hook_reports.len(),
                "hook finished"
            );
            reports.extend(hook_reports);
        }
        ValidationReport::new(reports)
    }
}

/// Build the standard pipeline: structural pre-checks, then date rules.
pub fn build_default_pipeline() -> ValidationPipeline {
    ValidationPipeline::new()
        .register(Box::new(PreCheckHook))
        .register(Box::new(EventDateHook))
}
