use crate::types::Operators;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Receives the messages written by the `log` operator.
pub type LogSink = dyn Fn(&str) + Send + Sync;

/// Default bound on rule nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Evaluation settings shared by every rule applied through an engine.
#[derive(Clone)]
pub struct EvalOptions {
    /// Deepest operator nesting accepted before evaluation fails with `TooDeep`.
    pub max_depth: usize,
    /// Where `log` writes. `None` emits a `tracing` event on `json_logic::log`.
    pub log_sink: Option<Arc<LogSink>>,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            log_sink: None,
        }
    }
}

impl fmt::Debug for EvalOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvalOptions")
            .field("max_depth", &self.max_depth)
            .field("log_sink", &self.log_sink.is_some())
            .finish()
    }
}

/// The execution context passed to every operator eval function.
pub struct EvalCtx<'a> {
    /// The data document rules are evaluated against.
    pub data: &'a Value,
    /// The operator snapshot used for recursive evaluation.
    pub operators: Arc<Operators>,
    pub options: &'a EvalOptions,
    depth: usize,
}

impl<'a> EvalCtx<'a> {
    pub fn new(data: &'a Value, operators: Arc<Operators>, options: &'a EvalOptions) -> Self {
        EvalCtx {
            data,
            operators,
            options,
            depth: 0,
        }
    }

    /// A context evaluating against `data` instead, at the current depth.
    ///
    /// Used by operators that run a sub-rule once per array element.
    pub fn scoped<'b>(&'b self, data: &'b Value) -> EvalCtx<'b> {
        EvalCtx {
            data,
            operators: Arc::clone(&self.operators),
            options: self.options,
            depth: self.depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Descends one nesting level. Returns false once the limit is exceeded.
    pub(crate) fn enter(&mut self) -> bool {
        self.depth += 1;
        self.depth <= self.options.max_depth
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn log(&self, message: &str) {
        match &self.options.log_sink {
            Some(sink) => sink(message),
            None => tracing::info!(target: "json_logic::log", "{}", message),
        }
    }
}
