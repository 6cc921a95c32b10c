//! Bookshelf Observability
//!
//! - [`logging`]: tracing subscriber setup and the per-request logging middleware
//! - [`metrics`]: an application-scoped Prometheus recorder, its HTTP middleware
//!   and business counters
//!
//! The metrics recorder is never installed as the process-global recorder:
//! each [`Metrics`] value owns its registry and reaches the handlers through
//! application state.
//!
//! # Examples
//!
//! ```no_run
//! use bookshelf_observability::{Metrics, init_tracing};
//!
//! let _guard = init_tracing();
//! let metrics = Metrics::new().expect("valid metrics configuration");
//! println!("{}", metrics.render());
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{init_tracing, logging_middleware};
pub use metrics::{Metrics, UNMATCHED_PATH, metrics_middleware};
