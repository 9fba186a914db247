//! Workforce productivity analytics engine.
//!
//! Computes weighted-productivity metrics from employee activity logs and
//! recommends HR actions: workload rebalancing, training, hiring, risk
//! flags, and appraisals. The engine is deliberately stateless; service
//! crates mount [`workflows::productivity::productivity_router`] or call
//! [`workflows::productivity::run_analysis`] directly.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
