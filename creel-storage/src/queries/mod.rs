//! Query modules, one per concern. All functions operate on a borrowed
//! connection so the engine can route them through writer or read pool.

pub mod aggregate_ops;
pub mod catalog_ops;
pub mod history_ops;
pub mod inspector_ops;
pub mod report_ops;
pub mod round_ops;
pub mod violation_ops;
pub mod water_ops;
