//! Assets module - the per-asset record consumed by the recovery pipeline.

mod assets_model;

#[cfg(test)]
mod assets_model_tests;

pub use assets_model::AssetRecord;
