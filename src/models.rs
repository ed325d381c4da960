//! Equipment models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Equipment models are organized into domain-specific submodules (currently
//! only `thermal`). The [`equipment`] module selects among them by
//! configuration so callers never branch on a concrete equipment type.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the physical equations and training pipeline live. The
//! `core` module is an implementation detail and is **not** re-exported as
//! part of the public API.
//!
//! The public type is a thin adapter over that core. It implements
//! [`ComponentModel`], the stateful train/update/predict protocol consumed by
//! the dispatch optimizer, and [`twine_core::Model`], which evaluates the
//! trained model at an arbitrary operating point without touching stored
//! setpoints.

pub mod component;
pub mod equipment;
pub mod thermal;

pub use component::{ComponentModel, Prediction, PredictError, SetpointError, TrainError};
