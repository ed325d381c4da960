//! # Dispatch Models
//!
//! Trainable models of building energy equipment whose predictions feed an
//! economic-dispatch optimizer.
//!
//! ## Crate layout
//!
//! - [`models`]: Equipment models implementing [`models::ComponentModel`].
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Model lifecycle
//!
//! Every equipment model follows the same lifecycle:
//!
//! 1. Construct it with a configuration (defaults live in the config, not in globals).
//! 2. [`train`](models::ComponentModel::train) it once on a historical dataset.
//! 3. At each dispatch tick, [`update_parameters`](models::ComponentModel::update_parameters)
//!    with the current readings and [`predict`](models::ComponentModel::predict).
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable.

pub mod models;
pub mod support;
