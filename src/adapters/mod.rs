//! Host tabular type adapters.
//!
//! The [`crate::types::Tabular`] trait is the boundary between this crate's
//! abstract dataset model and a host dataframe library.
//! [`crate::types::DataSet`] implements it natively; adapters for external
//! libraries live here behind Cargo features:
//!
//! - `polars` (feature `polars`): `polars::prelude::DataFrame`

#[cfg(feature = "polars")]
pub mod polars;
