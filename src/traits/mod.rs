//! Seams to external collaborators.
//!
//! The exchange core is pure; everything stateful lives behind a trait.
//! Today that is a single seam: [`FeeTable`], the ledger's per-pair fee
//! lookup.

mod fee_table;

pub use fee_table::FeeTable;
