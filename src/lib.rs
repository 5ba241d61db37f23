//! Core library for the renaming-rules-sync command line application.
//!
//! The tool reads desired renaming rules from an Excel workbook, compares them
//! with the rules stored in ProKnow, and replaces the stored collection once
//! the operator confirms. Workbook and credential adapters live under
//! [`proknow::renaming::io`], rule extraction in [`proknow::renaming::extract`],
//! the diffing logic in [`proknow::renaming::reconcile`], and the orchestration
//! in [`proknow::renaming::sync`].

pub mod proknow;

pub use proknow::renaming::{
    Result, SyncError, client, error, extract, io, model, prompt, reconcile, report, sync,
};
