//! Payroll engine for the Gulf Wage Protection System (WPS).
//!
//! This crate computes monthly wages for employees in Qatar and Saudi Arabia,
//! validates the roster before a payroll run, and encodes the compliance files
//! that banks and labour ministries require as proof of payment.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod processing;
pub mod store;
pub mod validation;
