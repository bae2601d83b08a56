//! Core domain models for shift rota classification.
//!
//! This module defines the fundamental data structures used throughout the
//! engine, representing shift categories, staffing roles, calendar periods,
//! and per-record rejection reasons.

pub mod domain;
