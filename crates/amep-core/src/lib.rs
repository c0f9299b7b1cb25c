//! # amep-core
//!
//! Core domain types and workflow rules for the AMEP teaching platform.
//!
//! This crate provides the foundational types shared across all AMEP crates:
//! - Entity structs for classrooms, projects, teams, milestones, and artifacts
//! - The fixed five-stage project workflow and per-stage status derivation
//! - Boundary normalization from partial service records to display-ready
//!   projects
//! - Score-band enums and scoring helpers shared with the analytics endpoints
//! - Engagement analysis and live-poll types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod lifecycle;
pub mod scoring;
