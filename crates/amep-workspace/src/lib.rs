//! # amep-workspace
//!
//! Teacher workspace controller for AMEP.
//!
//! Sequences the project-service calls behind the workspace view: load the
//! teacher's classrooms, select one, load its project list, and expand the
//! first project into full detail. Creation feeds back into the same load
//! cycle. The controller is generic over
//! [`ProjectService`](amep_client::ProjectService), so tests drive it with
//! in-memory fakes.

pub mod controller;
pub mod error;
pub mod state;

pub use controller::{ProjectDraft, WorkspaceController};
pub use error::WorkspaceError;
pub use state::WorkspaceState;
