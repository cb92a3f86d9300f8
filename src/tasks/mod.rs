//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Upload sweep: removes staged uploads abandoned by interrupted requests

mod sweeper;

pub use sweeper::{spawn_upload_sweeper, sweep_stale_uploads};
