//! # Yatra-Sim: Rover Surface Simulation Library
//!
//! A simulation engine for a rover traversing a bounded planetary grid:
//! position/heading tracking, an obstacle registry, and bounded-horizon
//! journey planning that avoids known obstacles.
//!
//! ## Features
//!
//! - **Toroidal Surface**: latitude/longitude style limits with
//!   wraparound movement — stepping past an edge re-enters at the
//!   opposite edge, so movement never fails
//! - **Value-Semantic Rover**: commands produce new rover values,
//!   never half-updated state
//! - **Deterministic Journey Planning**: breadth-first exploration with
//!   a fixed turn-preference tie-break and a configurable step horizon
//! - **Pure Computation**: no network protocol or session handling —
//!   an external request layer owns session identity and (de)serialization
//!   and passes state explicitly into every operation
//!
//! ## Quick Start
//!
//! ```rust
//! use yatra_sim::{compute_journey, report, Coord, Heading, ObstacleReport, Rover, Surface};
//!
//! // One session: a rover and the surface seeded from its position
//! let rover = Rover::new();
//! let mut surface = Surface::new(rover.position);
//!
//! // A discovered obstacle straight ahead
//! report(&mut surface, &ObstacleReport::new(Coord::new(0, 1), Heading::North)).unwrap();
//!
//! // Plan a traversal that detours around it
//! let journey = compute_journey(&rover, &surface);
//! assert!(!journey.visits(Coord::new(0, 1)));
//! assert_eq!(journey.waypoints[1].heading, Heading::East);
//! ```
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Fundamental types ([`Coord`], [`Heading`])
//! - [`surface`]: Grid bounds and the obstacle registry
//! - [`rover`]: Rover state and command application
//! - [`journey`]: Bounded-horizon journey planner
//! - [`report`]: Obstacle observation recording
//! - [`config`]: YAML configuration
//! - [`render`]: ASCII debugging output
//!
//! ## Concurrency Model
//!
//! Single-threaded, synchronous, request-scoped: every operation works
//! on a rover/surface pair owned exclusively by one caller for the
//! duration of the call. Sessions are isolated by construction — there
//! is no shared or global state, and no internal synchronization.

pub mod config;
pub mod core;
pub mod error;
pub mod journey;
pub mod render;
pub mod report;
pub mod rover;
pub mod surface;

// Re-export main types at crate root
pub use crate::core::{Coord, Heading};
pub use config::{ConfigLoadError, YatraConfig};
pub use error::{Result, YatraError};
pub use journey::{
    compute_journey, Journey, JourneyConfig, JourneyEnd, JourneyPlanner, Turn, Waypoint,
};
pub use render::ascii_window;
pub use report::{report, ObstacleReport};
pub use rover::{Command, Rover};
pub use surface::Surface;
