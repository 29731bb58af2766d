//! Fixed-capacity Verlet point/link engine for interactive 3D scenes.
//!
//! `tether` advances a bounded population of unit-mass points under
//! accumulated forces, then relaxes box, link and pin constraints once per
//! frame. Links can be torn at runtime, and external bodies are handled
//! through pure collision queries that return correction vectors.
//!
//! # Features
//!
//! - **Point store**: dense ids, fixed capacity, explicit bounds checks
//! - **Position-Verlet integration**: velocity implied by the last move
//! - **Single-pass relaxation**: box → links → pins, pins always win
//! - **Tearing**: remove one link or every link at a point; incidence index kept in sync
//! - **Collision queries**: spheres, ellipsoids, boxes, or any [`Body`]
//! - **Ropes & cloth**: builders on top of the engine, with tear helpers
//! - **Observable**: monitor each pass via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! # Example
//! ```
//! use tether::{NoOpStepObserver, Vec3, Verlet};
//!
//! let mut verlet: Verlet<f32> = Verlet::new(16);
//! let a = verlet.create_point(Vec3::new(0.0, 0.0, 0.0)).unwrap();
//! let b = verlet.create_point(Vec3::new(1.0, 0.0, 0.0)).unwrap();
//! verlet.create_link(a, b).unwrap();
//! verlet.create_pin(a).unwrap();
//!
//! verlet.apply_force(Vec3::new(0.0, -10.0, 0.0));
//! verlet.step(0.016, None, &mut NoOpStepObserver).unwrap();
//! assert_eq!(verlet.point(a).unwrap(), Vec3::new(0.0, 0.0, 0.0));
//! assert!(verlet.point(b).unwrap().y < 0.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod store;
pub mod link;
pub mod pin;
pub mod constraint;
pub mod collider;
pub mod ray;
pub mod verlet;
pub mod rope;
pub mod cloth;
pub mod manager;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use store::{PointStore, MAX_POINTS};
pub use link::{Link, LinkConstraint, LinkSet};
pub use pin::{Pin, PinSet};
pub use constraint::BoxBounds;
pub use collider::{Body, Collider};
pub use ray::{Ray, RayHit};
pub use verlet::Verlet;
pub use rope::Rope;
pub use cloth::{Cloth, ClothConfig};
pub use manager::VerletManager;
pub use config::SolverConfig;
pub use observer::{LogStepObserver, NoOpStepObserver, StepObserver};
pub use error::{Result, VerletError};
