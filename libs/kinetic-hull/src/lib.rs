//! # Kinetic Hull
//!
//! Divide-and-conquer 3D convex hull by kinetic merging of lower hulls.
//!
//! ## Architecture
//!
//! ```text
//! HullPoint[] → perturb → sort (x, y, z) → lower pass ┐
//!                                        → upper pass ┴→ facets → dedup
//! ```
//!
//! The lower hull of a sorted range is built by splitting it in half,
//! building both halves, and merging them. Every hull is viewed as a 2D
//! lower hull in the xy projection that evolves while a plane sweeps from
//! `-inf` to `+inf`; each half reports the slots whose membership changed as
//! a movie, and the merge produces the movie of the union. Replaying the
//! top-level movie yields one facet per event. The upper hull is the lower
//! hull of the z-mirrored points.
//!
//! ## Modules
//!
//! - **predicates**: XY orientation and the kinetic event time
//! - **chain**: index-based doubly linked chain with toggle semantics
//! - **kinetic**: bridge walk, forward sweep, and backward replay
//! - **driver**: recursion and passes
//! - **facet**: oriented triangles and their extraction
//! - **perturb**: jitter and rotation into general position
//! - **validate**: closure, convexity and Euler checks
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::HullConfig;
//! use glam::DVec3;
//! use kinetic_hull::{point::indexed, validate, ConvexHull};
//!
//! let corners: Vec<DVec3> = (0..8)
//!     .map(|i| DVec3::new((i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64))
//!     .collect();
//! let hull = ConvexHull::build(&indexed(&corners), &HullConfig::default()).unwrap();
//! assert_eq!(hull.len(), 12);
//! validate::check_closed(hull.facets()).unwrap();
//! ```

pub mod chain;
pub mod driver;
pub mod error;
pub mod facet;
pub mod hull;
pub mod kinetic;
pub mod perturb;
pub mod point;
pub mod predicates;
pub mod validate;

pub use config::constants::HullConfig;
pub use error::{HullError, HullResult};
pub use facet::Facet;
pub use hull::ConvexHull;
pub use point::HullPoint;
