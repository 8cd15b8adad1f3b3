//! # Hull Queries
//!
//! Consumers of a [`kinetic_hull::ConvexHull`] facet set.
//!
//! ## Modules
//!
//! - **distance**: minimum distance from a query point to any facet plane
//! - **voronoi**: mean side count of bounded Voronoi cells via the
//!   paraboloid lift
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::HullConfig;
//! use glam::DVec2;
//! use hull_queries::voronoi::cell_statistics;
//!
//! let sites = [
//!     DVec2::new(-1.0, -1.0),
//!     DVec2::new(1.0, -1.0),
//!     DVec2::new(1.0, 1.0),
//!     DVec2::new(-1.0, 1.0),
//!     DVec2::new(0.0, 0.0),
//! ];
//! let stats = cell_statistics(&sites, &HullConfig::default()).unwrap();
//! assert_eq!(stats.mean_sides(), 4.0);
//! ```

pub mod distance;
pub mod error;
pub mod voronoi;

pub use distance::{NearestFacet, Plane};
pub use error::{QueryError, QueryResult};
pub use voronoi::{cell_statistics, VoronoiStats};
