//! Stroud
//!
//! Integration of scalar functions over triangle meshes with Stroud conical
//! quadrature at Gauss-Jacobi points.
//!
//! ```
//! use stroud::integrate;
//! use stroud::mesh::TriangleMesh;
//!
//! let mesh = TriangleMesh::new(
//!     vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
//!     vec![0, 1, 2, 0, 2, 3],
//! )
//! .unwrap();
//! let value = integrate(&mesh, &|x: f64, y: f64| x * y, 4).unwrap();
//! assert!((value - 0.25).abs() < 1E-14);
//! ```
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod integrate;
pub mod mesh;
pub mod quadrature;
pub mod traits;
pub mod types;

pub use integrate::{integrate, integrate_with_areas, IntegrationOptions, StroudIntegrator};
pub use quadrature::generate_nodes;
