//! Rust implementation of two robotics coursework helpers: a
//! Denavit-Hartenberg transform solver and a planar 3R arm statics solver.
//!
//! The DH solver builds the transformation matrix for each joint of a
//! kinematic chain from its `(d, a, theta, alpha)` parameters and chains
//! the matrices into the forward kinematics, displaying every step. Any
//! combination of numeric and symbolic parameters is supported: symbolic
//! parameters are carried through the matrix algebra unevaluated as tagged
//! placeholders (`\theta_2`, `l_2`, ...). All matrices are printed in a
//! LaTeX amsmath bmatrix compatible format.
//!
//! The statics solver computes the manipulator Jacobian of a planar 3R arm
//! for a fixed joint configuration, together with its transpose and
//! transpose inverse, the gravity compensation torques, and the static
//! mapping between joint torques and end-effector forces.
//!
//! # Features
//!
//! - Per-joint DH transforms with numeric entries, symbolic entries, or
//!   any mix of the two.
//! - Chained forward kinematics with every partial product available.
//! - Typesetting-oriented output: paste the printed rows straight into a
//!   `bmatrix` environment.
//! - Planar arm statics: gravity terms, torques from an end-effector
//!   force, and forces from joint torques (with a pseudoinverse fallback
//!   at singular configurations).
//!
//! # Input
//!
//! The file based solver reads one joint per line, four comma-separated
//! fields `d,a,theta,alpha`. A field that parses as a number is used
//! literally; anything else becomes a named symbol tagged with the joint
//! number. See [parameters_from_file] for the details.

pub mod parameters;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

pub mod expression;
pub mod kinematic_traits;
pub mod kinematics_impl;
pub mod latex;

pub mod jacobian;

#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
