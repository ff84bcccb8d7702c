extern crate nalgebra as na;

use crate::expression::Expr;
use na::Matrix4;

/// A homogeneous 4x4 transform whose entries may be numbers or symbolic
/// expressions, depending on how the DH parameters were given.
pub type Transform = Matrix4<Expr>;

/// Joint configuration of the planar 3R arm, radians.
pub type JointAngles = [f64; 3];
