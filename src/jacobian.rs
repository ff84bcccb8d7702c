extern crate nalgebra as na;
use crate::kinematic_traits::JointAngles;
use na::linalg::SVD;
use na::{Matrix3, Vector3};

/// Standard gravity, m/s^2. Negative: the z axis of the arm plane points up.
pub const GRAVITY: f64 = -9.81;

/// Singular value cutoff when the transpose has to be pseudo-inverted.
const PSEUDO_INVERSE_EPSILON: f64 = 1e-10;

/// A planar 3R arm in a vertical plane.
#[derive(Debug, Clone, Copy)]
pub struct PlanarArm {
    /// Length of the first link, meters.
    pub a1: f64,

    /// Length of the second link, meters.
    pub a2: f64,

    /// Length of the third link, meters.
    pub a3: f64,

    /// Mass of the first link, kilograms, taken at the link midpoint.
    pub m1: f64,

    /// Mass of the second link, kilograms, taken at the link midpoint.
    pub m2: f64,

    /// Mass of the third link, kilograms, taken at the link midpoint.
    pub m3: f64,
}

impl PlanarArm {
    /// Gravity compensation torques for the given configuration: the static
    /// moment each joint must hold against the weight of the links hanging
    /// outboard of it.
    pub fn gravity_torques(&self, joints: &JointAngles) -> Vector3<f64> {
        let (theta1, theta12, theta123) = summed_angles(joints);
        let g = GRAVITY;
        let outer = 0.5 * self.m3 * g * self.a3 * theta123.cos();
        let middle = (0.5 * self.m2 + self.m3) * g * self.a2 * theta12.cos();
        let inner = (0.5 * self.m1 + self.m2 + self.m3) * g * self.a1 * theta1.cos();
        Vector3::new(inner + middle + outer, middle + outer, outer)
    }
}

/// Joint angles pre-summed along the chain: each link's absolute
/// orientation in the plane.
fn summed_angles(joints: &JointAngles) -> (f64, f64, f64) {
    (
        joints[0],
        joints[0] + joints[1],
        joints[0] + joints[1] + joints[2],
    )
}

/// Struct representing the Jacobian matrix of the planar arm
pub struct Jacobian {
    /// A 3x3 matrix mapping joint velocities to end-effector velocities.
    ///
    /// Each column corresponds to a joint; the rows are the x and y
    /// velocities of the end-effector and its angular velocity in the
    /// plane.
    matrix: Matrix3<f64>,
}

impl Jacobian {
    /// Constructs a new Jacobian struct by computing the Jacobian matrix
    /// for the given arm and joint configuration.
    pub fn new(arm: &PlanarArm, joints: &JointAngles) -> Self {
        Self {
            matrix: compute_jacobian(arm, joints),
        }
    }

    /// The Jacobian matrix itself.
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// The transpose, mapping an end-effector force to joint torques.
    pub fn transpose(&self) -> Matrix3<f64> {
        self.matrix.transpose()
    }

    /// Inverse of the transpose, mapping joint torques back to the
    /// end-effector force.
    ///
    /// Falls back to the SVD pseudoinverse when the configuration is
    /// singular and the plain inverse does not exist.
    pub fn transpose_inverse(&self) -> Result<Matrix3<f64>, &'static str> {
        let transpose = self.matrix.transpose();
        if let Some(inverse) = transpose.try_inverse() {
            return Ok(inverse);
        }
        let svd = SVD::new(transpose, true, true);
        svd.pseudo_inverse(PSEUDO_INVERSE_EPSILON)
            .map_err(|_| "unable to compute the pseudoinverse of the Jacobian transpose")
    }

    /// Computes the joint torques holding a force applied by the
    /// end-effector in world coordinates, gravity included:
    /// `tau = J^T f + g(q)`.
    pub fn torques(&self, f_world: &Vector3<f64>, gravity: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.transpose() * f_world + gravity
    }

    /// Computes the force the end-effector applies when the joints hold
    /// the given torques: `f = (J^T)^-1 (tau - g(q))`.
    pub fn forces(
        &self,
        torques: &Vector3<f64>,
        gravity: &Vector3<f64>,
    ) -> Result<Vector3<f64>, &'static str> {
        Ok(self.transpose_inverse()? * (torques - gravity))
    }
}

/// Function to compute the Jacobian matrix for a given arm and joint
/// configuration.
///
/// The first two rows are the partial derivatives of the end-effector
/// position with respect to each joint angle; the third row is all ones
/// because every joint rotates the end-effector in the same plane.
pub fn compute_jacobian(arm: &PlanarArm, joints: &JointAngles) -> Matrix3<f64> {
    let (theta1, theta12, theta123) = summed_angles(joints);
    let (s1, c1) = theta1.sin_cos();
    let (s12, c12) = theta12.sin_cos();
    let (s123, c123) = theta123.sin_cos();

    Matrix3::new(
        -arm.a1 * s1 - arm.a2 * s12 - arm.a3 * s123,
        -arm.a2 * s12 - arm.a3 * s123,
        -arm.a3 * s123,
        arm.a1 * c1 + arm.a2 * c12 + arm.a3 * c123,
        arm.a2 * c12 + arm.a3 * c123,
        arm.a3 * c123,
        1.0,
        1.0,
        1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn coursework_arm() -> PlanarArm {
        PlanarArm {
            a1: 0.5,
            a2: 0.5,
            a3: 0.1,
            m1: 10.0,
            m2: 10.0,
            m3: 2.0,
        }
    }

    fn coursework_configuration() -> JointAngles {
        [
            45.0_f64.to_radians(),
            (-75.0_f64).to_radians(),
            30.0_f64.to_radians(),
        ]
    }

    fn assert_vector_approx_eq(left: &Vector3<f64>, right: &Vector3<f64>, epsilon: f64) {
        for i in 0..3 {
            assert!(
                (left[i] - right[i]).abs() < epsilon,
                "left[{0}] = {1} is not approximately equal to right[{0}] = {2}",
                i,
                left[i],
                right[i]
            );
        }
    }

    #[test]
    fn third_row_is_all_ones() {
        let jacobian = compute_jacobian(&coursework_arm(), &coursework_configuration());
        assert_eq!(jacobian[(2, 0)], 1.0);
        assert_eq!(jacobian[(2, 1)], 1.0);
        assert_eq!(jacobian[(2, 2)], 1.0);
    }

    #[test]
    fn jacobian_columns_shrink_along_the_chain() {
        // Column k only carries the links outboard of joint k.
        let arm = coursework_arm();
        let joints = coursework_configuration();
        let jacobian = compute_jacobian(&arm, &joints);
        let theta123 = joints[0] + joints[1] + joints[2];
        assert!((jacobian[(0, 2)] - (-arm.a3 * theta123.sin())).abs() < EPSILON);
        assert!((jacobian[(1, 2)] - arm.a3 * theta123.cos()).abs() < EPSILON);
    }

    #[test]
    fn zero_force_torques_are_the_gravity_terms() {
        let arm = coursework_arm();
        let joints = coursework_configuration();
        let jacobian = Jacobian::new(&arm, &joints);
        let gravity = arm.gravity_torques(&joints);

        let torques = jacobian.torques(&Vector3::zeros(), &gravity);
        assert_vector_approx_eq(&torques, &gravity, EPSILON);
    }

    #[test]
    fn gravity_torque_on_the_last_joint_is_its_own_link_moment() {
        let arm = coursework_arm();
        let joints = coursework_configuration();
        let gravity = arm.gravity_torques(&joints);

        // theta1 + theta2 + theta3 = 0 in this configuration.
        let expected = 0.5 * arm.m3 * GRAVITY * arm.a3;
        assert!((gravity[2] - expected).abs() < EPSILON);
    }

    #[test]
    fn torques_and_forces_round_trip() {
        let arm = coursework_arm();
        let joints = coursework_configuration();
        let jacobian = Jacobian::new(&arm, &joints);
        let gravity = arm.gravity_torques(&joints);

        let torques = Vector3::new(0.1, 0.1, 0.1);
        let forces = jacobian
            .forces(&torques, &gravity)
            .expect("configuration is not singular");
        let recovered = jacobian.torques(&forces, &gravity);
        assert_vector_approx_eq(&recovered, &torques, EPSILON);
    }

    #[test]
    fn singular_configuration_falls_back_to_the_pseudoinverse() {
        // All links collapsed: the position rows vanish and only the
        // orientation row remains.
        let arm = PlanarArm {
            a1: 0.0,
            a2: 0.0,
            a3: 0.0,
            m1: 10.0,
            m2: 10.0,
            m3: 2.0,
        };
        let joints = [0.0, 0.0, 0.0];
        let jacobian = Jacobian::new(&arm, &joints);
        let gravity = arm.gravity_torques(&joints);

        let result = jacobian.forces(&Vector3::new(0.1, 0.1, 0.1), &gravity);
        assert!(result.is_ok());
    }
}
