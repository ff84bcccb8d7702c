//! Static torques and end-effector forces for a planar 3R arm.
//!
//! The arm geometry, masses and joint configurations are fixed in source;
//! there are no command line arguments. Part A computes the joint torques
//! needed to hold a payload at one configuration. Part B computes the force
//! the end-effector can apply when every joint holds the same torque
//! resolution, at two configurations. All matrices print in the LaTeX
//! bmatrix compatible format.

use std::io::{self, Write};

use anyhow::Result;
use nalgebra::Vector3;

use rs_dh_kinematics::jacobian::{GRAVITY, Jacobian, PlanarArm};
use rs_dh_kinematics::latex;

fn configuration(theta1: f64, theta2: f64, theta3: f64) -> [f64; 3] {
    [
        theta1.to_radians(),
        theta2.to_radians(),
        theta3.to_radians(),
    ]
}

fn main() -> Result<()> {
    let arm = PlanarArm {
        a1: 0.5,
        a2: 0.5,
        a3: 0.1,
        m1: 10.0,
        m2: 10.0,
        m3: 2.0,
    };
    let payload_mass = 5.0;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Part A: torques holding the payload weight at the end-effector.
    let config_a = configuration(45.0, -75.0, 30.0);
    let f_world = Vector3::new(0.0, payload_mass * GRAVITY, 0.0);

    let jacobian = Jacobian::new(&arm, &config_a);
    let gravity = arm.gravity_torques(&config_a);
    writeln!(out, "Part A Jacobian is:")?;
    latex::write_matrix(&mut out, jacobian.matrix())?;
    writeln!(out, "Part A Jacobian transpose is:")?;
    latex::write_matrix(&mut out, &jacobian.transpose())?;
    writeln!(out, "Part A gravity terms are:")?;
    latex::write_matrix(&mut out, &gravity)?;

    let torques_a = jacobian.torques(&f_world, &gravity);
    writeln!(out, "Part A torques are:")?;
    latex::write_matrix(&mut out, &torques_a)?;

    // Part B: forces available from a fixed torque resolution on every
    // joint, at the part A configuration and at a second one.
    let resolution = 0.1;
    let torques = Vector3::repeat(resolution);
    let config_b = configuration(45.0, -5.0, -40.0);

    let forces_a = force_output(&mut out, &arm, &config_a, &torques)?;
    let forces_b = force_output(&mut out, &arm, &config_b, &torques)?;
    writeln!(out, "Part B configuration A forces are:")?;
    latex::write_matrix(&mut out, &forces_a)?;
    writeln!(out, "Part B configuration B forces are:")?;
    latex::write_matrix(&mut out, &forces_b)?;

    Ok(())
}

/// Prints the intermediate matrices for one configuration and returns the
/// end-effector force the torques produce there.
fn force_output<W: Write>(
    out: &mut W,
    arm: &PlanarArm,
    joints: &[f64; 3],
    torques: &Vector3<f64>,
) -> Result<Vector3<f64>> {
    let jacobian = Jacobian::new(arm, joints);
    let gravity = arm.gravity_torques(joints);

    writeln!(out, "Part B Jacobian is:")?;
    latex::write_matrix(out, jacobian.matrix())?;
    writeln!(out, "Part B Jacobian transpose is:")?;
    latex::write_matrix(out, &jacobian.transpose())?;
    writeln!(out, "Part B Jacobian transpose inverse is:")?;
    latex::write_matrix(out, &jacobian.transpose_inverse().map_err(anyhow::Error::msg)?)?;
    writeln!(out, "Part B gravity terms are:")?;
    latex::write_matrix(out, &gravity)?;

    jacobian
        .forces(torques, &gravity)
        .map_err(anyhow::Error::msg)
}
