use crate::kinematic_traits::Transform;
use crate::kinematics_impl::DhKinematics;

#[test]
fn test_planar_rrr_pipeline() {
    let filename = "src/tests/data/planar_rrr.txt";
    let result = DhKinematics::from_file(filename);
    assert!(
        result.is_ok(),
        "Failed to load or parse the DH table: {}",
        result.unwrap_err()
    );
    let kinematics = result.expect("Expected a valid DH table after parsing");

    assert_eq!(kinematics.rows().len(), 3);
    let transforms = kinematics.joint_transforms();
    assert_eq!(transforms.len(), 3);
    let chain = kinematics.chained_transforms();
    assert_eq!(chain.len(), 2);

    // The last partial product is the full forward kinematics.
    assert_eq!(chain[1], kinematics.forward());

    // Numeric input stays numeric through the whole chain.
    for transform in transforms.iter().chain(chain.iter()) {
        for entry in transform.iter() {
            assert!(
                entry.as_num().is_some(),
                "entry {} did not fold to a number",
                entry
            );
        }
    }
}

#[test]
fn test_identity_joints_chain_to_identity() {
    let filename = "src/tests/data/identity.txt";
    let kinematics = DhKinematics::from_file(filename).expect("valid table");

    let chain = kinematics.chained_transforms();
    assert_eq!(chain.len(), 1);
    assert_eq!(chain[0], Transform::identity());
}

#[test]
fn test_missing_file_reports_an_io_error() {
    use crate::parameter_error::ParameterError;

    let result = DhKinematics::from_file("src/tests/data/no_such_table.txt");
    assert!(matches!(result, Err(ParameterError::IoError(_))));
}
