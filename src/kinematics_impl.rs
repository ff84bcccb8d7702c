//! Builds the per-joint DH transforms and chains them into forward
//! kinematics.

use crate::expression::Expr;
use crate::kinematic_traits::Transform;
use crate::parameters::dh_kinematics::DhRow;

/// Forward kinematics over a table of DH rows.
#[derive(Debug, Clone)]
pub struct DhKinematics {
    rows: Vec<DhRow>,
}

impl DhKinematics {
    /// Creates a new `DhKinematics` instance over the given rows, in joint
    /// order.
    pub fn new(rows: Vec<DhRow>) -> Self {
        DhKinematics { rows }
    }

    /// The parsed rows, in joint order.
    pub fn rows(&self) -> &[DhRow] {
        &self.rows
    }

    /// The transform between consecutive frames for one joint:
    ///
    /// ```text
    /// | cos θ   -sin θ cos α    sin θ sin α    a cos θ |
    /// | sin θ    cos θ cos α   -cos θ sin α    a sin θ |
    /// | 0        sin α          cos α          d       |
    /// | 0        0              0              1       |
    /// ```
    ///
    /// Numeric trigonometric terms are rounded to 4 decimal places;
    /// symbolic parameters stay symbolic (see
    /// [DhParameter::angle_terms](crate::parameters::dh_kinematics::DhParameter::angle_terms)).
    pub fn joint_transform(row: &DhRow) -> Transform {
        let (ctheta, stheta) = row.theta.angle_terms();
        let (calpha, salpha) = row.alpha.angle_terms();
        let a = row.a.length();
        let d = row.d.length();

        Transform::new(
            ctheta.clone(),
            -(stheta.clone() * calpha.clone()),
            stheta.clone() * salpha.clone(),
            a.clone() * ctheta.clone(),
            stheta.clone(),
            ctheta.clone() * calpha.clone(),
            -(ctheta.clone() * salpha.clone()),
            a * stheta,
            Expr::num(0.0),
            salpha,
            calpha,
            d,
            Expr::num(0.0),
            Expr::num(0.0),
            Expr::num(0.0),
            Expr::num(1.0),
        )
    }

    /// One transform per table row, in joint order.
    pub fn joint_transforms(&self) -> Vec<Transform> {
        self.rows.iter().map(Self::joint_transform).collect()
    }

    /// The running products `T_k = A_1 * ... * A_k` for `k = 2..n`, in
    /// order. A single-joint table yields no partial products.
    pub fn chained_transforms(&self) -> Vec<Transform> {
        let transforms = self.joint_transforms();
        let mut chain = Vec::new();
        let mut running = match transforms.first() {
            Some(first) => first.clone(),
            None => return chain,
        };
        for transform in &transforms[1..] {
            running = multiply(&running, transform);
            chain.push(running.clone());
        }
        chain
    }

    /// The transform from the base frame to the last frame.
    pub fn forward(&self) -> Transform {
        let transforms = self.joint_transforms();
        let mut iter = transforms.iter();
        let mut result = match iter.next() {
            Some(first) => first.clone(),
            None => return Transform::identity(),
        };
        for transform in iter {
            result = multiply(&result, transform);
        }
        result
    }
}

/// Row-by-column product with the factors of every symbolic term kept in
/// chain order, left factor first, so the printed expressions read the way
/// they are derived on paper.
fn multiply(lhs: &Transform, rhs: &Transform) -> Transform {
    let mut result = Transform::from_element(Expr::num(0.0));
    for i in 0..4 {
        for j in 0..4 {
            let mut entry = Expr::num(0.0);
            for k in 0..4 {
                entry = entry + lhs[(i, k)].clone() * rhs[(k, j)].clone();
            }
            result[(i, j)] = entry;
        }
    }
    result
}
