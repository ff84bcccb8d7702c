//! Defines the DH parameter data structures

pub mod dh_kinematics {
    use crate::expression::Expr;

    /// One Denavit-Hartenberg parameter: either a literal value or a named
    /// symbol that is carried through the matrix algebra unevaluated.
    #[derive(Debug, Clone, PartialEq)]
    pub enum DhParameter {
        /// Literal value: meters for d and a, degrees for theta and alpha.
        Number(f64),
        /// Symbol name as it should appear in the typeset output, already
        /// tagged with the joint number (e.g. `\theta_2`).
        Symbol(String),
    }

    /// DH parameters for one joint. See [DhKinematics](crate::kinematics_impl::DhKinematics)
    /// for how a table of rows becomes a transform chain.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DhRow {
        /// Offset along the previous z axis, meters.
        pub d: DhParameter,

        /// Link length along the common normal, meters.
        pub a: DhParameter,

        /// Joint angle about the previous z axis, degrees.
        pub theta: DhParameter,

        /// Link twist about the new x axis, degrees.
        pub alpha: DhParameter,

        /// 1-based joint number. Symbols in this row carry it as suffix.
        pub joint: usize,
    }

    impl DhParameter {
        /// The parameter used as a length entry of the transform.
        pub fn length(&self) -> Expr {
            match self {
                DhParameter::Number(value) => Expr::num(*value),
                DhParameter::Symbol(name) => Expr::sym(name.clone()),
            }
        }

        /// Cosine and sine of the parameter taken as an angle in degrees.
        ///
        /// Numeric angles are evaluated and rounded to 4 decimal places, so
        /// a right angle contributes an exact 0 instead of 6.1e-17 to the
        /// typeset matrix. Symbolic angles become `C<name>` and `S<name>`
        /// symbols.
        pub fn angle_terms(&self) -> (Expr, Expr) {
            match self {
                DhParameter::Number(degrees) => {
                    let radians = degrees.to_radians();
                    (
                        Expr::num(round4(radians.cos())),
                        Expr::num(round4(radians.sin())),
                    )
                }
                DhParameter::Symbol(name) => {
                    (Expr::sym(format!("C{name}")), Expr::sym(format!("S{name}")))
                }
            }
        }
    }

    /// Round to 4 decimal places.
    fn round4(x: f64) -> f64 {
        (x * 10_000.0).round() / 10_000.0
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn numeric_angle_terms_are_rounded() {
            let (cos, sin) = DhParameter::Number(90.0).angle_terms();
            assert_eq!(cos, Expr::num(0.0));
            assert_eq!(sin, Expr::num(1.0));

            let (cos, sin) = DhParameter::Number(45.0).angle_terms();
            assert_eq!(cos, Expr::num(0.7071));
            assert_eq!(sin, Expr::num(0.7071));
        }

        #[test]
        fn symbolic_angle_terms_keep_the_tagged_name() {
            let (cos, sin) = DhParameter::Symbol("\\theta_2".to_string()).angle_terms();
            assert_eq!(cos, Expr::sym("C\\theta_2"));
            assert_eq!(sin, Expr::sym("S\\theta_2"));
        }

        #[test]
        fn lengths_pass_through() {
            assert_eq!(DhParameter::Number(0.5).length(), Expr::num(0.5));
            assert_eq!(
                DhParameter::Symbol("l_1".to_string()).length(),
                Expr::sym("l_1")
            );
        }
    }
}
