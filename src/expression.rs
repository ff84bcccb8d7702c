//! Symbolic scalar for matrix entries.
//!
//! A Denavit-Hartenberg parameter may be given numerically or left as a
//! named symbol, and the transform algebra has to work for any mix of the
//! two. Rather than writing a separate symbolic matrix product, `Expr` is a
//! scalar that nalgebra can multiply and accumulate like `f64`, so
//! `Matrix4<Expr>` chains go through the same generic matrix multiplication
//! as purely numeric ones.
//!
//! The smart constructors fold constants and drop additive/multiplicative
//! identities while the product is being accumulated. Without this, every
//! entry of a chained transform would drag a tail of `0*...` and `1*...`
//! terms into the typeset output. There is no further rewriting: no trig
//! identities, no collection of like terms.

use num_traits::{One, Zero};
use std::fmt;
use std::mem;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};

/// A scalar that is either a literal number or a symbolic expression.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    /// Literal value.
    Num(f64),
    /// Named symbol as it should appear in the typeset output,
    /// e.g. `C\theta_2`.
    Sym(String),
    /// Negation. Never wraps `Num` or another `Neg`.
    Neg(Box<Expr>),
    /// Sum. Neither operand is a literal zero.
    Add(Box<Expr>, Box<Expr>),
    /// Product. Neither operand is a literal zero, one, or a negation.
    Mul(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Literal value, with `-0.0` normalized to `0.0` so folded-away
    /// entries print as a plain `0`.
    pub fn num(value: f64) -> Self {
        Expr::Num(if value == 0.0 { 0.0 } else { value })
    }

    /// Named symbol.
    pub fn sym(name: impl Into<String>) -> Self {
        Expr::Sym(name.into())
    }

    /// The literal value, if this expression folded down to one.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Expr::Num(value) => Some(*value),
            _ => None,
        }
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        match (self, rhs) {
            (Expr::Num(a), Expr::Num(b)) => Expr::num(a + b),
            (Expr::Num(zero), other) if zero == 0.0 => other,
            (other, Expr::Num(zero)) if zero == 0.0 => other,
            (lhs, rhs) => Expr::Add(Box::new(lhs), Box::new(rhs)),
        }
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        self + (-rhs)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        match self {
            Expr::Num(value) => Expr::num(-value),
            Expr::Neg(inner) => *inner,
            other => Expr::Neg(Box::new(other)),
        }
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        match (self, rhs) {
            (Expr::Num(a), Expr::Num(b)) => Expr::num(a * b),
            (Expr::Num(zero), _) | (_, Expr::Num(zero)) if zero == 0.0 => Expr::num(0.0),
            (Expr::Num(one), other) if one == 1.0 => other,
            (other, Expr::Num(one)) if one == 1.0 => other,
            (Expr::Num(minus_one), other) if minus_one == -1.0 => -other,
            (other, Expr::Num(minus_one)) if minus_one == -1.0 => -other,
            // The sign moves to the front of the whole product.
            (Expr::Neg(lhs), rhs) => -(*lhs * rhs),
            (lhs, Expr::Neg(rhs)) => -(lhs * *rhs),
            (lhs, rhs) => Expr::Mul(Box::new(lhs), Box::new(rhs)),
        }
    }
}

impl AddAssign for Expr {
    fn add_assign(&mut self, rhs: Expr) {
        let lhs = mem::replace(self, Expr::Num(0.0));
        *self = lhs + rhs;
    }
}

impl MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Expr) {
        let lhs = mem::replace(self, Expr::Num(1.0));
        *self = lhs * rhs;
    }
}

impl Zero for Expr {
    fn zero() -> Self {
        Expr::Num(0.0)
    }

    fn is_zero(&self) -> bool {
        matches!(self, Expr::Num(value) if *value == 0.0)
    }
}

impl One for Expr {
    fn one() -> Self {
        Expr::Num(1.0)
    }
}

/// Wraps a product operand in parentheses when it would otherwise bind
/// wrong: sums, negations, and negative literals.
struct Factor<'a>(&'a Expr);

impl fmt::Display for Factor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Expr::Add(_, _) | Expr::Neg(_) => write!(f, "({})", self.0),
            Expr::Num(value) if *value < 0.0 => write!(f, "({})", self.0),
            other => write!(f, "{}", other),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Num(value) => write!(f, "{}", value),
            Expr::Sym(name) => write!(f, "{}", name),
            Expr::Neg(inner) => match inner.as_ref() {
                Expr::Add(_, _) => write!(f, "-({})", inner),
                other => write!(f, "-{}", other),
            },
            Expr::Add(lhs, rhs) => match rhs.as_ref() {
                Expr::Neg(inner) => write!(f, "{} - {}", lhs, Factor(inner)),
                Expr::Num(value) if *value < 0.0 => write!(f, "{} - {}", lhs, -value),
                other => write!(f, "{} + {}", lhs, other),
            },
            Expr::Mul(lhs, rhs) => write!(f, "{}*{}", Factor(lhs), Factor(rhs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Matrix4;

    #[test]
    fn constant_folding() {
        assert_eq!(Expr::num(2.0) + Expr::num(3.0), Expr::num(5.0));
        assert_eq!(Expr::num(2.0) * Expr::num(3.0), Expr::num(6.0));
        assert_eq!(Expr::num(2.0) - Expr::num(2.0), Expr::num(0.0));
    }

    #[test]
    fn identities_fold_away() {
        let x = Expr::sym("x");
        assert_eq!(x.clone() + Expr::num(0.0), x);
        assert_eq!(Expr::num(0.0) + x.clone(), x);
        assert_eq!(x.clone() * Expr::num(1.0), x);
        assert_eq!(x.clone() * Expr::num(0.0), Expr::num(0.0));
        assert_eq!(x.clone() * Expr::num(-1.0), -x);
    }

    #[test]
    fn double_negation_cancels() {
        let x = Expr::sym("x");
        assert_eq!(-(-x.clone()), x);
    }

    #[test]
    fn negation_hoists_out_of_products() {
        let product = (-Expr::sym("a")) * Expr::sym("b");
        assert_eq!(product, -(Expr::sym("a") * Expr::sym("b")));
        assert_eq!(product.to_string(), "-a*b");
    }

    #[test]
    fn no_negative_zero() {
        assert_eq!((-Expr::num(0.0)).to_string(), "0");
        assert_eq!((Expr::num(-1.0) * Expr::num(0.0)).to_string(), "0");
    }

    #[test]
    fn display_precedence() {
        let sum = Expr::sym("a") + Expr::sym("b");
        assert_eq!(sum.to_string(), "a + b");
        assert_eq!((sum.clone() * Expr::sym("c")).to_string(), "(a + b)*c");
        assert_eq!((-sum).to_string(), "-(a + b)");
        assert_eq!(
            (Expr::sym("a") - Expr::sym("b") * Expr::sym("c")).to_string(),
            "a - b*c"
        );
        assert_eq!((Expr::sym("a") + Expr::num(-2.0)).to_string(), "a - 2");
        assert_eq!(
            (Expr::sym("a") * Expr::num(-2.0)).to_string(),
            "a*(-2)"
        );
    }

    #[test]
    fn mixed_numeric_symbolic_product() {
        let term = Expr::num(0.5) * Expr::sym("Ctheta_1");
        assert_eq!(term.to_string(), "0.5*Ctheta_1");
    }

    #[test]
    fn matrices_multiply_through_nalgebra() {
        let identity: Matrix4<Expr> = Matrix4::identity();
        assert_eq!(&identity * &identity, identity);
    }
}
