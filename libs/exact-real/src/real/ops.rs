use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{Node, Real};

impl Real {
    fn add_real(&self, rhs: &Real) -> Real {
        match (self.as_exact(), rhs.as_exact()) {
            (Some(a), Some(b)) => Real::exact(a + b),
            _ => Real::from_node(Node::Add(self.clone(), rhs.clone())),
        }
    }

    fn sub_real(&self, rhs: &Real) -> Real {
        match (self.as_exact(), rhs.as_exact()) {
            (Some(a), Some(b)) => Real::exact(a - b),
            _ => Real::from_node(Node::Sub(self.clone(), rhs.clone())),
        }
    }

    fn mul_real(&self, rhs: &Real) -> Real {
        match (self.as_exact(), rhs.as_exact()) {
            (Some(a), Some(b)) => Real::exact(a * b),
            _ => Real::from_node(Node::Mul(self.clone(), rhs.clone())),
        }
    }

    fn div_real(&self, rhs: &Real) -> Real {
        Real::from_node(Node::Div(self.clone(), rhs.clone()))
    }
}

macro_rules! real_binary_op {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl $trait<&Real> for &Real {
            type Output = Real;

            fn $method(self, rhs: &Real) -> Real {
                self.$inner(rhs)
            }
        }

        impl $trait<Real> for Real {
            type Output = Real;

            fn $method(self, rhs: Real) -> Real {
                self.$inner(&rhs)
            }
        }

        impl $trait<&Real> for Real {
            type Output = Real;

            fn $method(self, rhs: &Real) -> Real {
                self.$inner(rhs)
            }
        }

        impl $trait<Real> for &Real {
            type Output = Real;

            fn $method(self, rhs: Real) -> Real {
                self.$inner(&rhs)
            }
        }
    };
}

real_binary_op!(Add, add, add_real);
real_binary_op!(Sub, sub, sub_real);
real_binary_op!(Mul, mul, mul_real);
real_binary_op!(Div, div, div_real);

impl Neg for &Real {
    type Output = Real;

    fn neg(self) -> Real {
        match self.as_exact() {
            Some(x) => Real::exact(-x),
            None => Real::from_node(Node::Neg(self.clone())),
        }
    }
}

impl Neg for Real {
    type Output = Real;

    fn neg(self) -> Real {
        -&self
    }
}
