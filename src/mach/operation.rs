use super::Val;
use crate::lang::token::Operator;
use std::cmp::Ordering;

/// Binary and unary operators. None of them can fail: strings coerce to
/// numbers and division by zero yields zero.
pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: Val, rhs: Val) -> Val {
        use Operator::*;
        match op {
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Modulus => Operation::modulus(lhs, rhs),
            Equal => Val::from(lhs.compare(&rhs) == Ordering::Equal),
            NotEqual => Val::from(lhs.compare(&rhs) != Ordering::Equal),
            Less => Val::from(lhs.compare(&rhs) == Ordering::Less),
            LessEqual => Val::from(lhs.compare(&rhs) != Ordering::Greater),
            Greater => Val::from(lhs.compare(&rhs) == Ordering::Greater),
            GreaterEqual => Val::from(lhs.compare(&rhs) != Ordering::Less),
            And => Val::from(lhs.is_truthy() && rhs.is_truthy()),
            Or => Val::from(lhs.is_truthy() || rhs.is_truthy()),
        }
    }

    pub fn negate(val: Val) -> Val {
        Val::Number(-val.to_number())
    }

    pub fn not(val: Val) -> Val {
        Val::from(!val.is_truthy())
    }

    /// String if either side is a string.
    pub fn sum(lhs: Val, rhs: Val) -> Val {
        match (lhs, rhs) {
            (Val::Number(l), Val::Number(r)) => Val::Number(l + r),
            (l, r) => Val::String(format!("{}{}", l, r)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Val {
        Val::Number(lhs.to_number() - rhs.to_number())
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Val {
        Val::Number(lhs.to_number() * rhs.to_number())
    }

    pub fn divide(lhs: Val, rhs: Val) -> Val {
        let r = rhs.to_number();
        if r == 0.0 {
            return Val::Number(0.0);
        }
        Val::Number(lhs.to_number() / r)
    }

    pub fn modulus(lhs: Val, rhs: Val) -> Val {
        let r = rhs.to_number();
        if r == 0.0 {
            return Val::Number(0.0);
        }
        Val::Number(lhs.to_number() % r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_string_dominates() {
        assert_eq!(Operation::sum(Val::from("5"), Val::Number(3.0)), Val::from("53"));
        assert_eq!(Operation::sum(Val::Number(5.0), Val::from("3")), Val::from("53"));
        assert_eq!(Operation::sum(Val::Number(5.0), Val::Number(3.0)), Val::Number(8.0));
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(Operation::subtract(Val::from("5"), Val::Number(3.0)), Val::Number(2.0));
        assert_eq!(Operation::multiply(Val::from("x"), Val::Number(3.0)), Val::Number(0.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Operation::divide(Val::Number(7.0), Val::Number(0.0)), Val::Number(0.0));
        assert_eq!(Operation::modulus(Val::Number(7.0), Val::Number(0.0)), Val::Number(0.0));
        assert_eq!(Operation::modulus(Val::Number(7.0), Val::Number(4.0)), Val::Number(3.0));
    }
}
