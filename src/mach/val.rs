use std::cmp::Ordering;

/// ## Runtime value
///
/// Every BASIC value is a number or a string. Coercion between the two is
/// loose: arithmetic parses strings (or uses zero), printing formats numbers.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    String(String),
}

impl Default for Val {
    fn default() -> Val {
        Val::Number(0.0)
    }
}

impl Val {
    /// Zero value for a name: `""` for `$` names, `0` otherwise.
    pub fn default_for(name: &str) -> Val {
        if name.ends_with('$') {
            Val::String(String::new())
        } else {
            Val::Number(0.0)
        }
    }

    pub fn from_bool(b: bool) -> Val {
        Val::Number(if b { 1.0 } else { 0.0 })
    }

    pub fn to_number(&self) -> f64 {
        match self {
            Val::Number(n) => *n,
            Val::String(s) => Val::parse_number(s).unwrap_or(0.0),
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Val::Number(n) => Some(*n),
            Val::String(s) => Val::parse_number(s),
        }
    }

    /// Text that reads as a BASIC number: an optional sign, then digits
    /// with at most one `.`. Surrounding whitespace is ignored.
    pub fn parse_number(s: &str) -> Option<f64> {
        let s = s.trim();
        let digits = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
        let mut seen_digit = false;
        let mut seen_point = false;
        for c in digits.chars() {
            match c {
                '0'..='9' => seen_digit = true,
                '.' if !seen_point => seen_point = true,
                _ => return None,
            }
        }
        if !seen_digit {
            return None;
        }
        s.parse().ok()
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Val::Number(n) => *n != 0.0,
            Val::String(s) => !s.is_empty(),
        }
    }

    /// Numbers compare numerically. Anything else compares numerically when
    /// both sides look like numbers, otherwise as case-insensitive text.
    pub fn compare(&self, other: &Val) -> Ordering {
        if let (Some(l), Some(r)) = (self.as_number(), other.as_number()) {
            // NaN sorts above every number and equals itself.
            return match l.partial_cmp(&r) {
                Some(ordering) => ordering,
                None => l.is_nan().cmp(&r.is_nan()),
            };
        }
        let l = self.to_string().to_lowercase();
        let r = other.to_string().to_lowercase();
        l.cmp(&r)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::String(s) => write!(f, "{}", s),
            Val::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Self {
        Val::Number(n)
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Self {
        Val::from_bool(b)
    }
}

impl From<String> for Val {
    fn from(s: String) -> Self {
        Val::String(s)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Val::Number(14.0).to_string(), "14");
        assert_eq!(Val::Number(-3.0).to_string(), "-3");
        assert_eq!(Val::Number(2.5).to_string(), "2.5");
        assert_eq!(Val::String("hi".into()).to_string(), "hi");
    }

    #[test]
    fn test_coercion() {
        assert_eq!(Val::from(" 42 ").to_number(), 42.0);
        assert_eq!(Val::from("abc").to_number(), 0.0);
        assert_eq!(Val::from("-.5").to_number(), -0.5);
        assert_eq!(Val::from("+7.").to_number(), 7.0);
        for text in ["nan", "inf", "Infinity", "1e5", "1.2.3", ".", "-", ""] {
            assert_eq!(Val::parse_number(text), None, "{:?}", text);
        }
    }

    #[test]
    fn test_compare() {
        assert_eq!(Val::from("10").compare(&Val::from("9")), Ordering::Greater);
        assert_eq!(Val::from("abc").compare(&Val::from("abd")), Ordering::Less);
        assert_eq!(Val::from("ABC").compare(&Val::from("abc")), Ordering::Equal);
        assert_eq!(Val::Number(3.0).compare(&Val::from("3")), Ordering::Equal);
        assert_eq!(Val::Number(3.0).compare(&Val::from("x")), Ordering::Less);
        assert_eq!(Val::from("nan").compare(&Val::Number(5.0)), Ordering::Greater);
        assert_eq!(Val::Number(f64::NAN).compare(&Val::Number(5.0)), Ordering::Greater);
        assert_eq!(Val::Number(1.0).compare(&Val::Number(f64::NAN)), Ordering::Less);
        assert_eq!(Val::Number(f64::NAN).compare(&Val::Number(f64::NAN)), Ordering::Equal);
    }
}
