use crate::error;
use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector
///
/// Popping an empty stack reports the stack's own error, such as
/// `NEXT WITHOUT FOR`.

pub struct Stack<T> {
    overflow_message: &'static str,
    underflow: ErrorCode,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str, underflow: ErrorCode) -> Stack<T> {
        Stack {
            overflow_message,
            underflow,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() > self.max_len() {
            Err(error!(OutOfMemory; self.overflow_message))
        } else {
            Ok(())
        }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.vec.last_mut()
    }
    pub fn truncate(&mut self, len: usize) {
        self.vec.truncate(len)
    }
    /// Drops the topmost entry matching `reopens`, and everything above
    /// it, provided it sits at or above `base`. A loop re-entered by a
    /// jump replaces its own stale record this way.
    pub fn unwind_to<P: FnMut(&T) -> bool>(&mut self, base: usize, reopens: P) {
        if let Some(index) = self.vec.iter().rposition(reopens) {
            if index >= base {
                self.vec.truncate(index);
            }
        }
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        self.vec.push(val);
        self.overflow_check()
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(Error::new(self.underflow)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underflow_reports_own_error() {
        let mut s: Stack<usize> = Stack::new("TOO MANY GOSUBS", ErrorCode::ReturnWithoutGosub);
        assert_eq!(s.pop().unwrap_err().code(), ErrorCode::ReturnWithoutGosub);
        s.push(7).unwrap();
        s.push(9).unwrap();
        s.truncate(1);
        assert_eq!(s.pop().unwrap(), 7);
        assert!(s.is_empty());
    }

    #[test]
    fn test_unwind_to_reopened_entry() {
        let mut s: Stack<usize> = Stack::new("TOO MANY LOOPS", ErrorCode::NextWithoutFor);
        for n in [3, 5, 8, 5, 9] {
            s.push(n).unwrap();
        }
        s.unwind_to(0, |n| *n == 5);
        assert_eq!(s.len(), 3);
        s.unwind_to(1, |n| *n == 3);
        assert_eq!(s.len(), 3);
        s.unwind_to(0, |n| *n == 42);
        assert_eq!(s.len(), 3);
    }
}
