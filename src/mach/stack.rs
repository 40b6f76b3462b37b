use super::Address;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Append-only, size limited vector
///
/// A push onto a full stack is refused; nothing is ever written past
/// `max_len`.

pub struct Stack<T> {
    overflow_message: &'static str,
    max_len: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str, max_len: usize) -> Stack<T> {
        Stack {
            overflow_message,
            max_len,
            vec: vec![],
        }
    }
    pub fn max_len(&self) -> usize {
        self.max_len
    }
    fn overflow_error(&self) -> Error {
        error!(ProgramTooLarge; format!("{} ({} WORDS)", self.overflow_message, self.max_len))
    }
    pub fn get(&self, idx: Address) -> Option<&T> {
        self.vec.get(idx)
    }
    pub fn get_mut(&mut self, idx: Address) -> Option<&mut T> {
        self.vec.get_mut(idx)
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.max_len
    }
    /// Returns the address of the pushed value.
    pub fn push(&mut self, val: T) -> Result<Address> {
        if self.is_full() {
            return Err(self.overflow_error());
        }
        self.vec.push(val);
        Ok(self.vec.len() - 1)
    }
    pub fn into_vec(self) -> Vec<T> {
        self.vec
    }
}
