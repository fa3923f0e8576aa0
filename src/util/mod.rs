
//! Various utility functions.

use std::error::{Error as StdError};

/// An error which carries the value that failed to be processed, so
/// that the caller can recover it.
pub trait ErrorWithPayload<T>: StdError {
  fn recover_payload(self) -> T;
}

/// Zips two arrays of the same length together, using the given
/// function.
pub fn zip_with<const C: usize, T, S, U, F>(left: [T; C], right: [S; C], mut f: F) -> [U; C]
where F: FnMut(T, S) -> U {
  let mut right = right.into_iter();
  left.map(|x| {
    match right.next() {
      Some(y) => f(x, y),
      None => unreachable!("arrays have the same length"),
    }
  })
}
