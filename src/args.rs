//! # Argument tuples (`Args`).
//!
//! A published message is an ordered tuple of type-erased values. [`Args`]
//! is that tuple: immutable once built, cheap to clone (one `Arc` bump per
//! fan-out target), with typed accessors that perform the call-time
//! arity/type checks.
//!
//! ## Rules
//! - Values are matched **positionally**: argument 0 of the publish call is
//!   index 0 in the callback.
//! - A mismatch (wrong count, wrong type) is reported by the accessor as a
//!   [`CallError`], which the callback returns to its worker. The publisher
//!   never sees it; `publish` has already returned by then.
//! - Values are shared, not deep-copied, across subscribers. Passing a
//!   cloneable sender (e.g. `tokio::sync::mpsc::UnboundedSender`) as an
//!   argument is the supported readback idiom.
//!
//! ## Example
//! ```
//! use topicbus::{args, Args, CallError};
//!
//! fn greet(args: &Args) -> Result<String, CallError> {
//!     args.expect_len(2)?;
//!     let name = args.get::<String>(0)?;
//!     let times = args.get::<u32>(1)?;
//!     Ok(format!("{name} x{times}"))
//! }
//!
//! let tuple = args!["hello".to_string(), 3u32];
//! assert_eq!(greet(&tuple).unwrap(), "hello x3");
//! ```

use std::{any::Any, fmt, sync::Arc};

use crate::error::CallError;

/// One type-erased argument value.
pub type ArgValue = Arc<dyn Any + Send + Sync>;

/// An immutable, ordered tuple of published arguments.
///
/// Cloning is cheap and preserves sharing: every subscriber of a topic
/// observes the same underlying values.
#[derive(Clone)]
pub struct Args {
    values: Arc<[ArgValue]>,
}

impl Args {
    /// Builds a tuple from already-erased values.
    ///
    /// Prefer the [`args!`](crate::args) macro for literal tuples.
    pub fn new(values: Vec<ArgValue>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// The empty tuple.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of arguments in the tuple.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the tuple carries no arguments.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checks that the tuple carries exactly `expected` arguments.
    ///
    /// Callbacks call this once up front so an arity mismatch is reported
    /// as [`CallError::Arity`] instead of a confusing per-index failure.
    pub fn expect_len(&self, expected: usize) -> Result<(), CallError> {
        if self.values.len() == expected {
            Ok(())
        } else {
            Err(CallError::Arity {
                expected,
                actual: self.values.len(),
            })
        }
    }

    /// Returns the argument at `index` downcast to `T`.
    ///
    /// - Missing index → [`CallError::Arity`]
    /// - Present but wrong type → [`CallError::Type`]
    pub fn get<T: Any + Send + Sync>(&self, index: usize) -> Result<&T, CallError> {
        let value = self.values.get(index).ok_or(CallError::Arity {
            expected: index + 1,
            actual: self.values.len(),
        })?;
        value.downcast_ref::<T>().ok_or(CallError::Type {
            index,
            expected: std::any::type_name::<T>(),
        })
    }

    /// Returns the raw erased value at `index`, if present.
    pub fn value(&self, index: usize) -> Option<&ArgValue> {
        self.values.get(index)
    }
}

impl Default for Args {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args").field("len", &self.len()).finish()
    }
}

/// Builds an [`Args`] tuple from heterogeneous values.
///
/// Each value is moved behind an `Arc`; subscribers read it back with
/// [`Args::get`] at the same position and type.
///
/// ```
/// use topicbus::args;
///
/// let tuple = args![1u64, "label".to_string(), true];
/// assert_eq!(*tuple.get::<bool>(2).unwrap(), true);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::new(::std::vec![
            $(::std::sync::Arc::new($value) as $crate::ArgValue),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_access() {
        let tuple = args![7i32, "seven".to_string()];
        assert_eq!(tuple.len(), 2);
        assert_eq!(*tuple.get::<i32>(0).unwrap(), 7);
        assert_eq!(tuple.get::<String>(1).unwrap(), "seven");
    }

    #[test]
    fn test_type_mismatch_reports_index_and_type() {
        let tuple = args![7i32];
        let err = tuple.get::<String>(0).unwrap_err();
        assert_eq!(
            err,
            CallError::Type {
                index: 0,
                expected: std::any::type_name::<String>(),
            }
        );
    }

    #[test]
    fn test_out_of_range_reports_arity() {
        let tuple = args![7i32];
        let err = tuple.get::<i32>(3).unwrap_err();
        assert_eq!(
            err,
            CallError::Arity {
                expected: 4,
                actual: 1
            }
        );
    }

    #[test]
    fn test_expect_len() {
        let tuple = args![1u8, 2u8];
        assert!(tuple.expect_len(2).is_ok());
        assert_eq!(
            tuple.expect_len(3).unwrap_err(),
            CallError::Arity {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_clone_shares_values() {
        let tuple = args![String::from("shared")];
        let other = tuple.clone();
        let a = tuple.value(0).unwrap();
        let b = other.value(0).unwrap();
        assert!(Arc::ptr_eq(a, b));
    }

    #[test]
    fn test_empty_tuple() {
        let tuple = args![];
        assert!(tuple.is_empty());
        assert!(tuple.expect_len(0).is_ok());
    }
}
