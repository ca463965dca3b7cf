//! Runtime type inspection for assertion subjects.
//!
//! The comparators need two capabilities from any asserted value: structural
//! equality against another value of unknown concrete type, and a stable
//! human-readable name for the concrete type. [`ArgumentValue`] packages both
//! behind an object-safe trait with a blanket implementation, so plain data,
//! fixture structs, and `serde_json::Value` all qualify without registration.

use std::any::Any;
use std::fmt::Debug;

/// A value that can sit in a result's argument sequence and be asserted on.
pub trait ArgumentValue: Any + Debug + Send + Sync {
    /// Upcast for exact runtime-type checks.
    fn as_any(&self) -> &dyn Any;

    /// Short display name of the concrete type, e.g. `Vec<ResponseModel>`.
    fn type_label(&self) -> String;

    /// Structural equality: `other` must have the same concrete type and
    /// compare equal under that type's `PartialEq`.
    fn value_eq(&self, other: &dyn ArgumentValue) -> bool;
}

impl<T> ArgumentValue for T
where
    T: Any + Debug + PartialEq + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_label(&self) -> String {
        short_type_name::<T>()
    }

    fn value_eq(&self, other: &dyn ArgumentValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }
}

/// Short name of `T`: module paths stripped, including inside generic
/// parameters. `alloc::vec::Vec<app::ResponseModel>` becomes
/// `Vec<ResponseModel>`.
pub fn short_type_name<T: ?Sized + 'static>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;

    for (index, ch) in full.char_indices() {
        match ch {
            ':' => segment_start = index + ch.len_utf8(),
            '<' | '>' | '(' | ')' | '[' | ']' | ',' | ' ' | '&' | ';' => {
                out.push_str(&full[segment_start..index]);
                out.push(ch);
                segment_start = index + ch.len_utf8();
            }
            _ => {}
        }
    }
    out.push_str(&full[segment_start..]);
    out
}

/// Build an ordered argument sequence from heterogeneous values.
///
/// # Example
///
/// ```rust,ignore
/// use verdict::arguments;
///
/// let expected = arguments![1, "text", 15];
/// ```
#[macro_export]
macro_rules! arguments {
    ($($value:expr),* $(,)?) => {
        vec![$(::std::boxed::Box::new($value) as ::std::boxed::Box<dyn $crate::ArgumentValue>),*]
    };
}
