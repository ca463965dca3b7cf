//! View-engine dependency seam.
//!
//! A result may carry a plug-in rendering engine instance. Assertions on it
//! come in two flavors: reference identity ("the same configured instance I
//! passed in") and exact runtime type. The trait only demands what the
//! diagnostics need; rendering itself is out of scope for this crate.

use std::any::Any;
use std::fmt::Debug;

/// A pluggable view engine reference held by view-shaped results.
pub trait ViewEngine: Any + Send + Sync + Debug {
    /// Short display name of the concrete engine type, used in diagnostics.
    ///
    /// Implementations usually delegate to
    /// [`short_type_name`](crate::reflect::short_type_name):
    ///
    /// ```rust,ignore
    /// fn type_label(&self) -> String {
    ///     verdict::short_type_name::<Self>()
    /// }
    /// ```
    fn type_label(&self) -> String;
}
