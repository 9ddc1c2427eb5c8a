//! # sovran-variant
//!
//! A single-value, type-erased container with value semantics.
//!
//! `sovran-variant` provides [`Variant`], a holder for exactly one value of any type chosen at
//! the call site. The value can only be read back by naming the type that was stored. This is
//! a building block for property bags, heterogeneous collections, and APIs that have to defer a
//! type decision to runtime without giving up ordinary clone, move and drop behavior.
//!
//! ## Key Features
//!
//! - **Type-checked**: Retrieval compares the requested type with the stored one at runtime
//! - **Value semantics**: Cloning a `Variant` deep-copies the held value
//! - **Open-ended**: Supports any type that implements `Any + Clone + Send + Sync`
//! - **Explicit storage type**: Force the stored type with [`Variant::from_value`]
//! - **No macros**: Pure runtime solution without complex macro magic
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_variant::Variant;
//!
//! let mut v = Variant::new();
//! assert!(v.is_empty());
//!
//! v.set_value(42i32);
//! assert_eq!(*v.value::<i32>(), 42);
//!
//! // Replacement may change the stored type entirely
//! v.set_value(vec![1.0f64, 2.0]);
//! assert!(v.is_type::<Vec<f64>>());
//! ```
//!
//! ### Copy and Move
//!
//! ```rust
//! use sovran_variant::Variant;
//!
//! let mut a = Variant::with_value(42i32);
//!
//! // Clones are independent
//! let mut b = a.clone();
//! b.set_value(7i32);
//! assert_eq!(*a.value::<i32>(), 42);
//! assert_eq!(*b.value::<i32>(), 7);
//!
//! // Taking moves the value out and leaves the source empty
//! let c = a.take();
//! assert!(a.is_empty());
//! assert_eq!(*c.value::<i32>(), 42);
//! ```
//!
//! ### In-place Construction
//!
//! ```rust
//! use sovran_variant::{make_variant, Variant};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Point { x: i32, y: i32 }
//!
//! impl From<(i32, i32)> for Point {
//!     fn from((x, y): (i32, i32)) -> Self { Point { x, y } }
//! }
//!
//! // Build the target type straight from its arguments
//! let p = make_variant::<Point, _>((1, 2));
//! assert_eq!(p.value::<Point>(), &Point { x: 1, y: 2 });
//!
//! // Or from a closure
//! let v = Variant::new_with(|| vec![1u8, 2, 3]);
//! assert_eq!(v.value::<Vec<u8>>().len(), 3);
//! ```
//!
//! ### Error Handling
//!
//! Asking for the wrong type with [`Variant::value`] is a bug in the caller and panics. When
//! the stored type is only known at runtime, use [`Variant::try_value`]:
//!
//! ```rust
//! use sovran_variant::{Variant, VariantError};
//!
//! let v = Variant::from_value::<String>("config");
//!
//! match v.try_value::<i32>() {
//!     Ok(value) => println!("Value: {}", value),
//!     Err(VariantError::Empty { .. }) => println!("Nothing stored"),
//!     Err(VariantError::TypeMismatch { found, .. }) => println!("Holds a {}", found),
//! }
//! ```

mod canonical;
mod error;
mod holder;
mod variant;

pub use canonical::{Canonical, ConstRef, MutRef, TypeKey};
pub use error::VariantError;
pub use variant::{make_variant, Variant};

// Re-export std::any for convenience
pub use std::any::{Any, TypeId};
