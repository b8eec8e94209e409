//! A growable, array-backed list with indexed mutation and an in-place
//! partition sort.
//!
//! ```
//! use dynamic_array_list::DynamicArrayList;
//!
//! let mut list = DynamicArrayList::new();
//! list.add(3);
//! list.add(1);
//! list.insert(1, 2).unwrap();
//! list.sort();
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//! ```

pub mod cli;
pub mod error;
pub mod list;
mod sort;

pub use error::ListError;
pub use list::{DEFAULT_CAPACITY, DynamicArrayList, MIN_GROWTH};
