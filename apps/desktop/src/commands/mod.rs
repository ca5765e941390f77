//! # Commands
//!
//! Handler functions the controller invokes for each button. Each takes the
//! store plus plain values (form fields, target id), never widget handles.
//!
//! - [`product`] - save, remove, load, fetch

pub mod product;

pub use product::{fetch_product, load_products, remove_product, save_product};
