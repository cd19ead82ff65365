//! Section renderers for the storefront page.
//!
//! Every renderer is a pure function of its inputs and re-renders its
//! section wholesale.

mod badge;
mod cart;
mod escape;
mod grid;
mod header;
mod payment;

pub use badge::*;
pub use cart::*;
pub use escape::html_escape;
pub use grid::*;
pub use header::*;
pub use payment::*;
