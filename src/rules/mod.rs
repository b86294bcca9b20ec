//! Rule implementations for catalint.
//!
//! Each rule has a `check_*_issues(ctx)` entry point and a pure function
//! taking only the inputs it needs, which is what the tests exercise.
//!
//! ## Module Structure
//!
//! - `format`: Format strings that do not match their signature
//! - `undeclared`: Catalog ids with no declared signature
//! - `out_of_range`: Ids above the verified range

pub mod format;
pub mod out_of_range;
pub mod undeclared;
