//! soleconnect-content - static editorial content for SoleConnect.
//!
//! Everything here is compiled into the binary: blog posts behind a
//! compile-time slug index, and the FAQ categories. There is no CMS;
//! editorial changes ship as releases.

pub mod blog;
pub mod faq;

pub use blog::BlogPost;
pub use faq::{FaqCategory, FaqItem};
