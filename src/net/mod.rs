//! Net bitmaps and the folding validator.
//!
//! A net is a planar polyomino that folds into the surface of a box.
//! [`bitmap::Net`] stores the polyomino, [`builder::build_net`] materializes
//! one from a spanning tree, and [`validator::check_net`] decides whether an
//! arbitrary bitmap folds into a given face graph.

pub mod bitmap;
pub mod builder;
pub mod validator;

pub use bitmap::Net;
pub use builder::build_net;
pub use validator::check_net;
