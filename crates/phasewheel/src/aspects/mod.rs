pub mod table;
pub mod types;

pub use table::{all_aspects, find_aspect_in, get_aspect_by_id, get_aspect_for_degree};
pub use types::{Aspect, AspectCategory};
