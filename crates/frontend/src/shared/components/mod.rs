pub mod section_error;

pub use section_error::SectionError;
