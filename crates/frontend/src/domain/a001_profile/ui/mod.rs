pub mod certifications;
pub mod skills;

pub use certifications::Certifications;
pub use skills::Skills;
