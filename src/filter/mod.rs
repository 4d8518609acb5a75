pub mod category;
pub mod engine;

pub use category::role_category;
pub use engine::{available_categories, available_skills, JobFilter};
