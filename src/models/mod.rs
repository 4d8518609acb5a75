pub mod job;
pub mod profile;

pub use job::{CompensationType, EmploymentType, ExperienceLevel, Job, JobWithOwner, LocationType};
pub use profile::{Profile, Role};
