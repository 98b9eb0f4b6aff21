pub mod courses;
pub mod docs;
pub mod schedules;

pub use courses::*;
pub use docs::*;
pub use schedules::*;
