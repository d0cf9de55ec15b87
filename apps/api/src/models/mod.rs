pub mod product;
pub mod profile;
pub mod routine;

pub use product::Product;
pub use profile::{AgeRange, SkinProfile, SkinType};
pub use routine::{Routine, RoutineItem, RoutineRecommendation};
