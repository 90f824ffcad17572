//! Type-safe wrappers and enums for players, positions and stat categories.

pub mod filters;
pub mod ids;
pub mod position;
pub mod stat;

pub use filters::SortOrder;
pub use ids::PlayerId;
pub use position::Position;
pub use stat::StatCategory;
