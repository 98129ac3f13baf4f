//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod project_repo;
pub mod project_state_repo;
pub mod project_type_repo;
pub mod proponent_repo;
pub mod region_repo;
pub mod sub_type_repo;
pub mod work_repo;

pub use project_repo::ProjectRepo;
pub use project_state_repo::ProjectStateRepo;
pub use project_type_repo::ProjectTypeRepo;
pub use proponent_repo::ProponentRepo;
pub use region_repo::RegionRepo;
pub use sub_type_repo::SubTypeRepo;
pub use work_repo::WorkRepo;
