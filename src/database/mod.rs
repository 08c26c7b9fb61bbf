pub mod activities_repo;
pub mod participations_repo;
pub mod schema;
pub mod seed;
pub mod users_repo;
