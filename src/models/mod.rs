pub mod activities;
pub mod participations;
pub mod users;

pub use activities::ActivityRow;
pub use participations::ParticipationRow;
pub use users::UserRow;
