mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, render};

use repositories::sqlx_repo::SqlxProfileRepo;
use use_cases::profiles::ProfileHandler;

pub struct AppState {
    pub profile_handler: AppProfileHandler,
}

pub type AppProfileHandler = ProfileHandler<SqlxProfileRepo>;

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let profile_repo = SqlxProfileRepo::new(pool);
        let profile_handler = ProfileHandler::new(profile_repo);

        AppState { profile_handler }
    }
}
