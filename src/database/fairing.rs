use rocket::{
    fairing::{self, Fairing, Info, Kind},
    Build, Rocket,
};

use super::Store;

pub struct StoreFairing {
    connection_string: String,
}

impl StoreFairing {
    pub fn fairing(connection_string: &str) -> Self {
        Self {
            connection_string: connection_string.into(),
        }
    }
}

#[rocket::async_trait]
impl Fairing for StoreFairing {
    fn info(&self) -> Info {
        Info {
            name: "Store",
            kind: Kind::Ignite | Kind::Singleton,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> fairing::Result {
        let store = match Store::connect(&self.connection_string) {
            Ok(store) => store,
            Err(e) => {
                error!("Invalid database connection string: {e}");
                return Err(rocket);
            }
        };

        // An unreachable store must not keep the listener from binding;
        // endpoints that need it fail per-request until it comes back.
        match store.probe().await {
            Ok(()) => info!("Connected to database successfully"),
            Err(e) => match e.as_database_error() {
                Some(db) => error!(
                    "Database connection error: {db} (code: {:?})",
                    db.code()
                ),
                None => error!("Database connection error: {e}"),
            },
        }

        Ok(rocket.manage(store))
    }
}
