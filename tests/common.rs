use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use tempfile::TempDir;

use orbit_crm::db::DbPool;
use orbit_crm::models::auth::AuthenticatedUser;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A migrated SQLite database in a temporary directory, removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    #[allow(dead_code)]
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let database_url = dir.path().join(name).to_string_lossy().into_owned();

        let manager = ConnectionManager::<SqliteConnection>::new(&database_url);
        let pool = Pool::builder()
            .build(manager)
            .expect("Failed to build connection pool");

        {
            let mut conn = pool.get().expect("Failed to get connection");
            conn.run_pending_migrations(MIGRATIONS)
                .expect("Failed to run migrations");
        }

        Self { _dir: dir, pool }
    }

    #[allow(dead_code)]
    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// Issues an HS256 bearer token with the given roles, valid for one hour.
#[allow(dead_code)]
pub fn auth_token(hub_id: i32, roles: &[&str], secret: &str) -> String {
    let claims = AuthenticatedUser {
        sub: "user-1".to_string(),
        email: "user@example.com".to_string(),
        name: "Test User".to_string(),
        hub_id,
        roles: roles.iter().map(|r| r.to_string()).collect(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
    };
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to encode token")
}
