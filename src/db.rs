use log::{info, warn};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityName, Schema,
};
use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::config::AppConfig;
use crate::entity::{memo, user};

pub async fn connect_db(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let url = config.database_url();
    ensure_sqlite_path(&url);

    let mut options = ConnectOptions::new(url);
    options
        .max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(config.connect_timeout())
        .acquire_timeout(config.connect_timeout())
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(options).await?;
    init_schema(&db).await?;
    Ok(db)
}

fn ensure_sqlite_path(url: &str) {
    let Some(raw) = sqlite_file_path(url) else {
        return;
    };
    let path = Path::new(raw);
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("create sqlite dir {} failed: {}", parent.display(), e);
        }
    }
    if let Err(e) = OpenOptions::new().create(true).append(true).open(path) {
        warn!("create sqlite file {} failed: {}", path.display(), e);
    }
}

fn sqlite_file_path(url: &str) -> Option<&str> {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    Some(path)
}

/// Creates every known table that does not exist yet. There is no migration
/// history; existing tables are left as they are.
pub async fn init_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let tables = [
        (memo::Entity.table_name().to_string(), schema.create_table_from_entity(memo::Entity)),
        (user::Entity.table_name().to_string(), schema.create_table_from_entity(user::Entity)),
    ];

    for (name, mut stmt) in tables {
        stmt.if_not_exists();
        db.execute(backend.build(&stmt)).await?;
        info!("table `{}` ready", name);
    }
    Ok(())
}
