//! RBAC administration backend.
//! Reads configuration from TOML file (~/.config/rbac-admin/config.toml).

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use rbac_admin::auth::jwt::JwtConfig;
use rbac_admin::infrastructure::database::migrator::Migrator;
use rbac_admin::{create_api_router, default_config_path, init_database, AppConfig, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("RBAC_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting RBAC administration backend...");

    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let jwt_config = JwtConfig {
        secret: app_cfg.security.jwt_secret.clone(),
        expiration_hours: app_cfg.security.jwt_expiration_hours,
        issuer: "rbac-admin".to_string(),
    };
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // Create default admin account if no users exist
    seed_default_admin(&db, &app_cfg).await;

    // ── REST API server ────────────────────────────────────────
    let router = create_api_router(db.clone(), jwt_config);

    let addr = format!("{}:{}", app_cfg.server.host, app_cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("RBAC administration backend shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}

/// Seed a default admin (person + user + Administrator rol + assignment)
/// when the user table is empty.
async fn seed_default_admin(db: &sea_orm::DatabaseConnection, app_cfg: &AppConfig) {
    use chrono::Utc;
    use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

    use rbac_admin::auth::password::hash_password;
    use rbac_admin::infrastructure::database::entities::{person, rol, user, user_rol};

    let users_count = user::Entity::find().count(db).await.unwrap_or(0);
    if users_count > 0 {
        return;
    }

    info!("Creating default admin account...");

    let password_hash = match hash_password(&app_cfg.admin.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash admin password: {}", e);
            return;
        }
    };

    let now = Utc::now();

    let admin_person = person::ActiveModel {
        first_name: Set("System".to_string()),
        middle_name: Set(None),
        last_name: Set("Administrator".to_string()),
        email: Set(app_cfg.admin.email.clone()),
        phone: Set(None),
        identification_type: Set("SYSTEM".to_string()),
        identification_number: Set(1),
        signing: Set(None),
        active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
        ..Default::default()
    };
    let admin_person = match admin_person.insert(db).await {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to create admin person: {}", e);
            return;
        }
    };

    let admin_rol = rol::ActiveModel {
        rol_type: Set("Administrator".to_string()),
        description: Set("Full access to the administration backend".to_string()),
        active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
        ..Default::default()
    };
    let admin_rol = match admin_rol.insert(db).await {
        Ok(r) => r,
        Err(e) => {
            error!("Failed to create admin rol: {}", e);
            return;
        }
    };

    let admin_user = user::ActiveModel {
        username: Set(app_cfg.admin.username.clone()),
        email: Set(app_cfg.admin.email.clone()),
        password_hash: Set(password_hash),
        person_id: Set(admin_person.id),
        active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
        ..Default::default()
    };
    let admin_user = match admin_user.insert(db).await {
        Ok(u) => u,
        Err(e) => {
            error!("Failed to create admin user: {}", e);
            return;
        }
    };

    let assignment = user_rol::ActiveModel {
        user_id: Set(admin_user.id),
        rol_id: Set(admin_rol.id),
        active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
        ..Default::default()
    };
    match assignment.insert(db).await {
        Ok(_) => {
            info!("Default admin created: {}", app_cfg.admin.email);
            warn!("Please change the admin password immediately!");
        }
        Err(e) => {
            error!("Failed to assign admin rol: {}", e);
        }
    }
}
