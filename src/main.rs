use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use dotenvy::dotenv;
use tracing::{info, warn};
use uuid::Uuid;

use lodging_ops::config::environment::EnvironmentConfig;
use lodging_ops::database::connection::{create_pool, mask_database_url, run_migrations};
use lodging_ops::models::auth::UserRole;
use lodging_ops::models::user::User;
use lodging_ops::routes::create_app;
use lodging_ops::state::AppState;
use lodging_ops::storage::{MemStorage, PgStorage, Storage};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🏠 Lodging Ops - Backend de operaciones");
    info!("=======================================");

    let config = EnvironmentConfig::from_env()?;

    let storage: Arc<dyn Storage> = match &config.database_url {
        Some(url) => {
            info!("📦 Conectando a PostgreSQL: {}", mask_database_url(url));
            let pool = create_pool(url).await?;
            run_migrations(&pool).await?;
            Arc::new(PgStorage::new(pool))
        }
        None => {
            warn!("📦 DATABASE_URL no configurada; usando storage en memoria");
            Arc::new(MemStorage::default())
        }
    };

    seed_admin(storage.as_ref(), &config).await?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app = create_app(AppState::new(storage, config));

    info!("🌐 Servidor iniciando en http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Siembra el usuario admin del primer arranque; si ya hay usuarios no
/// hace nada
async fn seed_admin(storage: &dyn Storage, config: &EnvironmentConfig) -> Result<()> {
    if !storage.list_users().await?.is_empty() {
        return Ok(());
    }

    let password_hash = bcrypt::hash(&config.seed_admin_password, bcrypt::DEFAULT_COST)?;
    let admin = User {
        id: Uuid::new_v4(),
        username: "admin".to_string(),
        password_hash,
        name: "Administrador".to_string(),
        role: UserRole::Admin,
        property: None,
        created_at: Utc::now(),
    };
    storage.create_user(admin).await?;
    info!("👤 Usuario admin inicial creado");

    Ok(())
}
