use academy_match::config::{Settings, StoreBackend};
use academy_match::core::Matcher;
use academy_match::routes::{self, matches::AppState};
use academy_match::services::{
    InMemoryProfileStore, MentorMatchingService, PostgresProfileStore, ProfileStore, StoreError,
    SupabaseClient, SupabaseTables,
};
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

async fn build_store(settings: &Settings) -> Result<Arc<dyn ProfileStore>, StoreError> {
    // validate() guarantees the section for the selected backend is present
    match (settings.store.backend, &settings.supabase, &settings.database, &settings.memory) {
        (StoreBackend::Supabase, Some(supabase), _, _) => {
            let tables = SupabaseTables {
                candidate_profiles: supabase.candidate_table.clone(),
                mentor_profiles: supabase.mentor_table.clone(),
            };
            let client = SupabaseClient::new(
                supabase.url.clone(),
                supabase.api_key.clone(),
                tables,
                Duration::from_secs(supabase.timeout_secs.unwrap_or(30)),
            )?;
            info!("Supabase profile store initialized ({})", supabase.url);
            Ok(Arc::new(client))
        }
        (StoreBackend::Postgres, _, Some(database), _) => {
            let store = PostgresProfileStore::from_settings(
                &database.url,
                database.max_connections,
                database.min_connections,
                database.acquire_timeout_secs,
            )
            .await?;
            info!("PostgreSQL profile store initialized");
            Ok(Arc::new(store))
        }
        (StoreBackend::Memory, _, _, Some(memory)) => {
            let store = InMemoryProfileStore::from_json_file(&memory.fixtures_path)?;
            info!("In-memory profile store initialized from {}", memory.fixtures_path);
            Ok(Arc::new(store))
        }
        (backend, ..) => Err(StoreError::Fixture(format!(
            "no settings for store backend {:?}",
            backend
        ))),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the configured level applies
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting academy-match mentor matching service...");

    let store = build_store(&settings).await.map_err(|e| {
        error!("Failed to initialize profile store: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    // Initialize matcher with configured weights
    let weights = settings.scoring_weights();
    let matcher = Matcher::new(weights, settings.reason_thresholds());

    info!("Matcher initialized with weights: {:?}", weights);

    let app_state = AppState {
        service: MentorMatchingService::new(store, matcher),
        limits: settings.matching.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
