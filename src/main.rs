use dotenvy::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;

use mergington::database::{schema, seed};
use mergington::web;

#[tokio::main]
async fn main() {
    // Load .env file
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();

    // 2. Connect to the database
    let db_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/activities.db".to_string());
    println!("Connecting to database: {}", db_url);

    // The database file lives next to the app; make sure its directory exists.
    if let Some(path) = db_url.strip_prefix("sqlite://") {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).expect("Cannot create database directory");
            }
        }
    }

    let options = SqliteConnectOptions::from_str(&db_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("Cannot connect to DB");

    // 3. Create tables and seed the first-run catalog
    schema::initialize(&pool)
        .await
        .expect("Cannot create tables");
    seed::seed_if_empty(&pool)
        .await
        .expect("Cannot seed activities");

    // 4. Build the application
    let app = web::app(pool);

    // 5. Start the server (with fallback port)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Cannot parse host/port");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "⚠️  Could not bind on {}: {}. Trying fallback {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("Cannot parse fallback");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("Cannot bind on fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    println!("🚀 Server running on http://{}", bound_addr);
    println!("📍 Activities overview at http://{}/activities", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
