use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    // run_cli reads DATABASE_URL; fall back to the KANRI_DATABASE_* parts
    // when the caller has not set it explicitly.
    if std::env::var("DATABASE_URL").is_err() {
        unsafe {
            std::env::set_var("DATABASE_URL", migration::db::database_url_from_env());
        }
    }
    cli::run_cli(migration::Migrator).await;
}
