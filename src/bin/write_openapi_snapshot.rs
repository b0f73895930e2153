// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use newsroom_core::presentation::http::openapi;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    openapi::write_openapi_snapshot()?;
    println!("OpenAPI snapshot written to {}", openapi::snapshot_path());
    Ok(())
}
