//! services/api/src/bin/openapi.rs
//!
//! Writes the OpenAPI document of the campaign API to disk.
//!
//! ```text
//! openapi [output path]    # defaults to openapi.json
//! ```

use api_lib::web::rest::ApiDoc;
use std::path::Path;
use utoipa::OpenApi;

const DEFAULT_OUTPUT: &str = "openapi.json";

fn write_document(path: &Path) -> Result<usize, Box<dyn std::error::Error>> {
    let document = ApiDoc::openapi();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, document.to_pretty_json()?)?;
    Ok(document.paths.paths.len())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let paths = write_document(Path::new(&output))?;
    println!("Wrote {} API paths to {}", paths, output);
    Ok(())
}
