//! Print the OpenAPI document as JSON.

use catalog_api::ApiDoc;
use utoipa::OpenApi;

fn main() {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("failed to serialise OpenAPI document: {err}");
            std::process::exit(1);
        }
    }
}
