//! Print the OpenAPI document.
//!
//! JSON by default; pass `--yaml` for YAML.

use clap::Parser;
use school_locator::ApiDoc;
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Print the school locator OpenAPI document",
    version
)]
struct CliArgs {
    /// Emit YAML instead of pretty-printed JSON.
    #[arg(long)]
    yaml: bool,
}

fn render(args: &CliArgs) -> Result<String, Box<dyn std::error::Error>> {
    let doc = ApiDoc::openapi();
    if args.yaml {
        Ok(doc.to_yaml()?)
    } else {
        Ok(doc.to_pretty_json()?)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    println!("{}", render(&args)?);
    Ok(())
}
