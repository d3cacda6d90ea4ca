use anyhow::Result;
use petabot::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
