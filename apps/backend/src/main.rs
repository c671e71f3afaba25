#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flashcard_site_backend::run().await
}
