#[tokio::main]
async fn main() -> anyhow::Result<()> {
    humanizer::run().await
}
