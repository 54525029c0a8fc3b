#[tokio::main]
async fn main() -> anyhow::Result<()> {
    arogya_server::start().await
}
