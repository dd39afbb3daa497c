#[tokio::main]
async fn main() -> anyhow::Result<()> {
    borrow_deadline_jobs::start_scheduler().await
}
