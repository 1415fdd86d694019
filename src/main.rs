#[tokio::main]
async fn main() {
    political_frontier::start_server().await;
}
