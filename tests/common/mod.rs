use axum::{routing::get, Router};

// Allow dead_code for utilities used by other test files
#[allow(dead_code)]
pub async fn fake_miner(body: &'static str) -> String {
    let app = Router::new().route("/api/v1/status", get(move || async move { body }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake miner listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
