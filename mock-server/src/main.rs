use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("echo server listening on http://{addr}");
    for (method, path, reply) in mock_server::ROUTES {
        println!("  {method:<4} {path:<15} -> {reply}");
    }
    mock_server::run(listener).await
}
