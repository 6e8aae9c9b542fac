use axum::serve;
use tokio::net::TcpListener;
use weather_backend::routes::make_app;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let app = match make_app().await {
        Ok(app) => app,
        Err(err) => panic!("Failed to initialize application: {}", err),
    };

    let addr = std::env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    // Bind to a TCP listener
    let listener = TcpListener::bind(&addr).await;
    println!("Listening on http://{}", addr);

    match listener {
        Ok(res) => serve(res, app).await.unwrap(),
        Err(err) => panic!("{}", err),
    }
}
