use poem::{
    EndpointExt, Route, Server as PoemServer, get, handler, listener::TcpListener,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

/// Plain-text liveness probe at the root path.
#[handler]
fn liveness() -> &'static str {
    "Fertilizer backend is running successfully!"
}

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service =
            OpenApiService::new(container.product_api, "Fertilizer Catalog API", "0.1.0")
                .server(format!("http://{}/api", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .at("/", get(liveness))
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(config.cors)
            .with(Tracing);
        println!("Server running at http://{}", addr);
        println!("Swagger UI at http://{}/docs", addr);
        println!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::test::TestClient;

    #[tokio::test]
    async fn should_answer_liveness_probe_with_plain_text() {
        let app = Route::new().at("/", get(liveness));
        let cli = TestClient::new(app);

        let resp = cli.get("/").send().await;

        resp.assert_status_is_ok();
        resp.assert_text("Fertilizer backend is running successfully!")
            .await;
    }
}
