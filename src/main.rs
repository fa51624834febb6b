use axum::Router;
use database_provisioner::{
    config::app_config::AppConfig,
    provisioner::{
        build_provisioner_router,
        interfaces::rest::resources::{
            error_response_resource::ErrorResponseResource,
            provision_database_request_resource::ProvisionDatabaseRequestResource,
            provisioning_report_resource::{ProvisioningReportResource, ProvisioningStepResource},
        },
    },
};
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        database_provisioner::provisioner::interfaces::rest::controllers::provisioner_rest_controller::provision_database,
        database_provisioner::provisioner::interfaces::rest::controllers::provisioner_rest_controller::teardown_database
    ),
    components(
        schemas(
            ProvisionDatabaseRequestResource,
            ProvisioningReportResource,
            ProvisioningStepResource,
            ErrorResponseResource
        )
    ),
    tags(
        (name = "provisioner", description = "PostgreSQL database and user provisioning")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "database_provisioner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();

    let app = Router::new()
        .merge(build_provisioner_router(&config))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(port = config.port, "provisioner listening");
    tracing::info!("swagger UI at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
