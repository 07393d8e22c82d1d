use std::sync::Arc;

use inquiry_flow::collaborators::smtp::{SmtpConfig, SmtpSender};
use inquiry_flow::collaborators::webhook::{HubConfig, WebhookActivator, WebhookAnalyticsSink};
use inquiry_flow::collaborators::{ConsoleSender, EmailSender, LogActivator, WorkflowActivator};
use inquiry_flow::config::{BrandProfile, ServerConfig};
use inquiry_flow::pipeline::composer::ReplyComposer;
use inquiry_flow::pipeline::engine::OrchestrationEngine;
use inquiry_flow::server::intake_routes;
use inquiry_flow::status::StatusRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install rustls crypto provider before any TLS usage
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let server_config = ServerConfig::from_env()?;
    let brand = BrandProfile::from_env();

    eprintln!("📬 Inquiry Flow v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Brand: {}", brand.name);
    eprintln!("   Intake API: http://0.0.0.0:{}/api/inquiries", server_config.port);
    eprintln!("   Metrics API: http://0.0.0.0:{}/api/metrics", server_config.port);

    // Outbound email: SMTP relay when configured, console fallback otherwise.
    let sender: Arc<dyn EmailSender> = match SmtpConfig::from_env() {
        Some(config) => {
            eprintln!("   Email: SMTP relay {}:{}", config.host, config.port);
            Arc::new(SmtpSender::new(config))
        }
        None => {
            eprintln!("   Email: console only (SMTP_HOST not set)");
            Arc::new(ConsoleSender)
        }
    };

    // Trigger activation: automation hub when configured, log fallback.
    let activator: Arc<dyn WorkflowActivator> = match HubConfig::from_env() {
        Some(config) => {
            eprintln!("   Automation hub: {}", config.base_url);
            Arc::new(WebhookActivator::new(config))
        }
        None => {
            eprintln!("   Automation hub: log only (AUTOMATION_HUB_URL not set)");
            Arc::new(LogActivator)
        }
    };

    let registry = StatusRegistry::new();
    let mut engine = OrchestrationEngine::new(ReplyComposer::new(brand), sender, activator)
        .with_status_registry(registry.clone());

    if let Some(sink) = WebhookAnalyticsSink::from_env() {
        eprintln!("   Analytics: enabled");
        engine = engine.with_analytics(Arc::new(sink));
    } else {
        eprintln!("   Analytics: disabled (ANALYTICS_URL not set)");
    }
    eprintln!();

    let app = intake_routes(Arc::new(engine), registry);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", server_config.port)).await?;
    tracing::info!(port = server_config.port, "Intake server started");
    axum::serve(listener, app).await?;

    Ok(())
}
