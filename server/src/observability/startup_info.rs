use tracing::info;

use imgstack_application::composite::normalize::NormalizationPolicy;
use imgstack_application::infrastructure_config::Config;

pub fn print_api_info(config: &Config) {
    let base_url = format!("http://{}", config.server_address());
    info!("Endpoints:");
    info!("  GET  {}/          liveness", base_url);
    info!("  POST {}/composite stack header + AI body + footer", base_url);
    #[cfg(feature = "docs")]
    info!("  Swagger UI: {}/docs", base_url);

    let policy = match config.pipeline.normalization {
        NormalizationPolicy::ResizeToCover => "resize-to-cover",
        NormalizationPolicy::FixedRegionExtract => "fixed-region-extract",
    };
    info!("Body normalization policy: {policy}");
    info!(
        "Max request body: {} MiB",
        config.http.max_body_bytes / (1024 * 1024)
    );
}
