use std::env;
use std::fs;
use std::path::Path;

use figment::{
    Figment,
    providers::{Env as FigmentEnv, Format, Json, Serialized, Toml},
};
use tracing::info;

use imgstack_application::error::{AppError, AppResult};
use imgstack_application::infrastructure_config::Config;

pub fn load_config() -> AppResult<Config> {
    generate_env_template_if_missing()?;

    let default_config = Config::default();
    let mut figment = Figment::from(Serialized::defaults(default_config));

    if Path::new("config.toml").exists() {
        figment = figment.merge(Toml::file("config.toml"));
    }

    if Path::new("config.json").exists() {
        figment = figment.merge(Json::file("config.json"));
    }

    figment = figment.merge(FigmentEnv::prefixed("IMGSTACK_").split("__"));

    // A bare PORT variable wins, for platforms that inject one.
    if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        figment = figment.merge(("server.port", port));
    }

    let config: Config = figment.extract().map_err(|e| AppError::ConfigError {
        message: format!("Failed to load configuration: {e}"),
    })?;

    config.validate()?;
    Ok(config)
}

fn generate_env_template_if_missing() -> AppResult<()> {
    let env_file = ".env";
    let template_file = ".env.example";

    if Path::new(env_file).exists() || !Path::new(template_file).exists() {
        return Ok(());
    }

    fs::copy(template_file, env_file).map_err(|e| AppError::ConfigError {
        message: format!("Failed to generate .env file from template: {e}"),
    })?;

    info!("Generated .env from template. Adjust it before deploying.");
    Ok(())
}
