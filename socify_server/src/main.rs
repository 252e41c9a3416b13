use std::process::exit;

use dotenvy::dotenv;
use log::{error, info};
use socify_server::{cli::handle_command_line_args, config::ServerConfig, server::run_server};

#[actix_web::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    if handle_command_line_args() {
        return;
    }
    let config = match ServerConfig::try_from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("🪛️ {e}");
            exit(1);
        },
    };

    info!("🚀️ Starting server on {}:{}", config.host, config.port);
    match run_server(config).await {
        Ok(_) => println!("Bye!"),
        Err(e) => {
            error!("🚀️ {e}");
            exit(1);
        },
    }
}
