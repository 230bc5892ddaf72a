use crate::config::AppConfig;
use crate::dataset::load_or_empty;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use astra::{Request, Server};

mod charts;
mod config;
mod dataset;
mod domain;
mod errors;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    // 1️⃣ Load the listings once; a bad file leaves an empty dashboard
    let state = AppState::new(load_or_empty(&config.data_path, &config.columns));

    // 2️⃣ Start the server
    let addr = match config.bind_addr() {
        Ok(addr) => addr,
        Err(e) => {
            log::error!("Invalid listen address {}:{}: {e}", config.host, config.port);
            std::process::exit(1);
        }
    };
    log::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    // 3️⃣ Serve requests against the shared, read-only table
    let result = server.serve(move |req: Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match handle(req, &state) {
            Ok(resp) => {
                log::debug!("{method} {path} -> {}", resp.status());
                resp
            }
            Err(err) => {
                if err.status() >= 500 {
                    log::error!("{method} {path} failed: {err}");
                } else {
                    log::warn!("{method} {path}: {err}");
                }
                error_to_response(err)
            }
        }
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
        std::process::exit(1);
    }

    log::info!("Server shut down cleanly.");
}
