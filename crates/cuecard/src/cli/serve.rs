//! `cuecard serve`.

use cuecard::{CuecardConfig, CuecardResult, serve};

/// Run the HTTP API, optionally on a different port.
pub async fn run_server(config: CuecardConfig, port: Option<u16>) -> CuecardResult<()> {
    let config = match port {
        Some(port) => {
            let server = config.server().clone().with_port(port);
            config.with_server(server)
        }
        None => config,
    };

    serve(config).await
}
