use mcp_strapi_server::config::ServerConfig;
use mcp_strapi_server::server::{McpServer, ServerState};
use mcp_strapi_server::strapi::client::StrapiClient;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcp-strapi-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let client = match StrapiClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcp-strapi-server: cannot build HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let mut server = McpServer::new(ServerState::new(client));
    if let Err(e) = server.run().await {
        eprintln!("mcp-strapi-server: fatal error: {e}");
        std::process::exit(1);
    }
}
