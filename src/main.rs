#[actix_web::main]
async fn main() -> std::io::Result<()> {
    noko_mcp_server::run().await
}
