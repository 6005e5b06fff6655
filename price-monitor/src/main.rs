use price_monitor::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    print_banner();

    tracing::info!(
        environment = %config.environment,
        inversion_margin_percent = config.inversion_margin_percent,
        "Price monitor starting..."
    );

    // 2. 初始化状态 (内置样例数据)
    let state = ServerState::initialize(&config);

    // 3. 启动 HTTP 服务器
    let server = Server::new(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
