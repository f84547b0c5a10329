//! 视频剧集解析服务的可执行入口。

use episode_helper_rs::{EpisodeHelper, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,episode_helper_rs=debug")),
        )
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(server::DEFAULT_PORT);

    let helper = EpisodeHelper::new()?;
    server::serve(helper, port).await?;
    Ok(())
}
