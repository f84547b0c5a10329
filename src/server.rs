//! 基于 axum 的 HTTP 前端。
//!
//! 只有两个接口：`/api/video` 把解析流水线包装成 JSON API，
//! `/health` 用于存活检查。所有业务逻辑都在 [`EpisodeHelper`] 里，
//! 这里只做参数校验和状态码映射。

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{Method, StatusCode, header},
    routing::get,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::{EpisodeHelper, model::episode::EpisodeList};

/// 服务默认监听端口，可用环境变量 `PORT` 覆盖。
pub const DEFAULT_PORT: u16 = 7788;

/// `/api/video` 的查询参数。
#[derive(Debug, Deserialize)]
pub struct VideoQuery {
    /// 需要解析的视频页面 URL。
    pub url: Option<String>,
}

/// 解析成功时的响应体。
#[derive(Debug, Serialize)]
pub struct VideoResponse {
    /// 恒为 `true`。
    pub success: bool,
    /// 规范化后的剧集列表。
    pub data: EpisodeList,
}

/// 参数缺失或解析失败时的响应体。
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// 恒为 `false`。
    pub success: bool,
    /// 人类可读的错误信息。
    pub message: String,
}

/// `/health` 的响应体。
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 恒为 `true`。
    pub success: bool,
    /// 固定的存活提示。
    pub message: String,
    /// RFC 3339 格式的当前时间。
    pub timestamp: String,
}

/// 构建完整的服务路由。
///
/// 服务会被浏览器脚本跨站调用，所以放开 GET 的 CORS。
pub fn router(helper: Arc<EpisodeHelper>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/video", get(video_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(helper)
}

/// 绑定端口并运行服务，直到进程退出。
pub async fn serve(helper: EpisodeHelper, port: u16) -> std::io::Result<()> {
    let app = router(Arc::new(helper));
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("视频剧集解析服务启动成功");
    info!("服务地址: http://localhost:{port}");
    info!("健康检查: http://localhost:{port}/health");
    info!("使用示例: http://localhost:{port}/api/video?url=https://www.iqiyi.com/v_bb6gsxzz78.html");

    axum::serve(listener, app).await
}

async fn video_handler(
    State(helper): State<Arc<EpisodeHelper>>,
    Query(query): Query<VideoQuery>,
) -> Result<Json<VideoResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(url) = query.url else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                success: false,
                message: "缺少视频URL参数".to_string(),
            }),
        ));
    };

    match helper.resolve_episodes(&url).await {
        Ok(data) => Ok(Json(VideoResponse {
            success: true,
            data,
        })),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                success: false,
                message: e.to_string(),
            }),
        )),
    }
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Server is running".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
