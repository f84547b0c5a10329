//! 定义了整个 `episode-helper` 库的错误类型 `EpisodeHelperError`。

use thiserror::Error;

/// `episode-helper` 库的通用错误枚举。
#[derive(Error, Debug)]
pub enum EpisodeHelperError {
    /// 输入不是一个合法的 URL (源自 `url::ParseError`)
    #[error("无效的 URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// URL 合法但主机名不属于任何已知平台
    #[error("无法识别视频平台: {0}")]
    UnsupportedPlatform(String),

    /// 检测到了平台，但没有注册对应的提供商
    #[error("暂不支持该平台: '{0}'")]
    ProviderNotSupported(String),

    /// 无法从 URL 中提取平台所需的标识符
    #[error("标识符提取失败: {0}")]
    Extraction(String),

    /// 网络请求失败 (源自 `reqwest::Error`)
    #[error("网络请求失败: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// JSON 解析失败 (源自 `serde_json::Error`)
    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// 上游接口可达，但返回了错误或非成功状态
    #[error("API 返回了错误: {0}")]
    ApiError(String),

    /// 上游响应缺少预期的字段
    #[error("上游响应数据异常: {0}")]
    UpstreamShape(String),

    /// 内部错误
    #[error("内部错误: {0}")]
    Internal(String),
}

/// `EpisodeHelperError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, EpisodeHelperError>;
