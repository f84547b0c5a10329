//! 提供商模块
//!
//! 该模块定义了与各视频平台后端交互的核心抽象。

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    error::Result,
    model::episode::{Episode, Platform},
};

pub mod iqiyi;
pub mod mgtv;
pub mod qq;
pub mod youku;

/// 兼容上游接口里"数字或字符串"序列化不一致的字段。
///
/// 优酷的 `seq`、爱奇艺的 `album_order` 等字段在不同内容下
/// 既可能是数字也可能是字符串。
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumOrString {
    /// 数字形式。
    Num(i64),
    /// 字符串形式。
    Str(String),
}

impl NumOrString {
    /// 统一转成字符串表示。
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Str(s) => s,
        }
    }
}

/// 各平台适配器产出的原始中间结果。
///
/// 该类型只在适配器与规范化层之间流动，不对外暴露。
#[derive(Debug, Clone)]
pub enum RawPlatformResult {
    /// 平台自身能给出视频类型（目前只有爱奇艺）。
    Typed {
        /// 平台给出的视频类型标签，例如 "剧集"。
        video_type: String,
        /// 已过滤的剧集条目。
        list: Vec<Episode>,
    },
    /// 平台只返回一个扁平列表，没有类型信息。
    Flat(Vec<Episode>),
}

/// 定义了所有视频平台提供商需要实现的通用接口。
///
/// 新增一个平台只需要实现该 trait 并注册到
/// [`EpisodeHelper`](crate::EpisodeHelper)，不需要修改任何分发逻辑。
#[async_trait]
pub trait Provider: Send + Sync {
    ///
    /// 返回提供商的唯一名称。
    ///
    /// 一个全小写的静态字符串，例如 `"qq"`, `"iqiyi"`。
    ///
    fn name(&self) -> &'static str;

    ///
    /// 返回该提供商服务的平台。
    ///
    fn platform(&self) -> Platform;

    ///
    /// 从视频页面 URL 中提取该平台后端所需的标识符。
    ///
    /// 纯同步函数，不发起网络请求。对爱奇艺来说标识符就是原始 URL
    /// （后续用作 Referer），其余平台则从 URL 中解析内容 ID。
    ///
    /// # 参数
    /// * `url` - 视频页面的完整 URL。
    ///
    /// # 返回
    /// 一个 `Result`，成功时包含平台标识符字符串。
    ///
    fn extract_identifier(&self, url: &str) -> Result<String>;

    ///
    /// 根据标识符请求平台后端，取回原始剧集数据。
    ///
    /// 每次 HTTP 调用都带 10 秒超时；任何一步失败都会使整次调用失败，
    /// 适配器内部不做重试。
    ///
    /// # 参数
    /// * `identifier` - `extract_identifier` 返回的平台标识符。
    ///
    /// # 返回
    /// 一个 `Result`，成功时包含该平台的 [`RawPlatformResult`]。
    ///
    async fn resolve(&self, identifier: &str) -> Result<RawPlatformResult>;
}
