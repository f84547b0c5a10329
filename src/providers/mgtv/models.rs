//! 此模块定义了所有用于反序列化芒果TV接口响应的数据结构。

use serde::Deserialize;

/// episode/list 接口的顶层响应。
#[derive(Debug, Deserialize)]
pub struct EpisodeListResponse {
    /// 业务状态码，200 表示成功。
    pub code: Option<i64>,
    /// 失败时的提示信息。
    pub msg: Option<String>,
    /// 响应数据容器。
    pub data: Option<EpisodeListData>,
}

/// 响应数据：剧集条目数组。
#[derive(Debug, Deserialize)]
pub struct EpisodeListData {
    /// 剧集条目。
    pub list: Option<Vec<EpisodeItem>>,
}

/// 单个剧集条目。
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeItem {
    /// 是否为完整正片，`"1"` 表示是。
    #[serde(rename = "isIntact")]
    pub is_intact: Option<String>,
    /// 标题（集数序号）。
    pub t1: Option<String>,
    /// 副标题。
    pub t2: Option<String>,
    /// 站内相对路径，需要拼上站点前缀。
    pub url: Option<String>,
}
