//! 此模块定义了所有用于反序列化爱奇艺接口响应的数据结构。

use std::collections::HashMap;

use serde::Deserialize;

use crate::providers::NumOrString;

/// playervideoinfo 接口的顶层响应。
#[derive(Debug, Deserialize)]
pub struct VideoInfoResponse {
    /// 响应状态，成功时为 `"success"`。
    pub msg: Option<String>,
    /// 视频基础信息。
    pub data: Option<VideoInfo>,
}

/// 视频基础信息。
#[derive(Debug, Deserialize)]
pub struct VideoInfo {
    /// 分类编号，2 表示剧集。
    pub cid: Option<i64>,
    /// 剧集的专辑 ID，仅剧集存在。
    #[serde(rename = "albumId")]
    pub album_id: Option<NumOrString>,
    /// 短标题，单视频场景下作为条目标题。
    #[serde(rename = "shortTitle")]
    pub short_title: Option<String>,
    /// 副标题。
    pub subt: Option<String>,
    /// 播放页链接。
    pub vu: Option<String>,
}

/// selector 分页接口的顶层响应。
#[derive(Debug, Deserialize)]
pub struct SelectorResponse {
    /// 响应数据容器。
    pub data: Option<SelectorData>,
}

/// selector 响应的数据部分。
#[derive(Debug, Deserialize)]
pub struct SelectorData {
    /// 分页的剧集数据。
    pub videos: Option<SelectorVideos>,
}

/// 分页剧集数据：页 key 列表加上 key 到条目数组的映射。
#[derive(Debug, Deserialize)]
pub struct SelectorVideos {
    /// 页 key，决定各分页的拼接顺序。
    #[serde(default)]
    pub page_keys: Vec<String>,
    /// 页 key 到该页条目数组的映射。
    #[serde(default)]
    pub feature_paged: HashMap<String, Vec<SelectorItem>>,
}

/// selector 返回的单个剧集条目。
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorItem {
    /// 条目类型，1 表示正片。
    pub content_type: Option<i64>,
    /// 集数序号。
    pub album_order: Option<NumOrString>,
    /// 副标题。
    pub subtitle: Option<String>,
    /// 播放页链接。
    pub page_url: Option<String>,
}
