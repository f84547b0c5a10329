//! 此模块定义了所有用于反序列化优酷开放接口响应的数据结构。

use serde::Deserialize;

use crate::providers::NumOrString;

/// videos/show.json 接口的顶层响应。
#[derive(Debug, Deserialize)]
pub struct ShowLookupResponse {
    /// 视频所属节目的信息。
    pub show: Option<Show>,
}

/// 节目信息。
#[derive(Debug, Deserialize)]
pub struct Show {
    /// 节目 ID，请求剧集列表时使用。
    pub id: Option<NumOrString>,
}

/// shows/videos.json 接口的顶层响应。
#[derive(Debug, Deserialize)]
pub struct ShowVideosResponse {
    /// 剧集条目数组。
    pub videos: Option<Vec<ShowVideo>>,
}

/// 单个剧集条目。
#[derive(Debug, Clone, Deserialize)]
pub struct ShowVideo {
    /// 副标题。
    pub rc_title: Option<String>,
    /// 集数序号，上游有时给数字、有时给字符串。
    pub seq: Option<NumOrString>,
    /// 播放页链接。
    pub link: Option<String>,
}
