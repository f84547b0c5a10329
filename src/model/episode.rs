//! 定义了整个库通用的、与具体平台无关的核心数据模型。
//!
//! 这些结构体（如 `Episode`, `EpisodeList`）是所有 Provider 在获取到
//! 各自平台的数据后，需要转换成的目标标准格式。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 无法从平台数据中判断视频类型时使用的占位值。
pub const UNKNOWN_VIDEO_TYPE: &str = "未知";

/// 已支持的视频平台枚举。
///
/// `Unknown` 是终态：一旦检测结果为 `Unknown`，解析流程无法继续。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// 爱奇艺 (www.iqiyi.com)
    Iqiyi,
    /// 腾讯视频 (v.qq.com)
    Qq,
    /// 芒果TV (www.mgtv.com)
    Mgtv,
    /// 优酷 (v.youku.com)
    Youku,
    /// 未知平台
    Unknown,
}

impl Platform {
    /// 返回平台的小写标识串，与对外 JSON 中的 `platform` 字段一致。
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iqiyi => "iqiyi",
            Self::Qq => "qq",
            Self::Mgtv => "mgtv",
            Self::Youku => "youku",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 代表一个可播放单元：一部电影，或剧集中的一集。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// 标题（剧集场景下通常是集数序号）。
    pub title: String,
    /// 副标题或角标，可能为空字符串。
    pub tag: String,
    /// 播放页链接。各 Provider 保证进入规范化前该字段非空。
    pub url: String,
}

/// 解析流水线的统一输出：一份规范化后的剧集列表。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeList {
    /// 剧集所在的平台。
    pub platform: Platform,
    /// 视频类型（电影 / 剧集 / 综艺…）。无法分类的平台为 [`UNKNOWN_VIDEO_TYPE`]。
    #[serde(rename = "videoType")]
    pub video_type: String,
    /// 条目数，恒等于 `list.len()`。
    pub count: usize,
    /// 剧集条目列表。
    pub list: Vec<Episode>,
}
