//! 此模块定义了所有用于反序列化腾讯视频 GetPageData 响应的数据结构。

use serde::Deserialize;

/// GetPageData 的顶层响应。
#[derive(Debug, Deserialize)]
pub struct PageResponse {
    /// 响应数据容器。
    pub data: Option<PageResponseData>,
}

/// 响应数据：一组模块列表。
#[derive(Debug, Deserialize)]
pub struct PageResponseData {
    /// 模块列表集合，剧集数据在第一个元素里。
    #[serde(default)]
    pub module_list_datas: Vec<ModuleListData>,
}

/// 一组模块。
#[derive(Debug, Deserialize)]
pub struct ModuleListData {
    /// 模块集合，剧集数据在第一个元素里。
    #[serde(default)]
    pub module_datas: Vec<ModuleData>,
}

/// 单个模块：携带 tab 描述和条目列表。
#[derive(Debug, Deserialize)]
pub struct ModuleData {
    /// 模块参数，可能内嵌 JSON 编码的 tabs 描述。
    pub module_params: Option<ModuleParams>,
    /// 条目列表容器。
    pub item_data_lists: Option<ItemDataLists>,
}

/// 模块参数。
#[derive(Debug, Deserialize)]
pub struct ModuleParams {
    /// JSON 编码的 tab 描述字符串；长剧集分页时存在。
    pub tabs: Option<String>,
}

/// 条目列表容器。
#[derive(Debug, Deserialize)]
pub struct ItemDataLists {
    /// 条目数组。
    #[serde(default)]
    pub item_datas: Vec<ItemData>,
}

/// 单个条目。
#[derive(Debug, Deserialize)]
pub struct ItemData {
    /// 条目参数。
    pub item_params: Option<ItemParams>,
}

/// 条目参数：标题、角标与构造播放链接所需的 ID。
#[derive(Debug, Deserialize)]
pub struct ItemParams {
    /// 是否为预告片，`"0"` 表示正片。
    pub is_trailer: Option<String>,
    /// 副标题。
    pub video_subtitle: Option<String>,
    /// 标题。
    pub title: Option<String>,
    /// 内容（封面）ID。
    pub cid: Option<String>,
    /// 视频 ID。
    pub vid: Option<String>,
}

/// `module_params.tabs` 里的单个 tab 描述。
#[derive(Debug, Deserialize)]
pub struct Tab {
    /// 请求该 tab 对应分页所需的上下文。
    #[serde(default)]
    pub page_context: String,
}
