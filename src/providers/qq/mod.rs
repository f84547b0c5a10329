//! 腾讯视频提供商模块。
//!
//! 剧集列表通过 GetPageData RPC 获取。长剧集会被拆成多个 tab 分页，
//! 第一页的响应里内嵌一段 JSON 编码的 tab 描述，需要对每个 tab
//! 再发一次请求并按声明顺序合并。

use std::time::Duration;

use async_trait::async_trait;
use futures::future;
use reqwest::{
    Client,
    header::{REFERER, USER_AGENT},
};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::{
    error::{EpisodeHelperError, Result},
    model::episode::{Episode, Platform},
    providers::{Provider, RawPlatformResult},
};

pub mod models;

const PAGE_DATA_URL: &str = "https://pbaccess.video.qq.com/trpc.universal_backend_service.page_server_rpc.PageServer/GetPageData?vdevice_guid=588010f7b30f6afe&video_appid=3000010&vversion_name=8.2.96&vversion_platform=2";

const QQ_REFERER: &str = "https://v.qq.com/";
const MAC_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36";

/// 腾讯视频的提供商实现。
pub struct QQVideo {
    http_client: Client,
}

impl QQVideo {
    /// 创建一个新的 `QQVideo` 提供商实例。
    pub fn new() -> Result<Self> {
        let http_client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { http_client })
    }

    /// 请求单个分页（第一页传空 `page_context`）。
    async fn request_page(&self, cid: &str, page_context: &str) -> Result<models::ModuleData> {
        let payload = json!({
            "page_params": {
                "req_from": "web_vsite",
                "page_id": "vsite_episode_list",
                "page_type": "detail_operation",
                "id_type": "1",
                "cid": cid,
                "page_context": page_context,
                "detail_page_type": "1"
            },
            "has_cache": 1
        });

        let response: models::PageResponse = self
            .http_client
            .post(PAGE_DATA_URL)
            .header(USER_AGENT, MAC_USER_AGENT)
            .header(REFERER, QQ_REFERER)
            .json(&payload)
            .send()
            .await?
            .json()
            .await?;

        response
            .data
            .and_then(|data| data.module_list_datas.into_iter().next())
            .and_then(|modules| modules.module_datas.into_iter().next())
            .ok_or_else(|| {
                EpisodeHelperError::UpstreamShape("GetPageData 响应缺少模块数据".to_string())
            })
    }
}

/// 解析第一页里内嵌的 tab 描述。
///
/// 描述缺失或不是合法 JSON 都视为"只有一页"。
fn parse_tabs(module: &models::ModuleData) -> Option<Vec<models::Tab>> {
    let tabs_str = module.module_params.as_ref()?.tabs.as_deref()?;
    serde_json::from_str(tabs_str).ok()
}

/// 过滤预告片（仅保留 `is_trailer == "0"`）并映射为统一条目。
fn parse_items(module: models::ModuleData) -> Vec<Episode> {
    let items = module
        .item_data_lists
        .map(|lists| lists.item_datas)
        .unwrap_or_default();

    items
        .into_iter()
        .filter_map(|item| item.item_params)
        .filter(|params| params.is_trailer.as_deref() == Some("0"))
        .map(|params| Episode {
            tag: params.video_subtitle.unwrap_or_default(),
            title: params.title.unwrap_or_default(),
            url: format!(
                "https://v.qq.com/x/cover/{}/{}.html",
                params.cid.unwrap_or_default(),
                params.vid.unwrap_or_default()
            ),
        })
        .collect()
}

#[async_trait]
impl Provider for QQVideo {
    fn name(&self) -> &'static str {
        "qq"
    }

    fn platform(&self) -> Platform {
        Platform::Qq
    }

    /// 内容 ID 是路径的第 4 段，例如
    /// `/x/cover/aeuz5ypnru0wxqq/vid.html` 里的 `aeuz5ypnru0wxqq`。
    fn extract_identifier(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url)?;
        parsed
            .path()
            .split('/')
            .nth(3)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                EpisodeHelperError::Extraction(format!("无法从 URL 中提取腾讯视频 cid: {url}"))
            })
    }

    async fn resolve(&self, identifier: &str) -> Result<RawPlatformResult> {
        let first_page = self.request_page(identifier, "").await?;

        let Some(tabs) = parse_tabs(&first_page) else {
            // 没有 tabs，说明只有一页
            return Ok(RawPlatformResult::Flat(parse_items(first_page)));
        };

        debug!("腾讯视频 cid {identifier} 共 {} 个 tab", tabs.len());

        // 并发请求所有 tab 页。任何一个失败则整次解析失败，
        // 合并顺序严格按 tab 的声明顺序，与完成顺序无关。
        let pages = future::try_join_all(
            tabs.iter()
                .map(|tab| self.request_page(identifier, &tab.page_context)),
        )
        .await?;

        let list = pages.into_iter().flat_map(parse_items).collect();
        Ok(RawPlatformResult::Flat(list))
    }
}
