//! 芒果TV提供商模块。
//!
//! 四个平台里协议最简单的一个：从 URL 模式匹配出数字视频 ID，
//! 再请求一次剧集列表接口即可。

use std::{sync::LazyLock, time::Duration};

use async_trait::async_trait;
use regex::Regex;
use reqwest::{
    Client,
    header::{REFERER, USER_AGENT},
};

use crate::{
    error::{EpisodeHelperError, Result},
    model::episode::{Episode, Platform},
    providers::{Provider, RawPlatformResult},
};

pub mod models;

const EPISODE_LIST_URL: &str = "https://pcweb.api.mgtv.com/episode/list";

const SITE_PREFIX: &str = "https://www.mgtv.com";
const MGTV_REFERER: &str = "https://www.mgtv.com/";
const MAC_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36";

// `/b/<showId>/<id>` 形式更具体，优先匹配；ID 后面只允许 .html、? 或结尾
static SHOW_PATH_RE: LazyLock<fancy_regex::Regex> =
    LazyLock::new(|| fancy_regex::Regex::new(r"/b/\d+/(\d+)(?=\.html|\?|$)").unwrap());
static PLAIN_PATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/(\d+)\.html").unwrap());

/// 芒果TV的提供商实现。
pub struct Mgtv {
    http_client: Client,
}

impl Mgtv {
    /// 创建一个新的 `Mgtv` 提供商实例。
    pub fn new() -> Result<Self> {
        let http_client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { http_client })
    }

    /// 请求剧集列表接口（第 0 页，单页 40 条）。
    async fn fetch_episode_list(&self, video_id: &str) -> Result<Vec<models::EpisodeItem>> {
        let response: models::EpisodeListResponse = self
            .http_client
            .get(EPISODE_LIST_URL)
            .query(&[
                ("_support", "10000000"),
                ("version", "5.5.35"),
                ("video_id", video_id),
                ("page", "0"),
                ("size", "40"),
                ("platform", "4"),
                ("src", "mgtv"),
                ("allowedRC", "1"),
            ])
            .header(USER_AGENT, MAC_USER_AGENT)
            .header(REFERER, MGTV_REFERER)
            .send()
            .await?
            .json()
            .await?;

        if response.code != Some(200) {
            let msg = response.msg.unwrap_or_else(|| "未知错误".to_string());
            return Err(EpisodeHelperError::ApiError(format!(
                "芒果视频接口返回失败: {msg}"
            )));
        }

        response
            .data
            .and_then(|data| data.list)
            .ok_or_else(|| {
                EpisodeHelperError::UpstreamShape("episode/list 响应缺少剧集数据".to_string())
            })
    }
}

/// 只保留完整正片（`isIntact == "1"`），拼上站点前缀后丢弃链接仍为空的条目。
fn parse_items(items: Vec<models::EpisodeItem>) -> Vec<Episode> {
    items
        .into_iter()
        .filter(|item| item.is_intact.as_deref() == Some("1"))
        .map(|item| Episode {
            tag: item.t2.unwrap_or_default(),
            title: item.t1.unwrap_or_default(),
            url: match item.url {
                Some(path) if !path.is_empty() => format!("{SITE_PREFIX}{path}"),
                _ => String::new(),
            },
        })
        .filter(|episode| !episode.url.is_empty())
        .collect()
}

#[async_trait]
impl Provider for Mgtv {
    fn name(&self) -> &'static str {
        "mgtv"
    }

    fn platform(&self) -> Platform {
        Platform::Mgtv
    }

    fn extract_identifier(&self, url: &str) -> Result<String> {
        if let Ok(Some(captures)) = SHOW_PATH_RE.captures(url)
            && let Some(id) = captures.get(1)
        {
            return Ok(id.as_str().to_string());
        }

        if let Some(captures) = PLAIN_PATH_RE.captures(url) {
            return Ok(captures[1].to_string());
        }

        Err(EpisodeHelperError::Extraction(format!(
            "无法从 URL 中提取芒果视频 ID: {url}"
        )))
    }

    async fn resolve(&self, identifier: &str) -> Result<RawPlatformResult> {
        let items = self.fetch_episode_list(identifier).await?;
        Ok(RawPlatformResult::Flat(parse_items(items)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> Mgtv {
        Mgtv::new().unwrap()
    }

    fn item(is_intact: &str, t1: &str, url: Option<&str>) -> models::EpisodeItem {
        models::EpisodeItem {
            is_intact: Some(is_intact.to_string()),
            t1: Some(t1.to_string()),
            t2: Some(String::new()),
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_extract_identifier_show_path() {
        let id = provider()
            .extract_identifier("https://www.mgtv.com/b/641700/23845752.html?fpa=1261&fpos=")
            .unwrap();
        assert_eq!(id, "23845752");
    }

    #[test]
    fn test_extract_identifier_plain_path() {
        let id = provider()
            .extract_identifier("https://www.mgtv.com/999.html")
            .unwrap();
        assert_eq!(id, "999");
    }

    #[test]
    fn test_extract_identifier_show_path_without_suffix() {
        // ID 直接到结尾或带查询串也能匹配
        let provider = provider();
        assert_eq!(
            provider
                .extract_identifier("https://www.mgtv.com/b/641700/23845752")
                .unwrap(),
            "23845752"
        );
        assert_eq!(
            provider
                .extract_identifier("https://www.mgtv.com/b/641700/23845752?cpid=5")
                .unwrap(),
            "23845752"
        );
    }

    #[test]
    fn test_extract_identifier_prefers_show_path() {
        // 两种模式都可匹配时，取更具体的 /b/ 形式里的集 ID
        let id = provider()
            .extract_identifier("https://www.mgtv.com/b/641700/23845752.html")
            .unwrap();
        assert_eq!(id, "23845752");
    }

    #[test]
    fn test_extract_identifier_no_match_fails() {
        let result = provider().extract_identifier("https://www.mgtv.com/about");
        assert!(matches!(result, Err(EpisodeHelperError::Extraction(_))));
    }

    #[test]
    fn test_parse_items_filters_and_prefixes() {
        let episodes = parse_items(vec![
            item("1", "1", Some("/b/641700/23845752.html")),
            item("0", "2", Some("/b/641700/23845753.html")),
            item("1", "3", None),
            item("1", "4", Some("")),
        ]);

        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].title, "1");
        assert_eq!(
            episodes[0].url,
            "https://www.mgtv.com/b/641700/23845752.html"
        );
    }
}
