//! 优酷提供商模块。
//!
//! 三步 ID 链：URL 里的 base64 风格视频 ID → show.json 换取
//! `show_id` → shows/videos.json 拉取正片列表。任何一步拿不到 ID
//! 都直接中止，没有备选路径。

use std::{sync::LazyLock, time::Duration};

use async_trait::async_trait;
use regex::Regex;
use reqwest::{
    Client,
    header::{REFERER, USER_AGENT},
};
use tracing::debug;

use crate::{
    error::{EpisodeHelperError, Result},
    model::episode::{Episode, Platform},
    providers::{NumOrString, Provider, RawPlatformResult},
};

pub mod models;

const SHOW_LOOKUP_URL: &str = "https://openapi.youku.com/v2/videos/show.json";
const SHOW_VIDEOS_URL: &str = "https://openapi.youku.com/v2/shows/videos.json";

// 两个接口使用不同的 client_id，均来自华为视频播放器的公开集成
const SHOW_LOOKUP_CLIENT_ID: &str = "53e6cc67237fc59a";
const SHOW_VIDEOS_CLIENT_ID: &str = "0dec1b5a3cb570c1";
const CLIENT_PACKAGE: &str = "com.huawei.hwvplayer.youku";

/// 只拉取正片，预告花絮等类别不请求。
const MAIN_FEATURE_CATEGORY: &str = "正片";

const YOUKU_REFERER: &str = "https://v.youku.com/";
const MAC_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36";

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"id_([^.=]+)").unwrap());

/// 优酷的提供商实现。
pub struct Youku {
    http_client: Client,
}

impl Youku {
    /// 创建一个新的 `Youku` 提供商实例。
    pub fn new() -> Result<Self> {
        let http_client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { http_client })
    }

    /// 用视频 ID 换取节目 `show_id`。
    async fn fetch_show_id(&self, video_id: &str) -> Result<String> {
        let response: models::ShowLookupResponse = self
            .http_client
            .get(SHOW_LOOKUP_URL)
            .query(&[
                ("video_id", video_id),
                ("client_id", SHOW_LOOKUP_CLIENT_ID),
                ("package", CLIENT_PACKAGE),
                ("ext", "show"),
            ])
            .header(USER_AGENT, MAC_USER_AGENT)
            .header(REFERER, YOUKU_REFERER)
            .send()
            .await?
            .json()
            .await?;

        response
            .show
            .and_then(|show| show.id)
            .map(NumOrString::into_string)
            .ok_or_else(|| {
                EpisodeHelperError::UpstreamShape("show.json 响应缺少 show.id".to_string())
            })
    }

    /// 按 `show_id` 拉取正片列表（第 1 页，单页 40 条）。
    async fn fetch_show_videos(&self, show_id: &str) -> Result<Vec<models::ShowVideo>> {
        let response: models::ShowVideosResponse = self
            .http_client
            .get(SHOW_VIDEOS_URL)
            .query(&[
                ("show_id", show_id),
                ("show_videotype", MAIN_FEATURE_CATEGORY),
                ("page", "1"),
                ("count", "40"),
                ("client_id", SHOW_VIDEOS_CLIENT_ID),
                ("package", CLIENT_PACKAGE),
            ])
            .header(USER_AGENT, MAC_USER_AGENT)
            .header(REFERER, YOUKU_REFERER)
            .send()
            .await?
            .json()
            .await?;

        response.videos.ok_or_else(|| {
            EpisodeHelperError::UpstreamShape("videos.json 响应缺少 videos".to_string())
        })
    }
}

/// 映射剧集条目并丢弃链接为空的数据。
fn parse_items(items: Vec<models::ShowVideo>) -> Vec<Episode> {
    items
        .into_iter()
        .map(|item| Episode {
            tag: item.rc_title.unwrap_or_default(),
            title: item.seq.map(NumOrString::into_string).unwrap_or_default(),
            url: item.link.unwrap_or_default(),
        })
        .filter(|episode| !episode.url.is_empty())
        .collect()
}

#[async_trait]
impl Provider for Youku {
    fn name(&self) -> &'static str {
        "youku"
    }

    fn platform(&self) -> Platform {
        Platform::Youku
    }

    /// 视频 ID 是 `id_` 之后、`.` 或 `=` 之前的部分，例如
    /// `id_XNjQ1NDI4ODY2MA==.html` 里的 `XNjQ1NDI4ODY2MA`。
    fn extract_identifier(&self, url: &str) -> Result<String> {
        VIDEO_ID_RE
            .captures(url)
            .map(|captures| captures[1].to_string())
            .ok_or_else(|| {
                EpisodeHelperError::Extraction(format!("无法从 URL 中提取优酷视频 ID: {url}"))
            })
    }

    async fn resolve(&self, identifier: &str) -> Result<RawPlatformResult> {
        let show_id = self.fetch_show_id(identifier).await?;
        debug!("优酷 show_id: {show_id}");

        let videos = self.fetch_show_videos(&show_id).await?;
        Ok(RawPlatformResult::Flat(parse_items(videos)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> Youku {
        Youku::new().unwrap()
    }

    fn item(seq: Option<NumOrString>, link: Option<&str>) -> models::ShowVideo {
        models::ShowVideo {
            rc_title: Some("更新至40集".to_string()),
            seq,
            link: link.map(str::to_string),
        }
    }

    #[test]
    fn test_extract_identifier_stops_at_delimiters() {
        let provider = provider();
        assert_eq!(
            provider
                .extract_identifier(
                    "https://v.youku.com/v_show/id_XNjQ1NDI4ODY2MA==.html?spm=a2hkl"
                )
                .unwrap(),
            "XNjQ1NDI4ODY2MA"
        );
        assert_eq!(
            provider
                .extract_identifier("https://v.youku.com/v_show/id_XMTM0NDM2NDY0.html")
                .unwrap(),
            "XMTM0NDM2NDY0"
        );
    }

    #[test]
    fn test_extract_identifier_no_token_fails() {
        let result = provider().extract_identifier("https://v.youku.com/v_show/abc.html");
        assert!(matches!(result, Err(EpisodeHelperError::Extraction(_))));
    }

    #[test]
    fn test_parse_items_accepts_numeric_and_string_seq() {
        let episodes = parse_items(vec![
            item(Some(NumOrString::Num(1)), Some("https://v.youku.com/1")),
            item(
                Some(NumOrString::Str("2".to_string())),
                Some("https://v.youku.com/2"),
            ),
        ]);

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].title, "1");
        assert_eq!(episodes[1].title, "2");
    }

    #[test]
    fn test_parse_items_drops_empty_links() {
        let episodes = parse_items(vec![
            item(Some(NumOrString::Num(1)), None),
            item(Some(NumOrString::Num(2)), Some("")),
            item(Some(NumOrString::Num(3)), Some("https://v.youku.com/3")),
        ]);

        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].title, "3");
    }
}
