//! 爱奇艺提供商模块。
//!
//! 协议是一条严格的三步依赖链：先以页面 URL 作 Referer 从
//! accelerator.js 中抓取 `tvId`，再用 `tvId` 查视频基础信息并按 `cid`
//! 分流；剧集（`cid == 2`）最后携带 MD5 签名请求 selector 分页接口。

use std::{sync::LazyLock, time::Duration};

use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use reqwest::{
    Client,
    header::{REFERER, USER_AGENT},
};
use tracing::debug;

use crate::{
    error::{EpisodeHelperError, Result},
    model::episode::{Episode, Platform, UNKNOWN_VIDEO_TYPE},
    providers::{NumOrString, Provider, RawPlatformResult},
};

pub mod models;
pub mod sign;

const ACCELERATOR_URL: &str =
    "https://www.iqiyi.com/prelw/player/lw/lwplay/accelerator.js?apiVer=3&lwaver=14.011.24181&appver=14.011.24181";
const VIDEO_INFO_URL: &str = "https://mesh.if.iqiyi.com/player/pcw/video/playervideoinfo";
const SELECTOR_URL: &str = "https://mesh.if.iqiyi.com/tvg/v2/selector";

const PC_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

static TVID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""tvId":(\d+)"#).unwrap());

/// 爱奇艺 cid 到视频类型标签的映射，未收录的编号归为未知。
fn video_type_label(cid: i64) -> &'static str {
    match cid {
        1 => "电影",
        2 => "剧集",
        3 => "纪录片",
        4 => "动漫",
        6 => "综艺",
        15 => "少儿",
        _ => UNKNOWN_VIDEO_TYPE,
    }
}

/// 爱奇艺的提供商实现。
pub struct Iqiyi {
    http_client: Client,
}

impl Iqiyi {
    /// 创建一个新的 `Iqiyi` 提供商实例。
    pub fn new() -> Result<Self> {
        let http_client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { http_client })
    }

    /// 从 accelerator.js 中提取 `tvId`。
    ///
    /// 上游根据 Referer 里的页面地址返回对应视频的脚本，
    /// 所以这里必须原样带上输入 URL。
    async fn fetch_tvid(&self, refer: &str) -> Result<String> {
        let script = self
            .http_client
            .get(ACCELERATOR_URL)
            .header(USER_AGENT, PC_USER_AGENT)
            .header(REFERER, refer)
            .send()
            .await?
            .text()
            .await?;

        let captures = TVID_RE.captures(&script).ok_or_else(|| {
            EpisodeHelperError::UpstreamShape("无法从 accelerator.js 中解析 tvId".to_string())
        })?;

        Ok(captures[1].to_string())
    }

    /// 获取视频基础信息。
    async fn fetch_video_info(&self, tvid: &str) -> Result<models::VideoInfo> {
        let response: models::VideoInfoResponse = self
            .http_client
            .get(VIDEO_INFO_URL)
            .query(&[("id", tvid), ("locale", "zh_cn")])
            .send()
            .await?
            .json()
            .await?;

        if response.msg.as_deref() != Some("success") {
            return Err(EpisodeHelperError::ApiError(
                "video info 接口返回失败".to_string(),
            ));
        }

        response.data.ok_or_else(|| {
            EpisodeHelperError::UpstreamShape("video info 响应缺少 data".to_string())
        })
    }

    /// 携带签名请求 selector 接口，取回剧集的全部分页。
    async fn fetch_album_episodes(&self, album_id: &str) -> Result<Vec<Episode>> {
        let timestamp = Utc::now().timestamp_millis();
        let params = sign::selector_query(album_id, timestamp);
        let signature = sign::sign(&params);
        let url = format!("{SELECTOR_URL}?{params}&sign={signature}");

        let response: models::SelectorResponse =
            self.http_client.get(url).send().await?.json().await?;

        let videos = response
            .data
            .and_then(|data| data.videos)
            .ok_or_else(|| {
                EpisodeHelperError::UpstreamShape("selector 返回数据异常".to_string())
            })?;

        Ok(parse_items(collect_paged_items(videos)))
    }
}

/// 按 `page_keys` 的顺序拼接所有被引用的分页数组。
///
/// 条目顺序只取决于 key 的声明顺序；映射里多余的 key 会被忽略，
/// 缺失的 key 直接跳过。
fn collect_paged_items(videos: models::SelectorVideos) -> Vec<models::SelectorItem> {
    let models::SelectorVideos {
        page_keys,
        mut feature_paged,
    } = videos;

    let mut items = Vec::new();
    for key in &page_keys {
        if let Some(page) = feature_paged.remove(key) {
            items.extend(page);
        }
    }
    items
}

/// 过滤正片（`content_type == 1`）并映射为统一条目。
fn parse_items(items: Vec<models::SelectorItem>) -> Vec<Episode> {
    items
        .into_iter()
        .filter(|item| item.content_type == Some(1))
        .map(|item| Episode {
            title: item
                .album_order
                .map(NumOrString::into_string)
                .unwrap_or_default(),
            tag: item.subtitle.unwrap_or_default(),
            url: item.page_url.unwrap_or_default(),
        })
        .collect()
}

#[async_trait]
impl Provider for Iqiyi {
    fn name(&self) -> &'static str {
        "iqiyi"
    }

    fn platform(&self) -> Platform {
        Platform::Iqiyi
    }

    /// 爱奇艺的标识符就是页面 URL 本身：真正的内容 ID 要靠服务端
    /// 通过 Referer 发现，客户端无法从 URL 直接解析。
    fn extract_identifier(&self, url: &str) -> Result<String> {
        Ok(url.to_string())
    }

    async fn resolve(&self, identifier: &str) -> Result<RawPlatformResult> {
        let tvid = self.fetch_tvid(identifier).await?;
        debug!("爱奇艺 tvId: {tvid}");

        let info = self.fetch_video_info(&tvid).await?;
        let video_type = info
            .cid
            .map_or(UNKNOWN_VIDEO_TYPE, video_type_label)
            .to_string();

        // 剧集：再走一次签名分页接口拉全集
        if info.cid == Some(2) {
            let album_id = info
                .album_id
                .ok_or_else(|| {
                    EpisodeHelperError::UpstreamShape("剧集信息缺少 albumId".to_string())
                })?
                .into_string();
            let list = self.fetch_album_episodes(&album_id).await?;
            return Ok(RawPlatformResult::Typed { video_type, list });
        }

        // 电影 / 其他单视频：直接由基础信息构造唯一条目
        let episode = Episode {
            title: info.short_title.unwrap_or_default(),
            tag: info.subt.unwrap_or_default(),
            url: info.vu.unwrap_or_default(),
        };

        Ok(RawPlatformResult::Typed {
            video_type,
            list: vec![episode],
        })
    }
}
