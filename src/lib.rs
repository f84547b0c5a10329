#![warn(missing_docs)]

//! # Episode Helper RS
//!
//! 一个 Rust 库，用于把爱奇艺、腾讯视频、芒果TV和优酷的视频页面链接
//! 解析为统一的剧集列表。
//!
//! ## 主要功能
//!
//! - **平台检测**: 根据主机名识别链接所属平台，无需任何网络请求。
//! - **剧集解析**: 每个平台一套适配器，处理各自的签名、依赖 ID 链
//!   和分页协议，最终规范化为同一种 `{platform, videoType, count, list}`
//!   结构。
//!
//! ## 解析剧集
//!
//! ```rust,no_run
//! use episode_helper_rs::EpisodeHelper;
//!
//! async {
//!     let helper = EpisodeHelper::new().unwrap();
//!     match helper
//!         .resolve_episodes("https://www.iqiyi.com/v_bb6gsxzz78.html")
//!         .await
//!     {
//!         Ok(list) => println!("解析成功！类型 {}，共 {} 集。", list.video_type, list.count),
//!         Err(e) => eprintln!("发生错误: {e}"),
//!     }
//! };
//! ```

pub mod detector;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod providers;
pub mod server;

pub use crate::{
    error::{EpisodeHelperError, Result},
    model::episode::{Episode, EpisodeList, Platform},
};

use crate::providers::{Provider, iqiyi::Iqiyi, mgtv::Mgtv, qq::QQVideo, youku::Youku};

// ==========================================================
//  顶层 API
// ==========================================================

/// 顶层剧集解析客户端，封装了所有平台提供商，为用户提供统一、简单的接口。
///
/// 这是与本库交互的主要入口点。每次解析都是独立的：
/// 不缓存结果，调用之间没有共享的可变状态。
pub struct EpisodeHelper {
    providers: Vec<Box<dyn Provider + Send + Sync>>,
}

impl EpisodeHelper {
    /// 创建一个注册了全部已支持平台的 `EpisodeHelper` 实例。
    ///
    /// 构造本身不发起网络请求，只初始化各平台的 HTTP 客户端。
    pub fn new() -> Result<Self> {
        let providers: Vec<Box<dyn Provider + Send + Sync>> = vec![
            Box::new(Iqiyi::new()?),
            Box::new(QQVideo::new()?),
            Box::new(Mgtv::new()?),
            Box::new(Youku::new()?),
        ];
        Ok(Self { providers })
    }

    /// 把一个视频页面 URL 解析为规范化的剧集列表。
    ///
    /// 流程：平台检测 → 标识符提取 → 平台适配器请求 → 规范化。
    /// 任何一步的错误都按原有类型向上传播，不做吞错或降级；
    /// 传播前会连同出错的原始 URL 一起记入日志以便诊断。
    ///
    /// # 参数
    /// * `url` - 视频页面的完整 URL。
    ///
    /// # 返回
    /// 一个 `Result`，成功时包含规范化后的 [`EpisodeList`]。
    pub async fn resolve_episodes(&self, url: &str) -> Result<EpisodeList> {
        match self.dispatch(url).await {
            Ok(list) => {
                tracing::info!("解析成功: {url}，类型 {}，共 {} 集", list.video_type, list.count);
                Ok(list)
            }
            Err(e) => {
                tracing::error!("处理视频 URL 失败: {url}: {e}");
                Err(e)
            }
        }
    }

    async fn dispatch(&self, url: &str) -> Result<EpisodeList> {
        let platform = detector::detect(url)?;
        if platform == Platform::Unknown {
            return Err(EpisodeHelperError::UnsupportedPlatform(url.to_string()));
        }

        // 检测出了平台却没有注册提供商属于防御性分支，正常不会走到
        let provider = self
            .providers
            .iter()
            .find(|provider| provider.platform() == platform)
            .ok_or_else(|| EpisodeHelperError::ProviderNotSupported(platform.to_string()))?;

        let identifier = provider.extract_identifier(url)?;
        tracing::debug!("平台 {platform}，标识符: {identifier}");

        let raw = provider.resolve(&identifier).await?;
        Ok(normalizer::normalize(platform, raw))
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn init_tracing() {
        use tracing_subscriber::{EnvFilter, FmtSubscriber};
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,episode_helper_rs=debug"));
        let _ = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }

    #[tokio::test]
    async fn test_unknown_platform_fails_without_network() {
        let helper = EpisodeHelper::new().unwrap();
        let result = helper
            .resolve_episodes("https://www.bilibili.com/video/BV1xx411c7mD")
            .await;

        assert!(matches!(
            result,
            Err(EpisodeHelperError::UnsupportedPlatform(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_url_is_invalid_url() {
        let helper = EpisodeHelper::new().unwrap();
        let result = helper.resolve_episodes("还不是一个链接").await;

        assert!(matches!(result, Err(EpisodeHelperError::InvalidUrl(_))));
    }

    /// 完整的端到端用例：解析一部爱奇艺剧集并检查规范化不变量。
    #[tokio::test]
    #[ignore]
    async fn test_iqiyi_series_full_flow() {
        init_tracing();
        let helper = EpisodeHelper::new().unwrap();

        let list = helper
            .resolve_episodes("https://www.iqiyi.com/v_bb6gsxzz78.html")
            .await
            .expect("解析爱奇艺剧集失败");

        assert_eq!(list.platform, Platform::Iqiyi);
        assert_eq!(list.count, list.list.len());
        assert!(list.list.iter().all(|episode| !episode.url.is_empty()));
        println!("类型 {}，共 {} 集", list.video_type, list.count);
    }

    #[tokio::test]
    #[ignore]
    async fn test_qq_full_flow() {
        init_tracing();
        let helper = EpisodeHelper::new().unwrap();

        let list = helper
            .resolve_episodes("https://v.qq.com/x/cover/aeuz5ypnru0wxqq/abc.html")
            .await
            .expect("解析腾讯视频剧集失败");

        assert_eq!(list.platform, Platform::Qq);
        assert_eq!(list.video_type, crate::model::episode::UNKNOWN_VIDEO_TYPE);
        assert_eq!(list.count, list.list.len());
    }

    #[tokio::test]
    #[ignore]
    async fn test_mgtv_full_flow() {
        init_tracing();
        let helper = EpisodeHelper::new().unwrap();

        let list = helper
            .resolve_episodes("https://www.mgtv.com/b/641700/23845752.html")
            .await
            .expect("解析芒果TV剧集失败");

        assert_eq!(list.platform, Platform::Mgtv);
        assert_eq!(list.count, list.list.len());
        assert!(
            list.list
                .iter()
                .all(|episode| episode.url.starts_with("https://www.mgtv.com"))
        );
    }

    #[tokio::test]
    #[ignore]
    async fn test_youku_full_flow() {
        init_tracing();
        let helper = EpisodeHelper::new().unwrap();

        let list = helper
            .resolve_episodes("https://v.youku.com/v_show/id_XNjQ1NDI4ODY2MA==.html")
            .await
            .expect("解析优酷剧集失败");

        assert_eq!(list.platform, Platform::Youku);
        assert_eq!(list.count, list.list.len());
        assert!(list.list.iter().all(|episode| !episode.url.is_empty()));
    }
}
