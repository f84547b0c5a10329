//! 视频平台检测。
//!
//! 只根据 URL 的主机名做分类，不发起任何网络请求。

use url::Url;

use crate::{error::Result, model::episode::Platform};

/// 检测一个视频页面 URL 所属的平台。
///
/// 主机名不在已知集合内时返回 [`Platform::Unknown`]；
/// 输入根本无法解析为 URL 时返回 [`crate::EpisodeHelperError::InvalidUrl`]，
/// 两者是不同的失败语义。
///
/// # 参数
/// * `url` - 视频页面的完整 URL。
pub fn detect(url: &str) -> Result<Platform> {
    let parsed = Url::parse(url)?;

    let platform = match parsed.host_str() {
        Some("v.qq.com") => Platform::Qq,
        Some("www.iqiyi.com") => Platform::Iqiyi,
        Some("v.youku.com") => Platform::Youku,
        Some("www.mgtv.com") => Platform::Mgtv,
        _ => Platform::Unknown,
    };

    Ok(platform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_platforms() {
        assert_eq!(
            detect("https://v.qq.com/x/cover/aeuz5ypnru0wxqq/vid.html").unwrap(),
            Platform::Qq
        );
        assert_eq!(
            detect("https://www.iqiyi.com/v_bb6gsxzz78.html").unwrap(),
            Platform::Iqiyi
        );
        assert_eq!(
            detect("https://v.youku.com/v_show/id_XNjQ1NDI4ODY2MA==.html").unwrap(),
            Platform::Youku
        );
        assert_eq!(
            detect("https://www.mgtv.com/b/641700/23845752.html").unwrap(),
            Platform::Mgtv
        );
    }

    #[test]
    fn test_detect_unknown_hostname() {
        assert_eq!(
            detect("https://www.bilibili.com/video/BV1xx411c7mD").unwrap(),
            Platform::Unknown
        );
        // 子域名不同也不算同一平台
        assert_eq!(detect("https://m.iqiyi.com/v_abc.html").unwrap(), Platform::Unknown);
    }

    #[test]
    fn test_detect_malformed_url_is_an_error() {
        assert!(detect("not a url").is_err());
        assert!(detect("").is_err());
    }
}
