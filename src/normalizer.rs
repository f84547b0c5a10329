//! 将各适配器的原始结果规范化为统一的 [`EpisodeList`]。

use crate::{
    model::episode::{EpisodeList, Platform, UNKNOWN_VIDEO_TYPE},
    providers::RawPlatformResult,
};

/// 把适配器的原始结果映射为规范化的剧集列表。
///
/// 纯函数，不做 I/O，也没有失败路径：`count` 由列表长度直接计算，
/// 无类型信息的平台统一使用 [`UNKNOWN_VIDEO_TYPE`]。
#[must_use]
pub fn normalize(platform: Platform, raw: RawPlatformResult) -> EpisodeList {
    let (video_type, list) = match raw {
        RawPlatformResult::Typed { video_type, list } => (video_type, list),
        RawPlatformResult::Flat(list) => (UNKNOWN_VIDEO_TYPE.to_string(), list),
    };

    EpisodeList {
        platform,
        video_type,
        count: list.len(),
        list,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::episode::Episode;

    fn sample_episodes(n: usize) -> Vec<Episode> {
        (1..=n)
            .map(|i| Episode {
                title: i.to_string(),
                tag: String::new(),
                url: format!("https://example.com/{i}.html"),
            })
            .collect()
    }

    #[test]
    fn test_typed_result_keeps_video_type() {
        let raw = RawPlatformResult::Typed {
            video_type: "剧集".to_string(),
            list: sample_episodes(3),
        };
        let normalized = normalize(Platform::Iqiyi, raw);

        assert_eq!(normalized.platform, Platform::Iqiyi);
        assert_eq!(normalized.video_type, "剧集");
        assert_eq!(normalized.count, normalized.list.len());
        assert_eq!(normalized.count, 3);
    }

    #[test]
    fn test_flat_result_gets_unknown_sentinel() {
        for platform in [Platform::Qq, Platform::Mgtv, Platform::Youku] {
            let normalized = normalize(platform, RawPlatformResult::Flat(sample_episodes(2)));
            assert_eq!(normalized.video_type, UNKNOWN_VIDEO_TYPE);
            assert_eq!(normalized.count, normalized.list.len());
        }
    }

    #[test]
    fn test_empty_list_normalizes_to_zero_count() {
        let normalized = normalize(Platform::Qq, RawPlatformResult::Flat(Vec::new()));
        assert_eq!(normalized.count, 0);
        assert!(normalized.list.is_empty());
    }
}
