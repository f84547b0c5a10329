//! 此模块包含为爱奇艺 selector 分页接口生成签名的函数。
//!
//! 参数拼接顺序和摘要算法是上游接受请求的前提，属于固定的线上契约，
//! 不能重排或替换。

use md5::{Digest, Md5};
use std::fmt::Write;

/// selector 接口使用的共享密钥。
pub const SELECTOR_SECRET_KEY: &str = "howcuteitis";

/// 构建 selector 接口的待签名参数串。
///
/// 顺序固定为 `album_id` → `src` → `timestamp` → `secret_key`。
///
/// # 参数
/// * `album_id` - 剧集的专辑 ID。
/// * `timestamp_ms` - 毫秒级时间戳。
#[must_use]
pub fn selector_query(album_id: &str, timestamp_ms: i64) -> String {
    format!(
        "album_id={album_id}&src=lw&timestamp={timestamp_ms}&secret_key={SELECTOR_SECRET_KEY}"
    )
}

/// 对参数串计算签名。
///
/// # 返回
/// 返回计算出的 32 位大写 MD5 签名字符串。
#[must_use]
pub fn sign(params: &str) -> String {
    let digest = Md5::digest(params.as_bytes());

    let mut output = String::with_capacity(digest.len() * 2);
    for byte in digest {
        write!(&mut output, "{byte:02X}").unwrap();
    }
    output
}
