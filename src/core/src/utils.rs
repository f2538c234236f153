//! 工具函数模块
//!
//! 提供ID生成、UUID格式判断和邮箱脱敏

use once_cell::sync::Lazy;
use rand::RngCore;
use regex::Regex;
use uuid::Builder;

/// 无法解析的邮箱统一显示为此值
pub const MASKED_EMAIL_SENTINEL: &str = "****@****.***";

static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("invalid uuid pattern")
});

/// ID工具
pub struct IdUtils;

impl IdUtils {
    /// 生成UUID v4 文本（小写，带连字符）
    ///
    /// 随机源非密码学安全，只保证格式与真实UUID一致，
    /// 以便导出的名单仍可按 `ID EMAIL NAME` 格式重新导入。
    pub fn generate_uuid<R: RngCore + ?Sized>(rng: &mut R) -> String {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string()
    }

    /// 检查字符串是否为标准UUID文本（8-4-4-4-12，忽略大小写）
    pub fn is_uuid(s: &str) -> bool {
        UUID_PATTERN.is_match(s)
    }
}

/// 邮箱工具
pub struct EmailUtils;

impl EmailUtils {
    /// 粗略判断是否像邮箱：包含 `@`
    pub fn looks_like_email(s: &str) -> bool {
        s.contains('@')
    }

    /// 邮箱脱敏显示
    ///
    /// `test@example.com` -> `t***@e***.com`
    pub fn mask(email: &str) -> String {
        let (local, domain) = match email.split_once('@') {
            Some((local, domain)) if !domain.is_empty() => (local, domain),
            _ => return MASKED_EMAIL_SENTINEL.to_string(),
        };

        let (label, suffix) = domain.split_once('.').unwrap_or((domain, ""));

        format!("{}***@{}***.{}", first_char(local), first_char(label), suffix)
    }
}

fn first_char(s: &str) -> String {
    s.chars().next().map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_uuid_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let id = IdUtils::generate_uuid(&mut rng);
            assert!(IdUtils::is_uuid(&id), "{} is not a uuid", id);
            assert_eq!(&id[14..15], "4");
            assert!(matches!(&id[19..20], "8" | "9" | "a" | "b"));
            assert_eq!(id, id.to_lowercase());
        }
    }

    #[test]
    fn test_generate_uuid_unique() {
        let mut rng = rand::thread_rng();
        let a = IdUtils::generate_uuid(&mut rng);
        let b = IdUtils::generate_uuid(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_uuid() {
        assert!(IdUtils::is_uuid("01545ad9-5653-4a0f-8582-22b211a8acf0"));
        assert!(IdUtils::is_uuid("01D5C79F-7538-4AA0-8C3A-698338BA9CF8"));
        assert!(!IdUtils::is_uuid("01545ad956534a0f858222b211a8acf0"));
        assert!(!IdUtils::is_uuid("01545ad9-5653-4a0f-8582-22b211a8acf"));
        assert!(!IdUtils::is_uuid("g1545ad9-5653-4a0f-8582-22b211a8acf0"));
        assert!(!IdUtils::is_uuid(" 01545ad9-5653-4a0f-8582-22b211a8acf0"));
        assert!(!IdUtils::is_uuid("Alice"));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(EmailUtils::mask("test@example.com"), "t***@e***.com");
        assert_eq!(EmailUtils::mask("hon-d.a@hotmail.com"), "h***@h***.com");
        assert_eq!(EmailUtils::mask("a@mail.example.co.uk"), "a***@m***.example.co.uk");
        assert_eq!(EmailUtils::mask("no-at-sign"), MASKED_EMAIL_SENTINEL);
        assert_eq!(EmailUtils::mask("dangling@"), MASKED_EMAIL_SENTINEL);
    }

    #[test]
    fn test_mask_email_empty_parts() {
        assert_eq!(EmailUtils::mask("@example.com"), "***@e***.com");
        assert_eq!(EmailUtils::mask("user@.com"), "u***@***.com");
        assert_eq!(EmailUtils::mask("user@localhost"), "u***@l***.");
    }

    #[test]
    fn test_mask_email_multibyte() {
        assert_eq!(EmailUtils::mask("慈悲@例子.台灣"), "慈***@例***.台灣");
    }
}
