//! Fixed topic set and the keyword configuration table.
//!
//! One immutable table, shared by every consumer of the classifier. The
//! source of truth for topic identifiers, display labels, and weighted
//! keyword tiers. Keywords are stored lowercase; matching is substring
//! containment against lowercased input, so short keywords can match inside
//! unrelated words (e.g. "ai" inside "bài"). That behavior is intentional
//! and covered by tests rather than silently changed.

use serde::{Deserialize, Serialize};

/// One of the six fixed blog topic categories. Order matters: the first
/// topic is the default when no keyword evidence is found, and ranking
/// ties resolve in this order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    #[default]
    Programming,
    Web,
    Mobile,
    Ai,
    Cloud,
    Security,
}

impl Topic {
    /// All topics in configured order.
    pub const ALL: [Topic; 6] = [
        Topic::Programming,
        Topic::Web,
        Topic::Mobile,
        Topic::Ai,
        Topic::Cloud,
        Topic::Security,
    ];

    /// Stable identifier, also the wire form (matches the serde rename).
    pub fn id(&self) -> &'static str {
        match self {
            Topic::Programming => "programming",
            Topic::Web => "web",
            Topic::Mobile => "mobile",
            Topic::Ai => "ai",
            Topic::Cloud => "cloud",
            Topic::Security => "security",
        }
    }

    /// Human display label shown in the portals.
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Programming => "Lập trình",
            Topic::Web => "Phát triển Web",
            Topic::Mobile => "Mobile",
            Topic::Ai => "AI & Machine Learning",
            Topic::Cloud => "Cloud & DevOps",
            Topic::Security => "Bảo mật",
        }
    }

    /// Weighted keyword tiers for this topic.
    pub fn keywords(&self) -> &'static KeywordSet {
        match self {
            Topic::Programming => &PROGRAMMING_KEYWORDS,
            Topic::Web => &WEB_KEYWORDS,
            Topic::Mobile => &MOBILE_KEYWORDS,
            Topic::Ai => &AI_KEYWORDS,
            Topic::Cloud => &CLOUD_KEYWORDS,
            Topic::Security => &SECURITY_KEYWORDS,
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A topic's keywords, partitioned into weighted tiers. Keywords must be
/// lowercase and unique across the three tiers of a topic.
#[derive(Debug)]
pub struct KeywordSet {
    /// Core topic words. Highest weight.
    pub primary: &'static [&'static str],
    /// Related and contextual words. Lowest weight.
    pub secondary: &'static [&'static str],
    /// Named technologies and tools. Weighted between primary and secondary.
    pub frameworks: &'static [&'static str],
}

// Keyword tables are bilingual (Vietnamese + English) to match the blog
// corpus the classifier runs against.

static PROGRAMMING_KEYWORDS: KeywordSet = KeywordSet {
    primary: &[
        "lập trình",
        "programming",
        "thuật toán",
        "algorithm",
        "coding",
        "code",
    ],
    secondary: &[
        "developer",
        "software",
        "phần mềm",
        "cấu trúc dữ liệu",
        "data structure",
        "debug",
    ],
    frameworks: &["python", "java", "c++", "c#", "rust", "golang"],
};

static WEB_KEYWORDS: KeywordSet = KeywordSet {
    primary: &["web", "frontend", "backend", "website", "giao diện"],
    secondary: &["responsive", "trình duyệt", "browser", "seo", "fullstack"],
    frameworks: &[
        "react", "vue", "angular", "nextjs", "html", "css", "tailwind", "nodejs", "laravel",
    ],
};

static MOBILE_KEYWORDS: KeywordSet = KeywordSet {
    primary: &["mobile", "di động", "android", "ios"],
    secondary: &["app store", "điện thoại", "smartphone", "tablet"],
    frameworks: &["flutter", "react native", "kotlin", "swift", "xamarin"],
};

static AI_KEYWORDS: KeywordSet = KeywordSet {
    primary: &[
        "ai",
        "trí tuệ nhân tạo",
        "machine learning",
        "học máy",
        "deep learning",
    ],
    secondary: &["neural", "mô hình", "model", "data science", "chatbot"],
    frameworks: &["tensorflow", "pytorch", "openai", "chatgpt", "llm"],
};

static CLOUD_KEYWORDS: KeywordSet = KeywordSet {
    primary: &["cloud", "đám mây", "devops", "máy chủ", "server"],
    secondary: &["triển khai", "deploy", "hạ tầng", "infrastructure", "container"],
    frameworks: &["aws", "azure", "docker", "kubernetes", "terraform"],
};

static SECURITY_KEYWORDS: KeywordSet = KeywordSet {
    primary: &["bảo mật", "security", "an ninh mạng", "hacker"],
    secondary: &[
        "lỗ hổng",
        "vulnerability",
        "tấn công",
        "mã hóa",
        "encryption",
        "firewall",
    ],
    frameworks: &["penetration test", "pentest", "burp suite", "kali"],
};
