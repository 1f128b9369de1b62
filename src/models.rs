use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// 顾客评价（一张幻灯片）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub role: String, // 身份/头衔，可为空
    pub quote: String,
    #[serde(default = "default_rating")]
    pub rating: u8, // 1~5 星
    pub created_at: DateTime<Local>,
}

fn default_rating() -> u8 {
    5
}

fn default_interval_ms() -> u64 {
    5000
}

impl Testimonial {
    pub fn new(author: &str, role: &str, quote: &str, rating: u8) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: author.to_string(),
            role: role.to_string(),
            quote: quote.to_string(),
            rating: rating.clamp(1, 5),
            created_at: Local::now(),
        }
    }

    /// 星级字符串，例如 ★★★★☆
    pub fn stars(&self) -> String {
        let filled = self.rating.clamp(1, 5) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

/// TOML 文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckData {
    pub meta: DeckMeta,
    pub slides: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckMeta {
    pub version: String,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64, // 自动轮播周期
    pub created_at: DateTime<Local>,
    pub last_modified: DateTime<Local>,
}

impl Default for DeckData {
    fn default() -> Self {
        let now = Local::now();
        Self {
            meta: DeckMeta {
                version: "1.0".to_string(),
                interval_ms: default_interval_ms(),
                created_at: now,
                last_modified: now,
            },
            slides: Vec::new(),
        }
    }
}

/// 运行时结构（播放顺序即 Vec 顺序，运行期不增删）
#[derive(Debug, Clone)]
pub struct Deck {
    pub slides: Vec<Testimonial>,
    pub interval_ms: u64,
    pub dirty: bool,
}

impl Deck {
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            interval_ms: default_interval_ms(),
            dirty: false,
        }
    }

    pub fn from_data(data: DeckData) -> Self {
        Self {
            slides: data.slides,
            interval_ms: data.meta.interval_ms,
            dirty: false,
        }
    }

    pub fn to_data(&self) -> DeckData {
        let now = Local::now();
        DeckData {
            meta: DeckMeta {
                version: "1.0".to_string(),
                interval_ms: self.interval_ms,
                created_at: now, // TODO: preserve original
                last_modified: now,
            },
            slides: self.slides.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Testimonial> {
        self.slides.get(index)
    }

    /// 自动轮播周期
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// 内置示例评价，数据文件缺失时的首次内容
    pub fn sample() -> Self {
        let slides = vec![
            Testimonial::new(
                "林晓雨",
                "正念课程学员",
                "跟着老师练习三个月，睡眠质量明显改善，整个人平静了很多。",
                5,
            ),
            Testimonial::new(
                "陈志强",
                "企业班学员",
                "团队一起报的禅修班，同事们的状态肉眼可见地放松下来。",
                5,
            ),
            Testimonial::new("王佳怡", "瑜伽会员", "课程安排很贴心，呼吸引导做得特别细致。", 4),
            Testimonial::new("张栩", "冥想初学者", "零基础也能跟上，入门一周就有感觉了。", 5),
        ];
        Self {
            slides,
            interval_ms: default_interval_ms(),
            dirty: true, // 首次退出时落盘
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
