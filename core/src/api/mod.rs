//! One `impl ContentClient` block per server resource.
//!
//! | Resource | Path prefix |
//! |----------|-------------|
//! | Article | `/articles` |
//! | AiNews | `/ai-news` |
//! | Category | `/categories` |
//! | Tag | `/tags` |

pub mod ai_news;
pub mod article;
pub mod category;
pub mod tag;

/// Default `limit` for recommended/popular/latest reads.
pub const DEFAULT_LIST_LIMIT: u32 = 10;
