use crate::api::DEFAULT_LIST_LIMIT;
use crate::call::ApiCall;
use crate::client::{ContentAction, ContentClient};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::query::leading_pair_then;
use crate::types::{AiNews, AiNewsQuery, AiNewsSaveDto, PageResponse};

const AI_NEWS: &str = "/ai-news";

impl ContentClient {
    pub fn list_ai_news(&self, query: &AiNewsQuery) -> Result<ApiCall<PageResponse<AiNews>>, ApiError> {
        self.get_query(AI_NEWS, query)
    }

    pub fn get_ai_news(&self, id: u64) -> ApiCall<AiNews> {
        self.bare(HttpMethod::Get, &format!("{AI_NEWS}/{id}"))
    }

    pub fn create_ai_news(&self, dto: &AiNewsSaveDto) -> Result<ApiCall<AiNews>, ApiError> {
        self.json(HttpMethod::Post, AI_NEWS, dto)
    }

    pub fn update_ai_news(&self, id: u64, dto: &AiNewsSaveDto) -> Result<ApiCall<AiNews>, ApiError> {
        self.json(HttpMethod::Put, &format!("{AI_NEWS}/{id}"), dto)
    }

    pub fn delete_ai_news(&self, id: u64) -> ApiCall<()> {
        self.bare(HttpMethod::Delete, &format!("{AI_NEWS}/{id}"))
    }

    pub fn batch_delete_ai_news(&self, ids: &[u64]) -> Result<ApiCall<()>, ApiError> {
        self.batch_delete(AI_NEWS, ids)
    }

    pub fn ai_news_action(&self, id: u64, action: ContentAction) -> ApiCall<()> {
        self.content_action(AI_NEWS, id, action)
    }

    pub fn publish_ai_news(&self, id: u64) -> ApiCall<()> {
        self.ai_news_action(id, ContentAction::Publish)
    }

    pub fn unpublish_ai_news(&self, id: u64) -> ApiCall<()> {
        self.ai_news_action(id, ContentAction::Unpublish)
    }

    pub fn top_ai_news(&self, id: u64) -> ApiCall<()> {
        self.ai_news_action(id, ContentAction::Top)
    }

    pub fn untop_ai_news(&self, id: u64) -> ApiCall<()> {
        self.ai_news_action(id, ContentAction::Untop)
    }

    pub fn recommend_ai_news(&self, id: u64) -> ApiCall<()> {
        self.ai_news_action(id, ContentAction::Recommend)
    }

    pub fn unrecommend_ai_news(&self, id: u64) -> ApiCall<()> {
        self.ai_news_action(id, ContentAction::Unrecommend)
    }

    pub fn increment_ai_news_views(&self, id: u64) -> ApiCall<()> {
        self.ai_news_action(id, ContentAction::View)
    }

    pub fn like_ai_news(&self, id: u64) -> ApiCall<()> {
        self.ai_news_action(id, ContentAction::Like)
    }

    pub fn unlike_ai_news(&self, id: u64) -> ApiCall<()> {
        self.ai_news_action(id, ContentAction::Unlike)
    }

    pub fn recommended_ai_news(&self, limit: Option<u32>) -> ApiCall<Vec<AiNews>> {
        self.bounded_list(AI_NEWS, "recommended", limit.unwrap_or(DEFAULT_LIST_LIMIT))
    }

    pub fn popular_ai_news(&self, limit: Option<u32>) -> ApiCall<Vec<AiNews>> {
        self.bounded_list(AI_NEWS, "popular", limit.unwrap_or(DEFAULT_LIST_LIMIT))
    }

    pub fn latest_ai_news(&self, limit: Option<u32>) -> ApiCall<Vec<AiNews>> {
        self.bounded_list(AI_NEWS, "latest", limit.unwrap_or(DEFAULT_LIST_LIMIT))
    }

    pub fn search_ai_news(
        &self,
        keyword: &str,
        query: Option<&AiNewsQuery>,
    ) -> Result<ApiCall<PageResponse<AiNews>>, ApiError> {
        let pairs = leading_pair_then("keyword", keyword, query)?;
        Ok(self.get_pairs(&format!("{AI_NEWS}/search"), pairs))
    }

    /// `GET /ai-news/source` with `sourceName` first, then every query field.
    pub fn ai_news_by_source(
        &self,
        source_name: &str,
        query: Option<&AiNewsQuery>,
    ) -> Result<ApiCall<PageResponse<AiNews>>, ApiError> {
        let pairs = leading_pair_then("sourceName", source_name, query)?;
        Ok(self.get_pairs(&format!("{AI_NEWS}/source"), pairs))
    }
}
