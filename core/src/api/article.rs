use crate::api::DEFAULT_LIST_LIMIT;
use crate::call::ApiCall;
use crate::client::{ContentAction, ContentClient};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::query::leading_pair_then;
use crate::types::{Article, ArticleQuery, ArticleSaveDto, PageResponse};

const ARTICLES: &str = "/articles";

impl ContentClient {
    /// `GET /articles` with the query fields as parameters.
    pub fn list_articles(&self, query: &ArticleQuery) -> Result<ApiCall<PageResponse<Article>>, ApiError> {
        self.get_query(ARTICLES, query)
    }

    pub fn get_article(&self, id: u64) -> ApiCall<Article> {
        self.bare(HttpMethod::Get, &format!("{ARTICLES}/{id}"))
    }

    pub fn create_article(&self, dto: &ArticleSaveDto) -> Result<ApiCall<Article>, ApiError> {
        self.json(HttpMethod::Post, ARTICLES, dto)
    }

    pub fn update_article(&self, id: u64, dto: &ArticleSaveDto) -> Result<ApiCall<Article>, ApiError> {
        self.json(HttpMethod::Put, &format!("{ARTICLES}/{id}"), dto)
    }

    pub fn delete_article(&self, id: u64) -> ApiCall<()> {
        self.bare(HttpMethod::Delete, &format!("{ARTICLES}/{id}"))
    }

    pub fn batch_delete_articles(&self, ids: &[u64]) -> Result<ApiCall<()>, ApiError> {
        self.batch_delete(ARTICLES, ids)
    }

    /// `PUT /articles/{id}/{action}` for any of the toggle endpoints.
    pub fn article_action(&self, id: u64, action: ContentAction) -> ApiCall<()> {
        self.content_action(ARTICLES, id, action)
    }

    pub fn publish_article(&self, id: u64) -> ApiCall<()> {
        self.article_action(id, ContentAction::Publish)
    }

    pub fn unpublish_article(&self, id: u64) -> ApiCall<()> {
        self.article_action(id, ContentAction::Unpublish)
    }

    pub fn top_article(&self, id: u64) -> ApiCall<()> {
        self.article_action(id, ContentAction::Top)
    }

    pub fn untop_article(&self, id: u64) -> ApiCall<()> {
        self.article_action(id, ContentAction::Untop)
    }

    pub fn recommend_article(&self, id: u64) -> ApiCall<()> {
        self.article_action(id, ContentAction::Recommend)
    }

    pub fn unrecommend_article(&self, id: u64) -> ApiCall<()> {
        self.article_action(id, ContentAction::Unrecommend)
    }

    pub fn increment_article_views(&self, id: u64) -> ApiCall<()> {
        self.article_action(id, ContentAction::View)
    }

    pub fn like_article(&self, id: u64) -> ApiCall<()> {
        self.article_action(id, ContentAction::Like)
    }

    pub fn unlike_article(&self, id: u64) -> ApiCall<()> {
        self.article_action(id, ContentAction::Unlike)
    }

    /// At most `limit` (default 10) items; ordering is the server's.
    pub fn recommended_articles(&self, limit: Option<u32>) -> ApiCall<Vec<Article>> {
        self.bounded_list(ARTICLES, "recommended", limit.unwrap_or(DEFAULT_LIST_LIMIT))
    }

    pub fn popular_articles(&self, limit: Option<u32>) -> ApiCall<Vec<Article>> {
        self.bounded_list(ARTICLES, "popular", limit.unwrap_or(DEFAULT_LIST_LIMIT))
    }

    pub fn latest_articles(&self, limit: Option<u32>) -> ApiCall<Vec<Article>> {
        self.bounded_list(ARTICLES, "latest", limit.unwrap_or(DEFAULT_LIST_LIMIT))
    }

    /// `GET /articles/search` with `keyword` first, then every query field.
    pub fn search_articles(
        &self,
        keyword: &str,
        query: Option<&ArticleQuery>,
    ) -> Result<ApiCall<PageResponse<Article>>, ApiError> {
        let pairs = leading_pair_then("keyword", keyword, query)?;
        Ok(self.get_pairs(&format!("{ARTICLES}/search"), pairs))
    }
}
