use serde_json::json;

use crate::call::ApiCall;
use crate::client::ContentClient;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::types::{EntityStatus, PageResponse, Tag, TagCloudItem, TagQuery, TagSaveDto, TagStats, TagType};

const TAGS: &str = "/tags";

pub const DEFAULT_POPULAR_LIMIT: u32 = 20;
pub const DEFAULT_CLOUD_LIMIT: u32 = 50;

impl ContentClient {
    pub fn list_tags(&self, query: &TagQuery) -> Result<ApiCall<PageResponse<Tag>>, ApiError> {
        self.get_query(TAGS, query)
    }

    pub fn get_tag(&self, id: u64) -> ApiCall<Tag> {
        self.bare(HttpMethod::Get, &format!("{TAGS}/{id}"))
    }

    pub fn enabled_tags(&self) -> ApiCall<Vec<Tag>> {
        self.bare(HttpMethod::Get, &format!("{TAGS}/enabled"))
    }

    pub fn tags_by_type(&self, tag_type: TagType) -> ApiCall<Vec<Tag>> {
        self.get_pairs(
            &format!("{TAGS}/type"),
            vec![("type".to_string(), tag_type.as_str().to_string())],
        )
    }

    /// Unpaged name search.
    pub fn search_tags(&self, keyword: &str) -> ApiCall<Vec<Tag>> {
        self.get_pairs(
            &format!("{TAGS}/search"),
            vec![("keyword".to_string(), keyword.to_string())],
        )
    }

    pub fn tag_name_exists(&self, name: &str, exclude_id: Option<u64>) -> ApiCall<bool> {
        self.name_exists(TAGS, name, exclude_id)
    }

    pub fn tag_content_count(&self, id: u64) -> ApiCall<u64> {
        self.bare(HttpMethod::Get, &format!("{TAGS}/{id}/count"))
    }

    pub fn popular_tags(&self, limit: Option<u32>) -> ApiCall<Vec<Tag>> {
        self.bounded_list(TAGS, "popular", limit.unwrap_or(DEFAULT_POPULAR_LIMIT))
    }

    pub fn tag_stats(&self) -> ApiCall<TagStats> {
        self.bare(HttpMethod::Get, &format!("{TAGS}/stats"))
    }

    pub fn tag_cloud(&self, limit: Option<u32>) -> ApiCall<Vec<TagCloudItem>> {
        self.bounded_list(TAGS, "cloud", limit.unwrap_or(DEFAULT_CLOUD_LIMIT))
    }

    pub fn create_tag(&self, dto: &TagSaveDto) -> Result<ApiCall<Tag>, ApiError> {
        self.json(HttpMethod::Post, TAGS, dto)
    }

    /// Server-side upsert by name; `tag_type` defaults to `COMMON`.
    ///
    /// The response does not say whether the tag already existed.
    pub fn get_or_create_tag(&self, name: &str, tag_type: Option<TagType>) -> Result<ApiCall<Tag>, ApiError> {
        self.json(
            HttpMethod::Post,
            &format!("{TAGS}/get-or-create"),
            &json!({ "name": name, "type": tag_type.unwrap_or_default() }),
        )
    }

    /// Batch upsert in one request. The server decides result ordering.
    pub fn batch_get_or_create_tags(
        &self,
        names: &[String],
        tag_type: Option<TagType>,
    ) -> Result<ApiCall<Vec<Tag>>, ApiError> {
        self.json(
            HttpMethod::Post,
            &format!("{TAGS}/batch-get-or-create"),
            &json!({ "names": names, "type": tag_type.unwrap_or_default() }),
        )
    }

    pub fn update_tag(&self, id: u64, dto: &TagSaveDto) -> Result<ApiCall<Tag>, ApiError> {
        self.json(HttpMethod::Put, &format!("{TAGS}/{id}"), dto)
    }

    pub fn update_tag_status(&self, id: u64, status: EntityStatus) -> Result<ApiCall<()>, ApiError> {
        self.json(HttpMethod::Put, &format!("{TAGS}/{id}/status"), &json!({ "status": status }))
    }

    pub fn update_tag_sort(&self, id: u64, sort_order: i32) -> Result<ApiCall<()>, ApiError> {
        self.json(
            HttpMethod::Put,
            &format!("{TAGS}/{id}/sort"),
            &json!({ "sortOrder": sort_order }),
        )
    }

    pub fn update_tag_color(&self, id: u64, color: &str) -> Result<ApiCall<()>, ApiError> {
        self.json(HttpMethod::Put, &format!("{TAGS}/{id}/color"), &json!({ "color": color }))
    }

    pub fn delete_tag(&self, id: u64) -> ApiCall<()> {
        self.bare(HttpMethod::Delete, &format!("{TAGS}/{id}"))
    }

    pub fn batch_delete_tags(&self, ids: &[u64]) -> Result<ApiCall<()>, ApiError> {
        self.batch_delete(TAGS, ids)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::ContentClient;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};
    use crate::types::{EntityStatus, TagQuery, TagType};

    fn client() -> ContentClient {
        ContentClient::new("http://localhost:8080/api")
    }

    fn body(req: &HttpRequest) -> serde_json::Value {
        serde_json::from_str(req.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn get_or_create_defaults_to_common() {
        let req = client().get_or_create_tag("LLM", None).unwrap().into_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/api/tags/get-or-create");
        assert_eq!(body(&req), serde_json::json!({ "name": "LLM", "type": "COMMON" }));

        let req = client().get_or_create_tag("LLM", Some(TagType::AiNews)).unwrap().into_request();
        assert_eq!(body(&req)["type"], "AI_NEWS");
    }

    #[test]
    fn batch_get_or_create_keeps_name_order() {
        let names = vec!["rust".to_string(), "async".to_string()];
        let req = client().batch_get_or_create_tags(&names, None).unwrap().into_request();
        assert_eq!(req.path, "http://localhost:8080/api/tags/batch-get-or-create");
        assert_eq!(
            body(&req),
            serde_json::json!({ "names": ["rust", "async"], "type": "COMMON" })
        );
    }

    #[test]
    fn list_uses_type_key() {
        let query = TagQuery {
            tag_type: Some(TagType::Article),
            status: Some(EntityStatus::Active),
            ..TagQuery::default()
        };
        let req = client().list_tags(&query).unwrap().into_request();
        assert_eq!(req.path, "http://localhost:8080/api/tags");
        assert_eq!(
            req.query,
            vec![
                ("type".to_string(), "ARTICLE".to_string()),
                ("status".to_string(), "ACTIVE".to_string()),
            ]
        );
    }

    #[test]
    fn derived_reads_and_limits() {
        let c = client();
        assert_eq!(c.popular_tags(None).request().query_param("limit"), Some("20"));
        assert_eq!(c.tag_cloud(None).request().query_param("limit"), Some("50"));
        assert_eq!(c.tag_cloud(Some(5)).request().path, "http://localhost:8080/api/tags/cloud");
        assert_eq!(c.tag_stats().request().path, "http://localhost:8080/api/tags/stats");
        assert_eq!(c.enabled_tags().request().path, "http://localhost:8080/api/tags/enabled");
        assert_eq!(c.tags_by_type(TagType::Common).request().query_param("type"), Some("COMMON"));
        assert_eq!(c.search_tags("ru").request().query_param("keyword"), Some("ru"));
    }

    #[test]
    fn facet_updates() {
        let c = client();
        let req = c.update_tag_color(42, "#ff6600").unwrap().into_request();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8080/api/tags/42/color");
        assert_eq!(body(&req), serde_json::json!({ "color": "#ff6600" }));

        let req = c.update_tag_status(42, EntityStatus::Active).unwrap().into_request();
        assert_eq!(body(&req), serde_json::json!({ "status": "ACTIVE" }));

        let req = c.update_tag_sort(42, -1).unwrap().into_request();
        assert_eq!(req.path, "http://localhost:8080/api/tags/42/sort");
    }

    #[test]
    fn cloud_items_parse() {
        let items = client()
            .tag_cloud(Some(2))
            .parse(HttpResponse::ok(
                r##"{"code":200,"data":[{"name":"rust","value":9,"color":"#dea584"},{"name":"go","value":3}]}"##,
            ))
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].color, None);
    }

    #[test]
    fn count_for_missing_tag_surfaces_server_error() {
        let err = client()
            .tag_content_count(42)
            .parse(HttpResponse::ok(r#"{"code":404,"message":"tag not found","data":null}"#))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn name_exists_sends_name_and_optional_exclusion() {
        let c = client();
        let req = c.tag_name_exists("LLM", None).into_request();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/api/tags/exists");
        assert_eq!(req.query, vec![("name".to_string(), "LLM".to_string())]);

        let req = c.tag_name_exists("LLM", Some(42)).into_request();
        assert_eq!(req.url(), "http://localhost:8080/api/tags/exists?name=LLM&excludeId=42");

        let taken = c
            .tag_name_exists("LLM", None)
            .parse(HttpResponse::ok(r#"{"code":200,"message":"ok","data":true}"#))
            .unwrap();
        assert!(taken);
    }
}
