use serde_json::json;

use crate::call::ApiCall;
use crate::client::ContentClient;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::types::{Category, CategorySaveDto, CategoryType, EntityStatus};

const CATEGORIES: &str = "/categories";

impl ContentClient {
    /// Every category as a flat list.
    pub fn list_categories(&self) -> ApiCall<Vec<Category>> {
        self.bare(HttpMethod::Get, CATEGORIES)
    }

    pub fn get_category(&self, id: u64) -> ApiCall<Category> {
        self.bare(HttpMethod::Get, &format!("{CATEGORIES}/{id}"))
    }

    pub fn categories_by_type(&self, category_type: CategoryType) -> ApiCall<Vec<Category>> {
        self.get_pairs(
            &format!("{CATEGORIES}/type"),
            vec![("type".to_string(), category_type.as_str().to_string())],
        )
    }

    pub fn enabled_categories(&self) -> ApiCall<Vec<Category>> {
        self.bare(HttpMethod::Get, &format!("{CATEGORIES}/enabled"))
    }

    pub fn child_categories(&self, parent_id: u64) -> ApiCall<Vec<Category>> {
        self.get_pairs(
            &format!("{CATEGORIES}/children"),
            vec![("parentId".to_string(), parent_id.to_string())],
        )
    }

    /// Roots with `children` filled in, optionally restricted to one type.
    pub fn category_tree(&self, category_type: Option<CategoryType>) -> ApiCall<Vec<Category>> {
        let query = category_type
            .map(|t| vec![("type".to_string(), t.as_str().to_string())])
            .unwrap_or_default();
        self.get_pairs(&format!("{CATEGORIES}/tree"), query)
    }

    /// Whether `name` is taken, ignoring the category `exclude_id` (for edits).
    pub fn category_name_exists(&self, name: &str, exclude_id: Option<u64>) -> ApiCall<bool> {
        self.name_exists(CATEGORIES, name, exclude_id)
    }

    /// Number of content items filed under the category.
    pub fn category_content_count(&self, id: u64) -> ApiCall<u64> {
        self.bare(HttpMethod::Get, &format!("{CATEGORIES}/{id}/count"))
    }

    pub fn create_category(&self, dto: &CategorySaveDto) -> Result<ApiCall<Category>, ApiError> {
        self.json(HttpMethod::Post, CATEGORIES, dto)
    }

    pub fn update_category(&self, id: u64, dto: &CategorySaveDto) -> Result<ApiCall<Category>, ApiError> {
        self.json(HttpMethod::Put, &format!("{CATEGORIES}/{id}"), dto)
    }

    pub fn update_category_status(&self, id: u64, status: EntityStatus) -> Result<ApiCall<()>, ApiError> {
        self.json(
            HttpMethod::Put,
            &format!("{CATEGORIES}/{id}/status"),
            &json!({ "status": status }),
        )
    }

    pub fn update_category_sort(&self, id: u64, sort_order: i32) -> Result<ApiCall<()>, ApiError> {
        self.json(
            HttpMethod::Put,
            &format!("{CATEGORIES}/{id}/sort"),
            &json!({ "sortOrder": sort_order }),
        )
    }

    /// Reparent a category. `None` moves it to the root and is sent as an
    /// explicit `null`.
    pub fn move_category(&self, id: u64, parent_id: Option<u64>) -> Result<ApiCall<()>, ApiError> {
        self.json(
            HttpMethod::Put,
            &format!("{CATEGORIES}/{id}/move"),
            &json!({ "parentId": parent_id }),
        )
    }

    pub fn delete_category(&self, id: u64) -> ApiCall<()> {
        self.bare(HttpMethod::Delete, &format!("{CATEGORIES}/{id}"))
    }

    pub fn batch_delete_categories(&self, ids: &[u64]) -> Result<ApiCall<()>, ApiError> {
        self.batch_delete(CATEGORIES, ids)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::ContentClient;
    use crate::http::{HttpMethod, HttpResponse};
    use crate::types::{CategoryType, EntityStatus};

    fn client() -> ContentClient {
        ContentClient::new("http://localhost:8080/api")
    }

    fn body(req: &crate::http::HttpRequest) -> serde_json::Value {
        serde_json::from_str(req.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn reads_use_documented_paths() {
        let c = client();
        assert_eq!(c.list_categories().request().path, "http://localhost:8080/api/categories");
        assert_eq!(c.get_category(42).request().path, "http://localhost:8080/api/categories/42");
        assert_eq!(c.enabled_categories().request().path, "http://localhost:8080/api/categories/enabled");
        assert_eq!(
            c.category_content_count(42).request().path,
            "http://localhost:8080/api/categories/42/count"
        );

        let by_type = c.categories_by_type(CategoryType::AiNews).into_request();
        assert_eq!(by_type.path, "http://localhost:8080/api/categories/type");
        assert_eq!(by_type.query_param("type"), Some("AI_NEWS"));

        let children = c.child_categories(3).into_request();
        assert_eq!(children.path, "http://localhost:8080/api/categories/children");
        assert_eq!(children.query_param("parentId"), Some("3"));
    }

    #[test]
    fn tree_type_filter_is_optional() {
        let c = client();
        assert!(c.category_tree(None).request().query.is_empty());
        assert_eq!(
            c.category_tree(Some(CategoryType::Article)).request().query_param("type"),
            Some("ARTICLE")
        );
    }

    #[test]
    fn move_to_root_sends_explicit_null() {
        let req = client().move_category(42, None).unwrap().into_request();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8080/api/categories/42/move");
        assert_eq!(body(&req), serde_json::json!({ "parentId": null }));

        let req = client().move_category(42, Some(7)).unwrap().into_request();
        assert_eq!(body(&req), serde_json::json!({ "parentId": 7 }));
    }

    #[test]
    fn status_and_sort_bodies() {
        let c = client();
        let req = c.update_category_status(42, EntityStatus::Inactive).unwrap().into_request();
        assert_eq!(req.path, "http://localhost:8080/api/categories/42/status");
        assert_eq!(body(&req), serde_json::json!({ "status": "INACTIVE" }));

        let req = c.update_category_sort(42, 3).unwrap().into_request();
        assert_eq!(req.path, "http://localhost:8080/api/categories/42/sort");
        assert_eq!(body(&req), serde_json::json!({ "sortOrder": 3 }));
    }

    #[test]
    fn exists_returns_boolean() {
        let call = client().category_name_exists("AI", Some(4));
        assert_eq!(call.request().path, "http://localhost:8080/api/categories/exists");
        assert_eq!(call.request().query_param("name"), Some("AI"));
        assert!(call.parse(HttpResponse::ok(r#"{"code":200,"data":true}"#)).unwrap());
    }

    #[test]
    fn batch_delete_body_is_id_array() {
        let req = client().batch_delete_categories(&[5, 4]).unwrap().into_request();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8080/api/categories/batch");
        assert_eq!(body(&req), serde_json::json!([5, 4]));
    }
}
