//! Request helpers shared by the endpoints

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::types::ListQuery;

use super::HttpAdminApi;

impl HttpAdminApi {
    fn url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.authorized(self.client.get(self.url(path)));
        let body = HttpUtils::execute_request(builder, "GET", path).await?;
        HttpUtils::parse_json(&body)
    }

    /// 执行 GET 请求 (带分页与名称过滤)
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<T> {
        let builder = self.authorized(self.client.get(self.url(path))).query(&[
            ("page", query.page.to_string()),
            ("limit", query.page_size.to_string()),
            ("name", query.pattern.to_string()),
        ]);
        let resource = format!("{path}?page={}&name={}", query.page, query.pattern);
        let body = HttpUtils::execute_request(builder, "GET", &resource).await?;
        HttpUtils::parse_json(&body)
    }

    /// 执行 DELETE 请求
    ///
    /// The confirmation body (`{ "message": ... }`) is not needed and ignored.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let builder = self.authorized(self.client.delete(self.url(path)));
        HttpUtils::execute_request(builder, "DELETE", path).await?;
        Ok(())
    }
}

/// Percent-encode one path segment (ids come from the server but are echoed back verbatim).
pub(crate) fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
