use crate::prelude::*;

const CONTENT_TYPE: &str = "Content-Type";

impl Endpoint {
    /// Compiles this endpoint into a [`ConcreteRequest`] against `config`.
    ///
    /// Pure: the same endpoint and config always yield an equal request.
    pub fn concrete_request(
        &self,
        config: &NetworkConfig,
    ) -> Result<ConcreteRequest, RequestGenerationError> {
        let url = self.url(config)?;
        let body = self.encoded_body()?;

        let mut headers = BTreeMap::new();
        for (name, value) in config.headers.iter().collect::<BTreeMap<_, _>>() {
            insert_header(&mut headers, name, value);
        }
        if body.is_some() {
            if let Some(content_type) = self.body_encoder.content_type() {
                insert_header(&mut headers, CONTENT_TYPE, content_type);
            }
        }
        for (name, value) in &self.headers {
            insert_header(&mut headers, name, value);
        }

        Ok(ConcreteRequest {
            url,
            method: self.method,
            headers,
            body,
            cache_policy: config.cache_policy,
        })
    }

    /// The full path verbatim, or the base URL joined with the path, plus the
    /// serialized query items. Parsing only validates, it never rewrites.
    fn url(&self, config: &NetworkConfig) -> Result<String, RequestGenerationError> {
        let mut endpoint = if self.is_full_path {
            self.path.clone()
        } else {
            format!(
                "{}/{}",
                config.base_url.trim_end_matches('/'),
                self.path.trim_start_matches('/')
            )
        };

        Url::parse(&endpoint)
            .map_err(|_| RequestGenerationError::InvalidUrl { url: endpoint.clone() })?;

        let mut query_items = config
            .query_parameters
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<BTreeMap<_, _>>();
        query_items.extend(self.query.flattened());

        if !query_items.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query_items)
                .finish();
            endpoint.push(if endpoint.contains('?') { '&' } else { '?' });
            endpoint.push_str(&query);
        }
        Ok(endpoint)
    }

    fn encoded_body(&self) -> Result<Option<Vec<u8>>, RequestGenerationError> {
        if !self.method.carries_body() {
            return Ok(None);
        }
        match self.body.as_map() {
            Some(parameters) if !parameters.is_empty() => {
                self.body_encoder.encode(parameters).map(Some)
            }
            _ => Ok(None),
        }
    }
}

/// Header names are case-insensitive, a later insert replaces any earlier
/// entry of the same name regardless of casing.
fn insert_header(headers: &mut BTreeMap<String, String>, name: &str, value: &str) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
    headers.insert(name.to_owned(), value.to_owned());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> NetworkConfig {
        NetworkConfig::new("https://dummyjson.com")
            .with_header("Accept", "application/json")
            .with_header("X-Client", "ios")
            .with_query_parameter("api_key", "abc")
    }

    #[test]
    fn full_path_is_used_verbatim() {
        let sut = Endpoint::builder("http://mock.test.com/list", HttpMethod::Get)
            .full_path(true)
            .build()
            .unwrap();
        let request = sut.concrete_request(&NetworkConfig::new("https://other.host")).unwrap();
        assert_eq!(request.url.as_str(), "http://mock.test.com/list");
    }

    #[test]
    fn relative_path_is_joined_with_single_slash() {
        for (base, path) in [
            ("https://dummyjson.com", "products"),
            ("https://dummyjson.com/", "products"),
            ("https://dummyjson.com/", "/products"),
        ] {
            let request = Endpoint::new(path, HttpMethod::Get)
                .concrete_request(&NetworkConfig::new(base))
                .unwrap();
            assert_eq!(request.url.as_str(), "https://dummyjson.com/products");
        }
    }

    #[test]
    fn invalid_url_fails() {
        let result = Endpoint::new("products", HttpMethod::Get)
            .concrete_request(&NetworkConfig::new("not a url"));
        assert_eq!(
            result,
            Err(RequestGenerationError::InvalidUrl {
                url: "not a url/products".to_owned()
            })
        );
    }

    #[test]
    fn query_merges_defaults_with_endpoint_winning() {
        let sut = Endpoint::builder("products", HttpMethod::Get)
            .query_parameter("limit", 10)
            .query_parameter("api_key", "override")
            .build()
            .unwrap();
        let request = sut.concrete_request(&config()).unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://dummyjson.com/products?api_key=override&limit=10"
        );
    }

    #[test]
    fn no_query_string_when_empty() {
        let request = Endpoint::new("products", HttpMethod::Get)
            .concrete_request(&NetworkConfig::new("https://dummyjson.com"))
            .unwrap();
        assert_eq!(request.url, "https://dummyjson.com/products");
    }

    #[test]
    fn headers_merge_with_endpoint_winning() {
        let sut = Endpoint::builder("products", HttpMethod::Get)
            .header("X-Client", "watch")
            .build()
            .unwrap();
        let request = sut.concrete_request(&config()).unwrap();
        assert_eq!(request.headers["Accept"], "application/json");
        assert_eq!(request.headers["X-Client"], "watch");
    }

    #[test]
    fn get_and_delete_never_carry_body() {
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            let sut = Endpoint::builder("products/1", method)
                .body_parameter("title", "Phone")
                .build()
                .unwrap();
            let request = sut.concrete_request(&config()).unwrap();
            assert_eq!(request.body, None);
            assert!(!request.headers.contains_key(CONTENT_TYPE));
        }
    }

    #[test]
    fn json_body_sets_content_type() {
        let sut = Endpoint::builder("products/add", HttpMethod::Post)
            .body_parameter("title", "Phone")
            .build()
            .unwrap();
        let request = sut.concrete_request(&config()).unwrap();
        let body: Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "title": "Phone" }));
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn endpoint_content_type_overrides_encoder() {
        let sut = Endpoint::builder("products/add", HttpMethod::Put)
            .header(CONTENT_TYPE, "application/vnd.api+json")
            .body_parameter("title", "Phone")
            .build()
            .unwrap();
        let request = sut.concrete_request(&config()).unwrap();
        assert_eq!(request.headers[CONTENT_TYPE], "application/vnd.api+json");
    }

    #[test]
    fn empty_body_parameters_attach_no_body() {
        let request = Endpoint::new("products/add", HttpMethod::Post)
            .concrete_request(&config())
            .unwrap();
        assert_eq!(request.body, None);
    }

    #[test]
    fn cache_policy_comes_from_config() {
        let config = config().with_cache_policy(CachePolicy::ReturnCacheDataElseLoad);
        let request = Endpoint::new("products", HttpMethod::Get)
            .concrete_request(&config)
            .unwrap();
        assert_eq!(request.cache_policy, CachePolicy::ReturnCacheDataElseLoad);
    }

    #[test]
    fn building_twice_is_identical() {
        let sut = Endpoint::builder("products/add", HttpMethod::Patch)
            .query_parameter("b", 2)
            .query_parameter("a", 1)
            .body_parameter("title", "Phone")
            .body_parameter("price", 549)
            .body_encoder(BodyEncoder::UrlEncodedForm)
            .build()
            .unwrap();
        let config = config();
        assert_eq!(
            sut.concrete_request(&config).unwrap(),
            sut.concrete_request(&config).unwrap()
        );
    }

    #[test]
    fn full_path_is_not_normalized() {
        for path in ["http://mock.test.com", "HTTP://Mock.Test.com:80/a/../b"] {
            let sut = Endpoint::builder(path, HttpMethod::Get)
                .full_path(true)
                .build()
                .unwrap();
            let request = sut.concrete_request(&NetworkConfig::new("https://other.host")).unwrap();
            assert_eq!(request.url, path);
        }
    }

    #[test]
    fn full_path_with_query_appends_with_ampersand() {
        let sut = Endpoint::builder("https://cdn.dummyjson.com/search?q=phone", HttpMethod::Get)
            .full_path(true)
            .query_parameter("limit", 5)
            .build()
            .unwrap();
        let request = sut.concrete_request(&NetworkConfig::new("https://other.host")).unwrap();
        assert_eq!(request.url, "https://cdn.dummyjson.com/search?q=phone&limit=5");
    }

    #[test]
    fn endpoint_header_overrides_regardless_of_case() {
        let sut = Endpoint::builder("products/add", HttpMethod::Post)
            .header("content-type", "application/vnd.api+json")
            .header("accept", "text/plain")
            .body_parameter("title", "Phone")
            .build()
            .unwrap();
        let request = sut.concrete_request(&config()).unwrap();
        let content_types = request
            .headers
            .keys()
            .filter(|name| name.eq_ignore_ascii_case(CONTENT_TYPE))
            .count();
        assert_eq!(content_types, 1);
        assert_eq!(request.headers["content-type"], "application/vnd.api+json");
        assert!(!request.headers.contains_key("Accept"));
        assert_eq!(request.headers["accept"], "text/plain");

        let ffi = FFINetworkingRequest::from(request);
        assert_eq!(
            ffi.headers
                .keys()
                .filter(|name| name.eq_ignore_ascii_case(CONTENT_TYPE))
                .count(),
            1
        );
    }

    #[derive(Serialize)]
    struct NewProduct {
        title: String,
        price: u32,
    }

    fn new_product() -> NewProduct {
        NewProduct {
            title: "Phone & case".to_owned(),
            price: 549,
        }
    }

    #[test]
    fn body_encodable_json_wins_over_fields() {
        let sut = Endpoint::builder("products/add", HttpMethod::Post)
            .body_parameter("ignored", true)
            .body_encodable(&new_product())
            .body_parameter("also_ignored", 1)
            .build()
            .unwrap();
        let request = sut.concrete_request(&config()).unwrap();
        assert_eq!(
            request.body.as_deref(),
            Some(br#"{"title":"Phone & case","price":549}"#.as_slice())
        );
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn body_encodable_form_wins_over_fields() {
        let sut = Endpoint::builder("products/add", HttpMethod::Post)
            .body_parameter("ignored", true)
            .body_encodable(&new_product())
            .body_encoder(BodyEncoder::UrlEncodedForm)
            .build()
            .unwrap();
        let request = sut.concrete_request(&config()).unwrap();
        assert_eq!(
            request.body.as_deref(),
            Some(b"title=Phone+%26+case&price=549".as_slice())
        );
        assert_eq!(
            request.headers[CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );
    }
}
