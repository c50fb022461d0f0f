use crate::prelude::*;

/// A declarative, immutable description of an HTTP request, compiled into a
/// [`ConcreteRequest`] by [`Endpoint::concrete_request`].
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
    pub(crate) path: String,
    pub(crate) is_full_path: bool,
    pub(crate) method: HttpMethod,
    pub(crate) headers: BTreeMap<String, String>,
    pub(crate) query: Parameters,
    pub(crate) body: Parameters,
    pub(crate) body_encoder: BodyEncoder,
}

impl Endpoint {
    /// An endpoint without any headers or parameters.
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            is_full_path: false,
            method,
            headers: BTreeMap::new(),
            query: Parameters::None,
            body: Parameters::None,
            body_encoder: BodyEncoder::default(),
        }
    }

    pub fn builder(path: impl Into<String>, method: HttpMethod) -> EndpointBuilder {
        EndpointBuilder {
            endpoint: Self::new(path, method),
            failure: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_full_path(&self) -> bool {
        self.is_full_path
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn query(&self) -> &Parameters {
        &self.query
    }

    pub fn body(&self) -> &Parameters {
        &self.body
    }

    pub fn body_encoder(&self) -> BodyEncoder {
        self.body_encoder
    }
}

/// Builds an [`Endpoint`]. Serialization failures of encodable objects are
/// held back and reported by [`EndpointBuilder::build`].
#[derive(Debug)]
pub struct EndpointBuilder {
    endpoint: Endpoint,
    failure: Option<RequestGenerationError>,
}

impl EndpointBuilder {
    /// Use the path verbatim as the URL instead of joining it to the base URL.
    pub fn full_path(mut self, is_full_path: bool) -> Self {
        self.endpoint.is_full_path = is_full_path;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.endpoint.headers.insert(name.into(), value.into());
        self
    }

    pub fn query_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.endpoint.query.insert_field(key, value.into());
        self
    }

    pub fn query_encodable<T: Serialize>(mut self, encodable: &T) -> Self {
        if let Err(error) = self.endpoint.query.set_encodable(encodable) {
            self.failure.get_or_insert(error);
        }
        self
    }

    pub fn body_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.endpoint.body.insert_field(key, value.into());
        self
    }

    pub fn body_encodable<T: Serialize>(mut self, encodable: &T) -> Self {
        if let Err(error) = self.endpoint.body.set_encodable(encodable) {
            self.failure.get_or_insert(error);
        }
        self
    }

    pub fn body_encoder(mut self, body_encoder: BodyEncoder) -> Self {
        self.endpoint.body_encoder = body_encoder;
        self
    }

    pub fn build(self) -> Result<Endpoint, RequestGenerationError> {
        match self.failure {
            Some(error) => Err(error),
            None => Ok(self.endpoint),
        }
    }
}
