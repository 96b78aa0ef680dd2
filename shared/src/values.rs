use derive_more::{Display, From, Into};

/// Tag for the image the build service produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Display, From, Into)]
pub struct ImageName(String);

impl ImageName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Value of the numeric "API Endpoint" input. Sent as-is; the service decides
/// what the number means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Display, From, Into)]
pub struct EndpointValue(String);

impl EndpointValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_not_normalized() {
        let endpoint = EndpointValue::from("0080".to_string());
        assert_eq!(endpoint.as_str(), "0080");
        assert_eq!(endpoint.to_string(), "0080");
    }

    #[test]
    fn image_name_converts_back_into_string() {
        let name = ImageName::from("demo-app".to_string());
        let raw: String = name.clone().into();
        assert_eq!(raw, "demo-app");
        assert_eq!(ImageName::default().as_str(), "");
    }
}
