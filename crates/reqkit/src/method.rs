//! HTTP method tags

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The five HTTP methods a [`Request`](crate::Request) can send
///
/// Method names are validated at this boundary: [`FromStr`] accepts only the
/// canonical uppercase tokens, so the send path never sees an unrecognized
/// method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
    /// HTTP PATCH
    Patch,
    /// HTTP DELETE
    Delete,
}

impl Method {
    /// Canonical uppercase token for this method
    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether this method sends a request payload
    ///
    /// True for POST, PUT, and PATCH. GET and DELETE never send a body even
    /// when one has been set on the request.
    pub const fn allows_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Exact match against the canonical uppercase forms
    ///
    /// Anything else, including lowercase spellings, fails with
    /// [`Error::UnsupportedMethod`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            other => Err(Error::UnsupportedMethod(other.to_string())),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_forms() {
        assert_eq!("GET".parse::<Method>().expect("GET"), Method::Get);
        assert_eq!("POST".parse::<Method>().expect("POST"), Method::Post);
        assert_eq!("PUT".parse::<Method>().expect("PUT"), Method::Put);
        assert_eq!("PATCH".parse::<Method>().expect("PATCH"), Method::Patch);
        assert_eq!("DELETE".parse::<Method>().expect("DELETE"), Method::Delete);
    }

    #[test]
    fn test_parse_rejects_unknown_method() {
        let err = "FAKE".parse::<Method>().expect_err("FAKE should be rejected");
        assert!(matches!(err, Error::UnsupportedMethod(name) if name == "FAKE"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("get".parse::<Method>().is_err());
        assert!("Post".parse::<Method>().is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_allows_body() {
        assert!(Method::Post.allows_body());
        assert!(Method::Put.allows_body());
        assert!(Method::Patch.allows_body());
        assert!(!Method::Get.allows_body());
        assert!(!Method::Delete.allows_body());
    }

    #[test]
    fn test_into_reqwest_method() {
        assert_eq!(reqwest::Method::from(Method::Patch), reqwest::Method::PATCH);
    }
}
