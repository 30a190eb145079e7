//! Certificate order types
//!
//! An order is a request to issue a certificate for a set of DNS names. The
//! order's labels drive solver selector matching, and a pair of recognized
//! annotations can override HTTP-01 ingress settings per order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::annotations;

/// A certificate order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Labels attached to the order, matched by solver selectors
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// Annotations attached to the order
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: HashMap<String, String>,

    /// DNS names requested for the certificate
    #[serde(default)]
    pub dns_names: Vec<String>,
}

impl Order {
    /// Value of the HTTP-01 ingress name override annotation, if set
    pub fn http01_ingress_name_override(&self) -> Option<&str> {
        self.annotations
            .get(annotations::HTTP01_INGRESS_NAME_OVERRIDE)
            .map(String::as_str)
    }

    /// Value of the HTTP-01 ingress class override annotation, if set
    pub fn http01_ingress_class_override(&self) -> Option<&str> {
        self.annotations
            .get(annotations::HTTP01_INGRESS_CLASS_OVERRIDE)
            .map(String::as_str)
    }

    /// Parse the HTTP-01 override annotations into a single override.
    ///
    /// Returns `None` when neither annotation is set. Both set at once is an
    /// error, since the executor could not tell which ingress to touch.
    pub fn http01_override(&self) -> Result<Option<Http01Override>, OverrideConflict> {
        match (
            self.http01_ingress_name_override(),
            self.http01_ingress_class_override(),
        ) {
            (Some(_), Some(_)) => Err(OverrideConflict),
            (Some(name), None) => Ok(Some(Http01Override::IngressName(name.to_string()))),
            (None, Some(class)) => Ok(Some(Http01Override::IngressClass(class.to_string()))),
            (None, None) => Ok(None),
        }
    }
}

/// A parsed HTTP-01 override annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Http01Override {
    /// Serve the challenge by editing the named ingress
    IngressName(String),
    /// Serve the challenge through a managed ingress of this class
    IngressClass(String),
}

/// Both HTTP-01 override annotations are set on one order
#[derive(Debug, Error)]
#[error(
    "both '{name}' and '{class}' are set, only one may be used",
    name = annotations::HTTP01_INGRESS_NAME_OVERRIDE,
    class = annotations::HTTP01_INGRESS_CLASS_OVERRIDE,
)]
pub struct OverrideConflict;
