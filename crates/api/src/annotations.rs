//! Annotation names recognized on certificate orders
//!
//! These strings are part of the external interface and must match the
//! annotations users place on their resources byte for byte.

/// Overrides the ingress name an HTTP-01 solver edits to serve the challenge.
pub const HTTP01_INGRESS_NAME_OVERRIDE: &str =
    "acme.cert-manager.io/http01-override-ingress-name";

/// Overrides the ingress class an HTTP-01 solver uses for a managed ingress.
pub const HTTP01_INGRESS_CLASS_OVERRIDE: &str =
    "acme.cert-manager.io/http01-override-ingress-class";
