use k8s_openapi::api::core::v1::Secret;
use kube::config::Kubeconfig;
use secrecy::ExposeSecret;

use crate::error::{ConversionError, Result};

/// Data key CAPI stores the kubeconfig under
pub static KUBECONFIG_DATA_KEY: &str = "value";

/// Connection details of a workload cluster, taken from the first cluster and
/// the first user of its kubeconfig
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterIdentity {
    pub name: String,
    pub server: String,
    pub ca_data: Option<String>,
    pub token: Option<String>,
    pub cert_data: Option<String>,
    pub key_data: Option<String>,
}

impl ClusterIdentity {
    /// Parse a kubeconfig document
    pub fn from_kubeconfig(raw: &str) -> Result<Self> {
        let kubeconfig: Kubeconfig = serde_norway::from_str(raw)?;

        let named_cluster = kubeconfig
            .clusters
            .into_iter()
            .next()
            .ok_or(ConversionError::EmptyKubeconfigError("clusters"))?;
        let user = kubeconfig
            .auth_infos
            .into_iter()
            .next()
            .ok_or(ConversionError::EmptyKubeconfigError("users"))?
            .auth_info
            .unwrap_or_default();

        let cluster = named_cluster
            .cluster
            .ok_or(ConversionError::MissingObjectKeyError("clusters[0].cluster"))?;
        let server = cluster
            .server
            .ok_or(ConversionError::MissingObjectKeyError("clusters[0].cluster.server"))?;

        Ok(ClusterIdentity {
            name: named_cluster.name,
            server,
            ca_data: cluster.certificate_authority_data,
            token: user.token.map(|token| token.expose_secret().to_string()),
            cert_data: user.client_certificate_data,
            key_data: user.client_key_data.map(|key| key.expose_secret().to_string()),
        })
    }

    /// Read the kubeconfig held by a CAPI kubeconfig secret
    pub fn from_secret(secret: &Secret) -> Result<Self> {
        let data = secret
            .data
            .as_ref()
            .and_then(|data| data.get(KUBECONFIG_DATA_KEY))
            .ok_or(ConversionError::MissingObjectKeyError("data.value"))?;

        Self::from_kubeconfig(std::str::from_utf8(&data.0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use k8s_openapi::ByteString;

    const KUBECONFIG: &str = r#"
apiVersion: v1
kind: Config
clusters:
- name: prod
  cluster:
    server: https://10.0.0.1:6443
    certificate-authority-data: Y2EtZGF0YQ==
- name: other
  cluster:
    server: https://10.0.0.2:6443
contexts:
- name: prod-admin@prod
  context:
    cluster: prod
    user: prod-admin
current-context: prod-admin@prod
users:
- name: prod-admin
  user:
    client-certificate-data: Y2VydC1kYXRh
    client-key-data: a2V5LWRhdGE=
- name: other-admin
  user:
    token: other-token
"#;

    fn secret_with(data: Option<BTreeMap<String, ByteString>>) -> Secret {
        Secret { data, ..Default::default() }
    }

    #[test]
    fn test_from_kubeconfig_uses_first_entries() {
        let identity = ClusterIdentity::from_kubeconfig(KUBECONFIG).unwrap();

        assert_eq!(identity, ClusterIdentity {
            name: "prod".to_string(),
            server: "https://10.0.0.1:6443".to_string(),
            ca_data: Some("Y2EtZGF0YQ==".to_string()),
            token: None,
            cert_data: Some("Y2VydC1kYXRh".to_string()),
            key_data: Some("a2V5LWRhdGE=".to_string()),
        });
    }

    #[test]
    fn test_from_kubeconfig_without_users() {
        let raw = "clusters:\n- name: prod\n  cluster:\n    server: https://10.0.0.1:6443\n";

        assert!(matches!(
            ClusterIdentity::from_kubeconfig(raw),
            Err(ConversionError::EmptyKubeconfigError("users")),
        ));
    }

    #[test]
    fn test_from_kubeconfig_without_clusters() {
        assert!(matches!(
            ClusterIdentity::from_kubeconfig("users: []\n"),
            Err(ConversionError::EmptyKubeconfigError("clusters")),
        ));
    }

    #[test]
    fn test_from_kubeconfig_null_users() {
        let raw = "clusters:\n- name: prod\n  cluster:\n    server: https://10.0.0.1:6443\nusers: null\n";

        assert!(matches!(
            ClusterIdentity::from_kubeconfig(raw),
            Err(ConversionError::EmptyKubeconfigError("users")),
        ));
    }

    #[test]
    fn test_from_kubeconfig_bearer_token() {
        let raw = "clusters:\n- name: prod\n  cluster:\n    server: https://10.0.0.1:6443\nusers:\n- name: admin\n  user:\n    token: s3cr3t\n";

        let identity = ClusterIdentity::from_kubeconfig(raw).unwrap();

        assert_eq!(identity.token.as_deref(), Some("s3cr3t"));
        assert_eq!(identity.ca_data, None);
        assert_eq!(identity.key_data, None);
    }

    #[test]
    fn test_from_kubeconfig_without_server() {
        let raw = "clusters:\n- name: prod\n  cluster: {}\nusers:\n- name: admin\n  user: {}\n";

        assert!(matches!(
            ClusterIdentity::from_kubeconfig(raw),
            Err(ConversionError::MissingObjectKeyError("clusters[0].cluster.server")),
        ));
    }

    #[test]
    fn test_from_kubeconfig_invalid_yaml() {
        assert!(matches!(
            ClusterIdentity::from_kubeconfig("clusters: {"),
            Err(ConversionError::KubeconfigParseError(_)),
        ));
    }

    #[test]
    fn test_from_secret() {
        let secret = secret_with(Some(BTreeMap::from([
            ("value".to_string(), ByteString(KUBECONFIG.as_bytes().to_vec())),
        ])));

        assert_eq!(ClusterIdentity::from_secret(&secret).unwrap().name, "prod");
    }

    #[test]
    fn test_from_secret_missing_value() {
        assert!(matches!(
            ClusterIdentity::from_secret(&secret_with(None)),
            Err(ConversionError::MissingObjectKeyError("data.value")),
        ));
    }

    #[test]
    fn test_from_secret_invalid_utf8() {
        let secret = secret_with(Some(BTreeMap::from([
            ("value".to_string(), ByteString(vec![0xff, 0xfe])),
        ])));

        assert!(matches!(
            ClusterIdentity::from_secret(&secret),
            Err(ConversionError::KubeconfigEncodingError(_)),
        ));
    }
}
