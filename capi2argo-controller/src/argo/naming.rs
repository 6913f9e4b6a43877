use kube::{Resource, ResourceExt};

use capi2argo_common::config::ConversionConfig;

use crate::error::{ConversionError, Result};

pub static KUBECONFIG_SUFFIX: &str = "-kubeconfig";
pub static SECRET_NAME_PREFIX: &str = "cluster-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacedName {
    pub name: String,
    pub namespace: String,
}

impl NamespacedName {
    /// Read the name and namespace of a namespaced resource
    pub fn from_resource<K: Resource>(obj: &K) -> Result<Self> {
        let name = obj
            .meta()
            .name
            .clone()
            .ok_or(ConversionError::MissingObjectKeyError("metadata.name"))?;
        let namespace = obj
            .namespace()
            .ok_or(ConversionError::MissingObjectKeyError("metadata.namespace"))?;

        Ok(NamespacedName { name, namespace })
    }
}

/// Name of the CAPI cluster a kubeconfig secret belongs to, i.e. the secret
/// name with a trailing `-kubeconfig` removed
pub fn base_name(secret_name: &str) -> &str {
    secret_name.strip_suffix(KUBECONFIG_SUFFIX).unwrap_or(secret_name)
}

/// Build the cluster name shown in Argo CD
///
/// With namespaced names enabled the name is prefixed with `namespace`, so
/// equally named clusters from different namespaces stay distinct.
pub fn build_cluster_name(name: &str, namespace: &str, config: &ConversionConfig) -> String {
    if config.enable_namespaced_names {
        format!("{}-{}", namespace, name)
    } else {
        name.to_string()
    }
}

/// Build the identity of the Argo CD secret generated for a CAPI kubeconfig secret
///
/// # Arguments
/// * `secret_name` - Name of the CAPI secret, usually `<cluster>-kubeconfig`
/// * `namespace` - Namespace of the CAPI secret
/// * `config` - The conversion configuration
///
/// # Returns
/// `cluster-<cluster name>` in the configured Argo CD namespace
pub fn build_namespaced_name(secret_name: &str, namespace: &str, config: &ConversionConfig) -> NamespacedName {
    NamespacedName {
        name: format!("{}{}", SECRET_NAME_PREFIX, build_cluster_name(base_name(secret_name), namespace, config)),
        namespace: config.argo_namespace.clone(),
    }
}
