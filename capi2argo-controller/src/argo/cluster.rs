use std::collections::BTreeMap;
use kube::api::ObjectMeta;
use serde::{Deserialize, Serialize};

use capi2argo_common::config::ConversionConfig;

use crate::argo::meta::MetaKind;
use crate::argo::naming::{base_name, build_cluster_name, build_namespaced_name, NamespacedName, KUBECONFIG_SUFFIX};
use crate::argo::take_along::{collect, TakeAlong};
use crate::error::TakeAlongError;
use crate::kubeconfig::ClusterIdentity;

pub static CLUSTER_SECRET_NAME_LABEL: &str = "capi-to-argocd/cluster-secret-name";
pub static CLUSTER_NAMESPACE_LABEL: &str = "capi-to-argocd/cluster-namespace";

/// Argo CD cluster secret `config` payload
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArgoConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_client_config: Option<ArgoTls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArgoTls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_data: Option<String>,
}

impl ArgoTls {
    fn is_empty(&self) -> bool {
        self.ca_data.is_none() && self.cert_data.is_none() && self.key_data.is_none()
    }
}

impl From<&ClusterIdentity> for ArgoConfig {
    fn from(identity: &ClusterIdentity) -> Self {
        let tls = ArgoTls {
            ca_data: identity.ca_data.clone(),
            cert_data: identity.cert_data.clone(),
            key_data: identity.key_data.clone(),
        };

        ArgoConfig {
            tls_client_config: (!tls.is_empty()).then_some(tls),
            bearer_token: identity.token.clone(),
        }
    }
}

/// Everything needed to write the Argo CD secret for one CAPI cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgoCluster {
    pub namespaced_name: NamespacedName,
    pub cluster_name: String,
    pub cluster_server: String,
    pub cluster_labels: BTreeMap<String, String>,
    pub take_along_labels: BTreeMap<String, String>,
    pub take_along_annotations: BTreeMap<String, String>,
    /// Write `take_along_annotations` onto the generated secret
    pub propagate_annotations: bool,
    pub cluster_config: ArgoConfig,
}

impl ArgoCluster {
    /// Assemble an ArgoCluster
    ///
    /// # Arguments
    /// * `identity` - Connection details read from the CAPI kubeconfig
    /// * `source` - Name and namespace of the CAPI kubeconfig secret
    /// * `cluster` - Metadata of the CAPI Cluster resource, if it was found
    /// * `config` - The conversion configuration
    ///
    /// # Returns
    /// The ArgoCluster and the take-along diagnostics of both metadata kinds
    pub fn new(
        identity: &ClusterIdentity,
        source: &NamespacedName,
        cluster: Option<&ObjectMeta>,
        config: &ConversionConfig,
    ) -> (Self, Vec<TakeAlongError>) {
        let (labels, annotations) = match cluster {
            Some(meta) => (
                collect(meta.labels.as_ref().unwrap_or(&BTreeMap::new()), MetaKind::Label),
                collect(meta.annotations.as_ref().unwrap_or(&BTreeMap::new()), MetaKind::Annotation),
            ),
            None => (TakeAlong::default(), TakeAlong::default()),
        };

        let diagnostics = labels.diagnostics
            .into_iter()
            .chain(annotations.diagnostics)
            .collect();

        let argo_cluster = ArgoCluster {
            namespaced_name: build_namespaced_name(&source.name, &source.namespace, config),
            cluster_name: build_cluster_name(&identity.name, &source.namespace, config),
            cluster_server: identity.server.clone(),
            cluster_labels: BTreeMap::from([
                (CLUSTER_SECRET_NAME_LABEL.to_string(), format!("{}{}", base_name(&source.name), KUBECONFIG_SUFFIX)),
                (CLUSTER_NAMESPACE_LABEL.to_string(), source.namespace.clone()),
            ]),
            take_along_labels: labels.values,
            take_along_annotations: annotations.values,
            propagate_annotations: config.propagate_annotations,
            cluster_config: ArgoConfig::from(identity),
        };

        (argo_cluster, diagnostics)
    }
}
