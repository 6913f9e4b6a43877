use std::collections::BTreeMap;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::api::ObjectMeta;

use crate::argo::cluster::ArgoCluster;
use crate::error::Result;

pub static OWNED_LABEL: &str = "capi-to-argocd/owned";
pub static SECRET_TYPE_LABEL: &str = "argocd.argoproj.io/secret-type";

/// Labels every generated secret carries
pub fn common_labels() -> BTreeMap<String, String> {
    BTreeMap::from([
        (OWNED_LABEL.to_string(), "true".to_string()),
        (SECRET_TYPE_LABEL.to_string(), "cluster".to_string()),
    ])
}

impl ArgoCluster {
    /// Convert the ArgoCluster into the Secret Argo CD registers clusters from
    ///
    /// Labels are merged from the common labels, the cluster labels and the
    /// take-along labels, with later ones winning on conflicts. Take-along
    /// annotations are only written when `propagate_annotations` is set.
    ///
    /// # Returns
    /// The Secret, or an error if the cluster config could not be serialized
    pub fn to_secret(&self) -> Result<Secret> {
        let config = serde_json::to_vec(&self.cluster_config)?;

        let labels = common_labels()
            .into_iter()
            .chain(self.cluster_labels.clone())
            .chain(self.take_along_labels.clone())
            .collect();

        Ok(Secret {
            metadata: ObjectMeta {
                name: Some(self.namespaced_name.name.clone()),
                namespace: Some(self.namespaced_name.namespace.clone()),
                labels: Some(labels),
                annotations: (self.propagate_annotations && !self.take_along_annotations.is_empty())
                    .then(|| self.take_along_annotations.clone()),
                ..Default::default()
            },
            data: Some(BTreeMap::from([
                ("name".to_string(), ByteString(self.cluster_name.clone().into_bytes())),
                ("server".to_string(), ByteString(self.cluster_server.clone().into_bytes())),
                ("config".to_string(), ByteString(config)),
            ])),
            ..Default::default()
        })
    }
}
