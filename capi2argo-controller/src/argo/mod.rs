pub mod cluster;
pub mod meta;
pub mod naming;
pub mod secret;
pub mod take_along;

use k8s_openapi::api::core::v1::Secret;
use kube::api::ObjectMeta;

use capi2argo_common::config::ConversionConfig;
use capi2argo_common::telemetry::info;

use crate::argo::{cluster::ArgoCluster, naming::NamespacedName};
use crate::error::Result;
use crate::kubeconfig::ClusterIdentity;

/// Convert a CAPI kubeconfig secret into an Argo CD cluster secret
///
/// Take-along problems on the cluster resource never fail the conversion,
/// they are logged and the affected metadata is left out.
///
/// # Arguments
/// * `secret` - The CAPI `<cluster>-kubeconfig` secret
/// * `cluster` - Metadata of the matching CAPI Cluster resource, if any
/// * `config` - The conversion configuration
///
/// # Returns
/// The Argo CD cluster secret, or the error that prevented building it
pub fn convert(secret: &Secret, cluster: Option<&ObjectMeta>, config: &ConversionConfig) -> Result<Secret> {
    let identity = ClusterIdentity::from_secret(secret)?;
    let source = NamespacedName::from_resource(secret)?;

    let (argo_cluster, diagnostics) = ArgoCluster::new(&identity, &source, cluster, config);

    for diagnostic in &diagnostics {
        info!(
            event = "TakeAlongIgnored",
            secret = source.name.as_str(),
            namespace = source.namespace.as_str(),
            message = %diagnostic,
        );
    }

    argo_cluster.to_secret()
}
