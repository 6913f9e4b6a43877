use std::collections::BTreeMap;

use crate::argo::meta::MetaKind;
use crate::error::TakeAlongError;

/// Metadata copied from a cluster resource, along with anything that was skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TakeAlong {
    pub values: BTreeMap<String, String>,
    pub diagnostics: Vec<TakeAlongError>,
}

/// Extract the target key from a take-along request key
///
/// # Arguments
/// * `kind` - Whether `key` is a label or an annotation
/// * `key` - The raw metadata key
///
/// # Returns
/// `None` if `key` is not a take-along request, the target key if it is, or a
/// `MalformedKeyError` if the request does not name a target
pub fn extract(kind: MetaKind, key: &str) -> Result<Option<String>, TakeAlongError> {
    match key.strip_prefix(kind.take_along_prefix().as_str()) {
        None => Ok(None),
        Some("") => Err(TakeAlongError::MalformedKeyError {
            kind,
            key: key.to_string(),
        }),
        Some(target) => Ok(Some(target.to_string())),
    }
}

/// Collect the take-along metadata requested in `meta`
///
/// A malformed request anywhere in `meta` discards the whole kind: the result
/// holds no values and that single error. Requests naming a key absent from
/// `meta` are skipped with a `MissingTargetWarning`.
///
/// # Arguments
/// * `meta` - Labels or annotations of the cluster resource
/// * `kind` - Which of the two `meta` is
///
/// # Returns
/// The values to copy, each with its provenance marker, and any diagnostics
pub fn collect(meta: &BTreeMap<String, String>, kind: MetaKind) -> TakeAlong {
    let template = kind.template();
    let mut targets = Vec::new();

    for key in meta.keys() {
        match extract(kind, key) {
            Ok(Some(target)) => targets.push(target),
            Ok(None) => (),
            Err(err) => {
                return TakeAlong {
                    values: BTreeMap::new(),
                    diagnostics: vec![err],
                };
            }
        }
    }

    let mut take_along = TakeAlong::default();

    for target in targets {
        match meta.get(&target) {
            Some(value) => {
                take_along.values.insert(format!("{}{}", template.taken_from, target), String::new());
                take_along.values.insert(target, value.clone());
            }
            None => take_along.diagnostics.push(TakeAlongError::MissingTargetWarning {
                kind,
                key: target,
            }),
        }
    }

    take_along
}
