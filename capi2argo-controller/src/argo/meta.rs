use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which half of an object's metadata a take-along request refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKind {
    Label,
    Annotation,
}

/// Key prefixes used to request and to record take-along metadata of one kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaKindTemplate {
    pub name: &'static str,
    pub take_along: String,
    pub taken_from: String,
}

impl MetaKind {
    pub fn name(&self) -> &'static str {
        match self {
            MetaKind::Label => "label",
            MetaKind::Annotation => "annotation",
        }
    }

    /// Prefix a metadata key must carry to ask for `<target>` to be taken along,
    /// e.g. `take-along-label.capi-to-argocd.<target>`
    pub fn take_along_prefix(&self) -> String {
        format!("take-along-{}.capi-to-argocd.", self.name())
    }

    /// Prefix of the empty-valued marker written next to every copied key
    pub fn taken_from_prefix(&self) -> String {
        format!("taken-from-cluster-{}.capi-to-argocd.", self.name())
    }

    pub fn template(&self) -> MetaKindTemplate {
        MetaKindTemplate {
            name: self.name(),
            take_along: self.take_along_prefix(),
            taken_from: self.taken_from_prefix(),
        }
    }
}

impl Display for MetaKind {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.name())
    }
}
