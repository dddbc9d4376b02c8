use serde::{Deserialize, Serialize};

use crate::company::CompanyRecord;
use crate::dataset::Methodology;
use crate::taxonomy::Criterion;

#[derive(Deserialize, Serialize)]
pub(crate) struct DatasetDoc {
    pub(crate) methodology: Methodology,
    pub(crate) criteria: CriteriaNode,
    #[serde(default)]
    pub(crate) companies: Vec<CompanyRecord>,
}

// One ordered array per pillar; array order is declaration order.
#[derive(Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct CriteriaNode {
    #[serde(default)]
    pub(crate) environmental: Vec<Criterion>,
    #[serde(default)]
    pub(crate) social: Vec<Criterion>,
    #[serde(default)]
    pub(crate) governance: Vec<Criterion>,
}
