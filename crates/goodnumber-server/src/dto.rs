//! Request and response bodies of the planning endpoint.

use goodnumber_core::Plan;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// `POST /` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatusRequest {
    pub ap: u64,
}

/// `POST /` response: the target plus one count per increment name.
///
/// Actions keep the increment set order.
///
/// ```json
/// {"target": 1000, "full deploy": 0, ..., "recharge": 1}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub target: u64,
    pub actions: Vec<(String, u64)>,
}

impl Serialize for ActionResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.actions.len() + 1))?;
        map.serialize_entry("target", &self.target)?;
        for (name, count) in &self.actions {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

impl ActionResponse {
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            target: plan.target,
            actions: plan
                .combination
                .iter()
                .map(|(inc, count)| (inc.name.clone(), count))
                .collect(),
        }
    }

    /// Count for an action name, 0 when absent.
    pub fn count(&self, name: &str) -> u64 {
        self.actions
            .iter()
            .find(|(action, _)| action == name)
            .map_or(0, |&(_, count)| count)
    }
}
