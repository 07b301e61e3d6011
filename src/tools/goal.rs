/// Tools for adding and deleting goals
///
/// These implement the goal_add and goal_delete tools. Asking the user to
/// confirm a deletion is left to the UI.

use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::storage::KeyValueStore;
use crate::TrackerError;

/// Parameters for adding a goal to the active month
#[derive(Debug, Deserialize)]
pub struct AddGoalParams {
    pub name: String,
}

/// Response from adding a goal
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGoalResponse {
    pub index: usize,
    pub name: String,
    pub message: String,
}

/// Parameters for deleting a goal from the active month
#[derive(Debug, Deserialize)]
pub struct DeleteGoalParams {
    pub index: usize,
}

/// Response from deleting a goal
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteGoalResponse {
    pub name: String,
    pub remaining_goals: usize,
    pub message: String,
}

/// Add a goal to the active month
pub fn add_goal<S: KeyValueStore>(
    session: &mut Session<S>,
    params: AddGoalParams,
) -> Result<AddGoalResponse, TrackerError> {
    let index = session.add_habit(&params.name)?;
    let name = session.habits()[index].name.clone();

    Ok(AddGoalResponse {
        index,
        name,
        message: "Goal added successfully!".to_string(),
    })
}

/// Delete the goal at `params.index` from the active month
pub fn delete_goal<S: KeyValueStore>(
    session: &mut Session<S>,
    params: DeleteGoalParams,
) -> Result<DeleteGoalResponse, TrackerError> {
    let removed = session.remove_habit(params.index)?;

    Ok(DeleteGoalResponse {
        name: removed.name,
        remaining_goals: session.habits().len(),
        message: "Goal deleted successfully!".to_string(),
    })
}
