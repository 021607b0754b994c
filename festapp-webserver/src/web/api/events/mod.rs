use festapp_boundary::{CloneEventRequest, CloneEventResponse};

use super::*;


#[post("/events/clone", format = "application/json", data = "<req>")]
pub fn post_clone_event(
    db: sqlite::Connections,
    req: JsonResult<CloneEventRequest>,
) -> Result<CloneEventResponse> {
    let CloneEventRequest {
        source_event_id,
        target_user_id,
    } = req?.into_inner();
    let new_event_id = flows::clone_event_for_user(&db, source_event_id, target_user_id)?;
    Ok(Json(CloneEventResponse {
        success: true,
        new_event_id,
    }))
}
