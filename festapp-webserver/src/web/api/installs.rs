use festapp_boundary::{NewInstall, StatusResponse};

use super::*;

#[post("/installs", format = "application/json", data = "<install>")]
pub fn post_install(
    db: sqlite::Connections,
    install: JsonResult<NewInstall>,
) -> Result<StatusResponse> {
    let NewInstall { event_id } = install?.into_inner();
    flows::record_install(&db, event_id)?;
    Ok(Json(StatusResponse::success()))
}
