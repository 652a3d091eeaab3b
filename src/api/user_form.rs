use gp_core::validation;
use gp_core::{SubmittedUserData, UserForm};
use log::info;

/// Validate a user-form submission. On success the accepted data is returned
/// stamped with the submission time; on failure the per-field errors are
/// serialized as JSON in the error string so the form can render them.
#[tauri::command]
pub fn submit_user_form(form: UserForm) -> Result<SubmittedUserData, String> {
    match validation::accept(form) {
        Ok(submitted) => {
            info!("user form accepted for {}", submitted.email);
            Ok(submitted)
        }
        Err(errors) => Err(serde_json::to_string(&errors)
            .unwrap_or_else(|_| "form validation failed".to_string())),
    }
}
