use iamc_core::route::CreateForm;
use iamc_core::{Route, View};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline;
use crate::commands::shared::parse::non_blank;
use crate::context::AppContext;
use crate::output::output;

/// The generated key pair is printed here and nowhere else.
#[derive(Debug, Serialize)]
struct CreateUserResponse {
    route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_key: Option<String>,
}

pub async fn run(email: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = match inline(ctx.iam.users().create(non_blank(email)).await)? {
        Ok(principal) => CreateUserResponse {
            route: Route::new(View::User(principal.user.id.clone())),
            error: None,
            id: Some(principal.user.id),
            public_key: Some(principal.public_key),
            private_key: Some(principal.private_key),
        },
        Err(message) => CreateUserResponse {
            route: Route::new(View::Create(CreateForm::User)),
            error: Some(message),
            id: None,
            public_key: None,
            private_key: None,
        },
    };
    output(&response, flags.format)
}
