use iamc_core::View;
use iamc_core::entities::UserUpdate;
use iamc_core::route::UserField;

use crate::cli::GlobalFlags;
use crate::commands::shared::inline::inline;
use crate::commands::shared::outcome::Failure;
use crate::commands::users::get;
use crate::context::AppContext;
use crate::output::output;

/// Update one field, then show the user.
pub async fn run(
    id: &str,
    field: UserField,
    value: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = match field {
        UserField::Name => UserUpdate {
            name: Some(value.to_string()),
            email: None,
        },
        UserField::Email => UserUpdate {
            name: None,
            email: Some(value.to_string()),
        },
    };

    match inline(ctx.iam.users().update(id, &update).await)? {
        Ok(_) => get::run(id, ctx, flags).await,
        Err(message) => output(
            &Failure::new(
                View::EditUser {
                    id: id.to_string(),
                    field,
                },
                message,
            ),
            flags.format,
        ),
    }
}
