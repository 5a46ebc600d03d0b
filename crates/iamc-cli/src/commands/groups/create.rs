use iamc_core::route::CreateForm;
use iamc_core::View;

use crate::cli::GlobalFlags;
use crate::commands::groups::get;
use crate::commands::shared::inline::inline;
use crate::commands::shared::outcome::Failure;
use crate::commands::shared::parse::non_blank;
use crate::context::AppContext;
use crate::output::output;

/// Create a group and show it. A blank name is not sent.
pub async fn run(name: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match inline(ctx.iam.groups().create(non_blank(name)).await)? {
        Ok(group) => get::run(&group.id, ctx, flags).await,
        Err(message) => output(
            &Failure::new(View::Create(CreateForm::Group), message),
            flags.format,
        ),
    }
}
