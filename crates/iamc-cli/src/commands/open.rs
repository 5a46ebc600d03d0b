//! `iamc open`: render the view behind any route the console prints.

use iamc_core::route::{CreateForm, UserField};
use iamc_core::{Route, View};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OpenArgs;
use crate::commands::shared::inline::inline;
use crate::commands::shared::outcome::Failure;
use crate::commands::shared::stream::StreamBounds;
use crate::commands::{chats, groups, pageviews, policies, sessions, topics, users};
use crate::context::AppContext;
use crate::output::output;

/// A form view: what it asks for and the command that submits it.
#[derive(Debug, Serialize)]
struct FormView {
    route: Route,
    fields: Vec<&'static str>,
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    current: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Handle `iamc open <route>`.
pub async fn handle(args: &OpenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::parse(&args.route);
    tracing::debug!(%route, "opening route");

    match &route.view {
        View::Users => users::list::run(&route, ctx, flags).await,
        View::User(id) => users::get::run(id, ctx, flags).await,
        View::Groups => groups::list::run(&route, ctx, flags).await,
        View::Group(id) => groups::get::run(id, ctx, flags).await,
        View::Policies => policies::list::run(&route, ctx, flags).await,
        View::Policy(id) => policies::get::run(id, ctx, flags).await,
        View::Sessions => sessions::list::run(&route, ctx, flags).await,
        View::Session(id) => sessions::get::run(id, route.param("user"), ctx, flags).await,
        View::Topics => topics::list::run(None, ctx, flags).await,
        View::Topic(id) => topics::get::run(id, ctx, flags).await,
        View::PageViews => pageviews::handle(&args.stream, ctx, flags).await,
        View::Chats => chats::list::run(None, StreamBounds::from(&args.stream), ctx, flags).await,
        View::Chat(id) => {
            chats::list::run(Some(id.as_str()), StreamBounds::from(&args.stream), ctx, flags).await
        }
        View::Create(form) => output(&create_form(*form, route.clone()), flags.format),
        View::EditUser { id, field } => {
            let form = edit_form(id, *field, route.clone(), ctx).await?;
            output(&form, flags.format)
        }
        View::NotFound(path) => output(
            &Failure::new(route.clone(), format!("no view at {path}")),
            flags.format,
        ),
    }
}

fn create_form(form: CreateForm, route: Route) -> FormView {
    let (fields, command) = match form {
        CreateForm::User => (vec!["email"], "iamc users create [--email EMAIL]"),
        CreateForm::Group => (vec!["name"], "iamc groups create [--name NAME]"),
        CreateForm::Policy => (
            vec!["name", "hostname", "statements"],
            "iamc policies create --hostname HOST [--name NAME] [--statement ACTION:EFFECT:RESOURCE]...",
        ),
        CreateForm::Topic => (
            vec!["broadcast", "log_events"],
            "iamc topics create [--broadcast] [--log-events]",
        ),
        CreateForm::Chat => (vec!["name"], "iamc chats create NAME"),
    };
    FormView {
        route,
        fields,
        command: command.to_string(),
        current: None,
        error: None,
    }
}

/// The edit form shows the field's current value.
async fn edit_form(
    id: &str,
    field: UserField,
    route: Route,
    ctx: &AppContext,
) -> anyhow::Result<FormView> {
    let (current, error) = match inline(ctx.iam.users().get(id).await)? {
        Ok(user) => {
            let value = match field {
                UserField::Name => user.name,
                UserField::Email => user.email,
            };
            (value, None)
        }
        Err(message) => (None, Some(message)),
    };
    Ok(FormView {
        route,
        fields: vec![field.as_str()],
        command: format!("iamc users set-{} {id} {}", field.as_str(), field.as_str().to_uppercase()),
        current,
        error,
    })
}
