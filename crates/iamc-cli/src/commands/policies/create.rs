use iamc_core::View;
use iamc_core::entities::{NewPolicy, Rule};
use iamc_core::route::CreateForm;

use crate::cli::GlobalFlags;
use crate::commands::policies::get;
use crate::commands::shared::inline::inline;
use crate::commands::shared::outcome::Failure;
use crate::commands::shared::parse::non_blank;
use crate::context::AppContext;
use crate::output::output;

/// Create a policy and show it.
pub async fn run(
    name: Option<&str>,
    hostname: &str,
    statements: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let policy = NewPolicy {
        name: non_blank(name).map(str::to_string),
        hostname: hostname.trim().to_string(),
        statements: parse_statements(statements)?,
    };

    match inline(ctx.iam.policies().create(&policy).await)? {
        Ok(created) => get::run(&created.id, ctx, flags).await,
        Err(message) => output(
            &Failure::new(View::Create(CreateForm::Policy), message),
            flags.format,
        ),
    }
}

/// `ACTION:EFFECT:RESOURCE`, or a bare resource for a Read/Allow statement.
fn parse_statements(raw: &[String]) -> anyhow::Result<Vec<Rule>> {
    raw.iter()
        .map(|statement| {
            if statement.splitn(3, ':').count() == 3 {
                statement.parse::<Rule>().map_err(Into::into)
            } else {
                Ok(Rule::new(statement.trim()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use iamc_core::enums::{Action, Effect};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bare_resource_is_read_allow() {
        let rules = parse_statements(&["/users".to_string()]).unwrap();
        assert_eq!(rules, vec![Rule::new("/users")]);
        assert_eq!(rules[0].action, Action::Read);
        assert_eq!(rules[0].effect, Effect::Allow);
    }

    #[test]
    fn full_statement_is_parsed() {
        let rules = parse_statements(&["Write:Deny:/groups/*".to_string()]).unwrap();
        assert_eq!(rules[0].action, Action::Write);
        assert_eq!(rules[0].effect, Effect::Deny);
        assert_eq!(rules[0].resource, "/groups/*");
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(parse_statements(&["Delete:Allow:/users".to_string()]).is_err());
    }
}
