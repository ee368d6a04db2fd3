//! Line commands for the interactive session.
//!
//! ```text
//! start | back | login | signup | logout | help | quit
//! login <email> <password>
//! signup <email> <password> <confirmation>
//! profile first=Sarah last=Connor country="United States" city='Los Angeles'
//! mode <balanced|accuracy|ratings>   top <5..20>   theme <dark|light|system>
//! search <free text...>   example <1..6>   random   select <rank>
//! ```

use anyhow::{Context, Result, anyhow, bail};
use engine_client::PreferenceMode;
use server::{EXAMPLE_QUERIES, UserAction};
use session::{Appearance, LoginForm, ProfileForm, SignupForm};

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Actions applied in order
    Actions(Vec<UserAction>),
    /// Pick a result by rank; the label comes from the rendered selector
    Select(usize),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  start                                  open the sign-in menu
  login | signup                         choose a form on the sign-in menu
  login <email> <password>               submit the login form
  signup <email> <password> <confirm>    submit the signup form
  profile key=value ...                  submit the profile form
      keys: first last day month year gender code phone city state country
  back                                   go back one page
  mode <balanced|accuracy|ratings>       set the preference mode
  top <5..20>                            results per track
  theme <dark|light|system>              appearance
  search <query>                         run a search
  example <1..6> | random                use an example query
  select <rank>                          show details for a result
  logout | help | quit";

pub fn parse_line(line: &str) -> Result<ShellCommand> {
    let tokens = shell_words::split(line).context("could not split command line")?;
    let Some((command, args)) = tokens.split_first() else {
        return Ok(ShellCommand::Actions(vec![]));
    };

    let single = |action: UserAction| -> Result<ShellCommand> {
        Ok(ShellCommand::Actions(vec![action]))
    };

    match (command.to_ascii_lowercase().as_str(), args) {
        ("start", []) => single(UserAction::GetStarted),
        ("back", []) => single(UserAction::Back),
        ("logout", []) => single(UserAction::Logout),
        ("random", []) => single(UserAction::RandomExample),
        ("help", _) => Ok(ShellCommand::Help),
        ("quit" | "exit", _) => Ok(ShellCommand::Quit),
        ("login", []) => single(UserAction::ChooseLogin),
        ("login", [email, password]) => {
            single(UserAction::SubmitLogin(LoginForm::new(email, password)))
        }
        ("signup", []) => single(UserAction::ChooseSignup),
        ("signup", [email, password, confirmation]) => single(UserAction::SubmitSignup(
            SignupForm::new(email, password, confirmation),
        )),
        ("profile", fields) => single(UserAction::SubmitProfile(parse_profile(fields)?)),
        ("mode", [mode]) => single(UserAction::SetMode(mode.parse::<PreferenceMode>()?)),
        ("top", [n]) => single(UserAction::SetTopN(
            n.parse().with_context(|| format!("not a number: {n}"))?,
        )),
        ("theme", [theme]) => single(UserAction::SetAppearance(
            theme.parse::<Appearance>().map_err(|e| anyhow!(e))?,
        )),
        ("search", words) if !words.is_empty() => Ok(ShellCommand::Actions(vec![
            UserAction::SetQuery(words.join(" ")),
            UserAction::Search,
        ])),
        ("example", [n]) => {
            let n: usize = n.parse().with_context(|| format!("not a number: {n}"))?;
            if !(1..=EXAMPLE_QUERIES.len()).contains(&n) {
                bail!("example must be between 1 and {}", EXAMPLE_QUERIES.len());
            }
            single(UserAction::PickExample(n - 1))
        }
        ("select", [rank]) => Ok(ShellCommand::Select(
            rank.parse().with_context(|| format!("not a rank: {rank}"))?,
        )),
        (other, _) => bail!("unrecognised command '{other}' (try 'help')"),
    }
}

fn parse_profile(fields: &[String]) -> Result<ProfileForm> {
    let mut form = ProfileForm::default();
    for field in fields {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| anyhow!("expected key=value, got '{field}'"))?;
        let value = value.to_string();
        match key {
            "first" => form.first_name = value,
            "last" => form.last_name = value,
            "day" => form.dob_day = Some(value.parse().context("day must be a number")?),
            "month" => form.dob_month = Some(value),
            "year" => form.dob_year = Some(value.parse().context("year must be a number")?),
            "gender" => form.gender = Some(value),
            "code" => form.phone_code = Some(value),
            "phone" => form.phone_number = value,
            "city" => form.city = value,
            "state" => form.state = value,
            "country" => form.country = Some(value),
            other => bail!("unknown profile field '{other}'"),
        }
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_profile_values() {
        let ShellCommand::Actions(actions) = parse_line(
            r#"profile first=Sarah country='United States' city="Los Angeles" last=O\'Neil"#,
        )
        .unwrap() else {
            panic!("expected actions");
        };
        let UserAction::SubmitProfile(form) = &actions[0] else {
            panic!("expected profile submission");
        };
        assert_eq!(form.first_name, "Sarah");
        assert_eq!(form.country.as_deref(), Some("United States"));
        assert_eq!(form.city, "Los Angeles");
        assert_eq!(form.last_name, "O'Neil");
    }

    #[test]
    fn test_escaped_and_unterminated_quotes() {
        assert_eq!(
            parse_line(r#"search \"quoted\" word"#).unwrap(),
            ShellCommand::Actions(vec![
                UserAction::SetQuery("\"quoted\" word".into()),
                UserAction::Search,
            ])
        );
        assert!(parse_line("search \"oops").is_err());
        assert_eq!(parse_line("   ").unwrap(), ShellCommand::Actions(vec![]));
    }

    #[test]
    fn test_login_forms() {
        assert_eq!(
            parse_line("login").unwrap(),
            ShellCommand::Actions(vec![UserAction::ChooseLogin])
        );
        assert_eq!(
            parse_line("login me@example.com hunter22").unwrap(),
            ShellCommand::Actions(vec![UserAction::SubmitLogin(LoginForm::new(
                "me@example.com",
                "hunter22"
            ))])
        );
    }

    #[test]
    fn test_search_joins_words() {
        assert_eq!(
            parse_line("search 90s action  movies").unwrap(),
            ShellCommand::Actions(vec![
                UserAction::SetQuery("90s action movies".into()),
                UserAction::Search,
            ])
        );
        assert!(parse_line("search").is_err());
    }

    #[test]
    fn test_settings() {
        assert_eq!(
            parse_line("mode Ratings").unwrap(),
            ShellCommand::Actions(vec![UserAction::SetMode(PreferenceMode::Ratings)])
        );
        assert_eq!(
            parse_line("theme light").unwrap(),
            ShellCommand::Actions(vec![UserAction::SetAppearance(Appearance::Light)])
        );
        assert!(parse_line("mode fastest").is_err());
        assert!(parse_line("top many").is_err());
    }

    #[test]
    fn test_examples_are_one_based() {
        assert_eq!(
            parse_line("example 1").unwrap(),
            ShellCommand::Actions(vec![UserAction::PickExample(0)])
        );
        assert!(parse_line("example 0").is_err());
        assert!(parse_line("example 7").is_err());
    }

    #[test]
    fn test_profile_fields() {
        let ShellCommand::Actions(actions) =
            parse_line("profile first=Ellen day=7 month=October year=1949").unwrap()
        else {
            panic!("expected actions");
        };
        let UserAction::SubmitProfile(form) = &actions[0] else {
            panic!("expected profile submission");
        };
        assert_eq!(form.first_name, "Ellen");
        assert_eq!(form.dob_day, Some(7));
        assert_eq!(form.dob_year, Some(1949));
        assert!(parse_line("profile nickname=Rip").is_err());
    }

    #[test]
    fn test_select_and_misc() {
        assert_eq!(parse_line("select 5").unwrap(), ShellCommand::Select(5));
        assert_eq!(parse_line("QUIT").unwrap(), ShellCommand::Quit);
        assert_eq!(parse_line("").unwrap(), ShellCommand::Actions(vec![]));
        assert!(parse_line("dance").is_err());
    }
}
