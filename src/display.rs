#[cfg(feature = "colors")]
use owo_colors::OwoColorize;
use serde::Serialize;

/// No-op stand-ins for the owo-colors methods used here; in effect when the
/// "colors" feature is disabled.
pub mod color_shim {
    use std::fmt::{self, Display, Formatter};

    #[derive(Clone)]
    pub struct Plain(pub String);

    impl Display for Plain {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    pub trait ColorizeShim {
        fn as_str(&self) -> &str;

        fn red(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn green(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn cyan(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn bold(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn dimmed(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
    }

    impl ColorizeShim for &str {
        fn as_str(&self) -> &str {
            self
        }
    }
    impl ColorizeShim for String {
        fn as_str(&self) -> &str {
            self.as_str()
        }
    }
    impl ColorizeShim for Plain {
        fn as_str(&self) -> &str {
            &self.0
        }
    }
}

#[cfg(not(feature = "colors"))]
use color_shim::ColorizeShim as OwoColorize;

use crate::Error;
use crate::models::{
    AuthResponse, ErrorBody, HealthReport, PublicUser, StatusResponse, UsageSummary,
};
use crate::utils::format_currency;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

pub fn print_auth(resp: &AuthResponse) {
    println!("{} {} {}", "✔".green(), resp.email.bold(), resp.message.dimmed());
}

pub fn print_status(resp: &StatusResponse) {
    println!("{} {}", "✔".green(), resp.message);
}

pub fn print_health(report: &HealthReport) {
    println!("{} {}", report.status.green(), report.timestamp.dimmed());
}

pub fn print_users(users: &[PublicUser]) {
    if users.is_empty() {
        println!("{}", "no users".dimmed());
        return;
    }
    for user in users {
        let extra: Vec<String> = user
            .attributes
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        if extra.is_empty() {
            println!("{}", user.email);
        } else {
            println!("{} {}", user.email, extra.join(" ").dimmed());
        }
    }
}

/// One line per user plus a grand total.
pub fn stats_lines(stats: &[UsageSummary]) -> Vec<String> {
    let mut lines: Vec<String> = stats
        .iter()
        .map(|s| {
            format!(
                "{}  {} questions  ${}  {} sessions  last {}",
                s.email.cyan(),
                s.total_questions,
                format_currency(s.total_cost),
                s.sessions,
                s.last_activity.dimmed()
            )
        })
        .collect();
    let total_cost: f64 = stats.iter().map(|s| s.total_cost).sum();
    let total_questions: u128 = stats.iter().map(|s| u128::from(s.total_questions)).sum();
    lines.push(format!(
        "{} {} users  {} questions  ${}",
        "Total".bold(),
        stats.len(),
        total_questions,
        format_currency(total_cost)
    ));
    lines
}

pub fn print_stats(stats: &[UsageSummary]) {
    for line in stats_lines(stats) {
        println!("{line}");
    }
}

/// Report a failed operation; JSON mode writes `{"detail": ...}` to stdout.
pub fn print_error(err: &Error, json: bool) -> anyhow::Result<()> {
    if json {
        print_json(&ErrorBody::from(err))
    } else {
        eprintln!("{} {}", "error:".red().bold(), err);
        Ok(())
    }
}
