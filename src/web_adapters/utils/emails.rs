use chrono::{DateTime, FixedOffset, Utc};
use common::settings::types::Settings;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::{Credentials, Mechanism},
        PoolConfig,
    },
    Message, SmtpTransport, Transport,
};
use minijinja::{context, Environment};
use once_cell::sync::Lazy;
use tracing::{event, Level};

const TEMPLATES: [(&str, &str); 8] = [
    ("base.html", include_str!("../templates/base.html")),
    (
        "email_change_verification.html",
        include_str!("../templates/email_change_verification.html"),
    ),
    (
        "email_change_alert.html",
        include_str!("../templates/email_change_alert.html"),
    ),
    (
        "email_changed.html",
        include_str!("../templates/email_changed.html"),
    ),
    (
        "email_change_confirmed.html",
        include_str!("../templates/email_change_confirmed.html"),
    ),
    (
        "password_changed.html",
        include_str!("../templates/password_changed.html"),
    ),
    (
        "account_deletion_requested.html",
        include_str!("../templates/account_deletion_requested.html"),
    ),
    (
        "account_deletion_cancelled.html",
        include_str!("../templates/account_deletion_cancelled.html"),
    ),
];

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            event!(target: "backend", Level::ERROR, "Failed to load email template {}: {:?}", name, e);
        }
    }
    env
});

const DATE_FORMAT: &str = "%B %-d, %Y at %-I:%M %p (UTC)";

/// One message per account-settings transition.
#[derive(Debug, Clone)]
pub enum Notification {
    EmailChangeVerification {
        token: String,
        expires_in_minutes: i64,
    },
    EmailChangeAlert {
        new_email: String,
    },
    EmailChanged {
        new_email: String,
    },
    EmailChangeConfirmed,
    PasswordChanged {
        changed_at: DateTime<Utc>,
    },
    AccountDeletionRequested {
        scheduled_deletion_at: DateTime<FixedOffset>,
        days_remaining: i64,
    },
    AccountDeletionCancelled,
}

impl Notification {
    fn subject(&self) -> &'static str {
        match self {
            Self::EmailChangeVerification { .. } => "Verify Your New Email Address",
            Self::EmailChangeAlert { .. } => "Email Change Requested",
            Self::EmailChanged { .. } => "Email Address Changed",
            Self::EmailChangeConfirmed => "Email Change Confirmed",
            Self::PasswordChanged { .. } => "Password Changed Successfully",
            Self::AccountDeletionRequested { .. } => "Account Deletion Requested",
            Self::AccountDeletionCancelled => "Account Deletion Cancelled",
        }
    }

    fn template_name(&self) -> &'static str {
        match self {
            Self::EmailChangeVerification { .. } => "email_change_verification.html",
            Self::EmailChangeAlert { .. } => "email_change_alert.html",
            Self::EmailChanged { .. } => "email_changed.html",
            Self::EmailChangeConfirmed => "email_change_confirmed.html",
            Self::PasswordChanged { .. } => "password_changed.html",
            Self::AccountDeletionRequested { .. } => "account_deletion_requested.html",
            Self::AccountDeletionCancelled => "account_deletion_cancelled.html",
        }
    }

    fn text(&self) -> String {
        match self {
            Self::EmailChangeVerification {
                token,
                expires_in_minutes,
            } => format!(
                "Your verification code is {}. It expires in {} minutes.",
                token, expires_in_minutes
            ),
            Self::EmailChangeAlert { new_email } => format!(
                "A request was made to change your account email to {}. If this was not you, change your password right away.",
                new_email
            ),
            Self::EmailChanged { new_email } => {
                format!("Your account email was changed to {}.", new_email)
            }
            Self::EmailChangeConfirmed => {
                "This address is now the sign-in email for your account.".to_string()
            }
            Self::PasswordChanged { changed_at } => format!(
                "Your password was changed on {}.",
                changed_at.format(DATE_FORMAT)
            ),
            Self::AccountDeletionRequested {
                scheduled_deletion_at,
                days_remaining,
            } => format!(
                "Your account will be deleted on {}. You have {} days to cancel.",
                scheduled_deletion_at.to_utc().format(DATE_FORMAT),
                days_remaining
            ),
            Self::AccountDeletionCancelled => "Your account deletion was cancelled.".to_string(),
        }
    }

    pub fn render(&self, recipient_name: &str, app_name: &str) -> Result<String, String> {
        let template = ENV
            .get_template(self.template_name())
            .map_err(|e| e.to_string())?;
        let base = context! {
            title => self.subject(),
            name => recipient_name,
            app_name => app_name,
        };
        let ctx = match self {
            Self::EmailChangeVerification {
                token,
                expires_in_minutes,
            } => context! { token, expires_in_minutes, ..base },
            Self::EmailChangeAlert { new_email } | Self::EmailChanged { new_email } => {
                context! { new_email, ..base }
            }
            Self::PasswordChanged { changed_at } => context! {
                changed_at => changed_at.format(DATE_FORMAT).to_string(),
                ..base
            },
            Self::AccountDeletionRequested {
                scheduled_deletion_at,
                days_remaining,
            } => context! {
                scheduled_deletion_at => scheduled_deletion_at.to_utc().format(DATE_FORMAT).to_string(),
                days_remaining,
                ..base
            },
            Self::EmailChangeConfirmed | Self::AccountDeletionCancelled => base,
        };
        template.render(ctx).map_err(|e| e.to_string())
    }
}

/// Renders the notification and hands SMTP delivery to a blocking task.
/// Delivery failures are logged, never returned.
#[tracing::instrument(
    name = "Sending a notification e-mail.",
    skip(settings, recipient_name, notification),
    fields(recipient_email = %recipient_email, subject = notification.subject())
)]
pub fn notify(
    settings: &Settings,
    recipient_name: &str,
    recipient_email: &str,
    notification: Notification,
) {
    if settings.email.host.is_empty() {
        event!(target: "backend", Level::WARN, "E-mail host is not configured. Skipped sending.");
        return;
    }

    let html_content = match notification.render(recipient_name, &settings.application.app_name) {
        Ok(html) => html,
        Err(e) => {
            event!(target: "backend", Level::ERROR, "Failed to render e-mail: {}", e);
            return;
        }
    };

    let settings = settings.clone();
    let recipient = format!("{} <{}>", recipient_name, recipient_email);
    let subject = format!(
        "{} - {}",
        settings.application.app_name,
        notification.subject()
    );
    let text_content = notification.text();
    actix_web::rt::task::spawn_blocking(move || {
        if let Err(e) = send_email(&settings, &recipient, subject, html_content, text_content) {
            event!(target: "backend", Level::ERROR, "Could not send email: {}", e);
        }
    });
}

fn send_email(
    settings: &Settings,
    recipient: &str,
    subject: String,
    html_content: String,
    text_content: String,
) -> Result<(), String> {
    let from: Mailbox = settings
        .email
        .sender
        .parse()
        .map_err(|e| format!("Failed to parse sender mailbox: {:?}", e))?;
    let to: Mailbox = recipient
        .parse()
        .map_err(|e| format!("Failed to parse recipient mailbox: {:?}", e))?;

    let email = Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(text_content),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html_content),
                ),
        )
        .map_err(|e| e.to_string())?;

    let credentials = Credentials::new(
        settings.email.host_user.clone(),
        settings.email.host_user_password.clone(),
    );
    let sender = SmtpTransport::starttls_relay(&settings.email.host)
        .map_err(|e| e.to_string())?
        .credentials(credentials)
        .authentication(vec![Mechanism::Plain])
        .pool_config(PoolConfig::new().max_size(20))
        .build();

    sender.send(&email).map_err(|e| format!("{:#?}", e))?;
    event!(target: "backend", Level::INFO, "Email successfully sent!");
    Ok(())
}
