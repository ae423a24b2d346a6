use chrono::Utc;
use common::auth::tokens::{generate_verification_token, hash_token, verify_token};
use db_adapters::{
    email_verification_adapter::{
        CreateEmailVerificationParams, EmailVerificationAdapter, EmailVerificationFilter,
        EmailVerificationMutation, EmailVerificationOrder, EmailVerificationQuery,
    },
    user_adapter::{UserAdapter, UserFilter, UserMutation, UserQuery},
    Order::Desc,
};
use entities::{
    custom_methods::email_verification::{
        email_verification_expires_at, EmailVerificationTrait, EMAIL_VERIFICATION_TTL_MINUTES,
    },
    user as user_entity,
};
use validator::Validate;

use crate::{
    error_500,
    users::{
        password_matches,
        types::{EmailChangeOutcome, EmailChangeRequest, EmailChangeTicket, VerifyEmailChangeRequest},
    },
    validation::normalize_email,
    FieldErrors, UseCaseError,
};

const EMAIL_TAKEN_MESSAGE: &str = "This email address is already in use.";

/// Replaces any outstanding verification for the user with a fresh one.
/// The returned ticket carries the plaintext token; only its hash is stored.
pub async fn request_email_change<'a>(
    user: user_entity::Model,
    params: EmailChangeRequest,
    email_verification_adapter: EmailVerificationAdapter<'a>,
    user_adapter: UserAdapter<'a>,
) -> Result<EmailChangeTicket, UseCaseError> {
    let params = EmailChangeRequest {
        email: normalize_email(&params.email),
        ..params
    };

    let mut errors = match params.validate() {
        Ok(_) => FieldErrors::new(),
        Err(e) => e.into(),
    };
    if errors.get("email").is_none() {
        if params.email == user.email {
            errors.add(
                "email",
                "New email must be different from your current email.",
            );
        } else if user_adapter
            .get_by_email(params.email.clone())
            .await
            .map_err(error_500)?
            .is_some()
        {
            errors.add("email", EMAIL_TAKEN_MESSAGE);
        }
    }
    if errors.get("current_password").is_none()
        && !password_matches(&user, &params.current_password)
    {
        errors.add("current_password", "The provided password is incorrect.");
    }
    errors.into_result()?;

    email_verification_adapter
        .clone()
        .delete_all_for_user(&user)
        .await
        .map_err(error_500)?;

    let token = generate_verification_token();
    let hashed_token = hash_token(&token).map_err(error_500)?;
    email_verification_adapter
        .create(CreateEmailVerificationParams {
            user_id: user.id,
            new_email: params.email.clone(),
            hashed_token,
            expires_at: email_verification_expires_at(Utc::now()),
        })
        .await
        .map_err(error_500)?;

    Ok(EmailChangeTicket {
        old_email: user.email,
        new_email: params.email,
        token,
        expires_in_minutes: EMAIL_VERIFICATION_TTL_MINUTES,
    })
}

pub async fn verify_email_change<'a>(
    user: user_entity::Model,
    params: VerifyEmailChangeRequest,
    email_verification_adapter: EmailVerificationAdapter<'a>,
    user_adapter: UserAdapter<'a>,
) -> Result<EmailChangeOutcome, UseCaseError> {
    params
        .validate()
        .map_err(|e| UseCaseError::Validation(e.into()))?;

    let verification = email_verification_adapter
        .clone()
        .filter_eq_user(&user)
        .order_by_created_at(Desc)
        .get_one()
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "No pending email verification found.".to_string(),
        ))?;

    if verification.is_expired(Utc::now()) {
        email_verification_adapter
            .delete(verification)
            .await
            .map_err(error_500)?;
        return Err(UseCaseError::Expired(
            "Verification token has expired. Please request a new one.".to_string(),
        ));
    }

    if !verify_token(&verification.token, &params.token) {
        return Err(UseCaseError::InvalidToken(
            "Invalid verification token.".to_string(),
        ));
    }

    let taken = user_adapter
        .clone()
        .filter_ne_id(user.id)
        .get_by_email(verification.new_email.clone())
        .await
        .map_err(error_500)?
        .is_some();
    if taken {
        email_verification_adapter
            .delete(verification)
            .await
            .map_err(error_500)?;
        return Err(UseCaseError::Validation(FieldErrors::single(
            "email",
            EMAIL_TAKEN_MESSAGE,
        )));
    }

    let old_email = user.email.clone();
    let user = user_adapter
        .update_email(user, verification.new_email.clone())
        .await
        .map_err(error_500)?;
    email_verification_adapter
        .delete(verification)
        .await
        .map_err(error_500)?;

    Ok(EmailChangeOutcome {
        old_email,
        user: user.into(),
    })
}

/// Purges verifications whose window has passed. Returns the number removed.
pub async fn cleanup_expired_verifications<'a>(
    email_verification_adapter: EmailVerificationAdapter<'a>,
) -> Result<u64, UseCaseError> {
    email_verification_adapter
        .delete_expired(Utc::now())
        .await
        .map_err(error_500)
}
