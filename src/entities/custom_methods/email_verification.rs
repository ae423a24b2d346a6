use chrono::{DateTime, Duration, Utc};

use crate::email_verification;

pub const EMAIL_VERIFICATION_TTL_MINUTES: i64 = 30;

pub fn email_verification_expires_at(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::minutes(EMAIL_VERIFICATION_TTL_MINUTES)
}

pub trait EmailVerificationTrait {
    fn is_expired(&self, now: DateTime<Utc>) -> bool;
}

impl EmailVerificationTrait for email_verification::Model {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
