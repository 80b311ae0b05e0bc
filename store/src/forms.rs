//! # Form state and validation
//!
//! Each form is an immutable value updated through a pure reducer
//! ([`OfferForm::apply`], [`AuthForm::apply`]), so field transitions and
//! validation are unit-testable without a UI runtime. A form either validates
//! into a typed draft ([`RideDraft`], [`Credentials`]) that the marketplace
//! will accept, or yields a [`FormError`] the UI can display.

use thiserror::Error;

/// A field-level validation failure, with display text for the UI.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Seats must be a whole number between 1 and 8")]
    InvalidSeats,
    #[error("Price must be a non-negative amount")]
    InvalidPrice,
    #[error("Date must be in YYYY-MM-DD format")]
    InvalidDate,
    #[error("Time must be in HH:MM format")]
    InvalidTime,
}

// ---------------------------------------------------------------------------
// Ride offer form
// ---------------------------------------------------------------------------

/// Field selector for [`OfferForm::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfferField {
    StartLocation,
    Destination,
    Date,
    Time,
    Seats,
    Price,
    Car,
    Description,
    Preferences,
}

/// Immutable state of the offer-a-ride form. `Default` is the cleared state
/// the form returns to after a successful submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OfferForm {
    pub start_location: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub seats: String,
    pub price: String,
    pub car: String,
    pub description: String,
    pub preferences: String,
}

/// A validated ride offer, ready for [`crate::Marketplace::offer_ride`].
#[derive(Clone, Debug, PartialEq)]
pub struct RideDraft {
    pub start_location: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub seats: String,
    pub price: String,
    pub car: String,
    pub description: String,
    pub preferences: String,
}

impl OfferForm {
    /// Pure reducer: returns a new form with one field replaced.
    pub fn apply(mut self, field: OfferField, value: &str) -> Self {
        let slot = match field {
            OfferField::StartLocation => &mut self.start_location,
            OfferField::Destination => &mut self.destination,
            OfferField::Date => &mut self.date,
            OfferField::Time => &mut self.time,
            OfferField::Seats => &mut self.seats,
            OfferField::Price => &mut self.price,
            OfferField::Car => &mut self.car,
            OfferField::Description => &mut self.description,
            OfferField::Preferences => &mut self.preferences,
        };
        *slot = value.to_string();
        self
    }

    /// Validate into a [`RideDraft`].
    ///
    /// Required: start location, destination, date, time, seats, price.
    /// Seats must parse as an integer in 1..=8, price as a non-negative
    /// number; date and time must have their expected shapes.
    pub fn validate(&self) -> Result<RideDraft, FormError> {
        let start_location = self.start_location.trim();
        let destination = self.destination.trim();
        if start_location.is_empty() {
            return Err(FormError::Missing("Starting location"));
        }
        if destination.is_empty() {
            return Err(FormError::Missing("Destination"));
        }
        if self.date.trim().is_empty() {
            return Err(FormError::Missing("Date"));
        }
        if !is_calendar_date(self.date.trim()) {
            return Err(FormError::InvalidDate);
        }
        if self.time.trim().is_empty() {
            return Err(FormError::Missing("Departure time"));
        }
        if !is_clock_time(self.time.trim()) {
            return Err(FormError::InvalidTime);
        }
        match self.seats.trim().parse::<u32>() {
            Ok(n) if (1..=8).contains(&n) => {}
            _ => return Err(FormError::InvalidSeats),
        }
        match self.price.trim().parse::<f64>() {
            Ok(p) if p >= 0.0 => {}
            _ => return Err(FormError::InvalidPrice),
        }

        Ok(RideDraft {
            start_location: start_location.to_string(),
            destination: destination.to_string(),
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            seats: self.seats.trim().to_string(),
            price: self.price.trim().to_string(),
            car: self.car.trim().to_string(),
            description: self.description.trim().to_string(),
            preferences: self.preferences.trim().to_string(),
        })
    }
}

/// "YYYY-MM-DD", digits in the right places. Calendar plausibility only —
/// month 01..=12, day 01..=31.
fn is_calendar_date(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return false;
    }
    let digits = |range: std::ops::Range<usize>| b[range].iter().all(u8::is_ascii_digit);
    if !digits(0..4) || !digits(5..7) || !digits(8..10) {
        return false;
    }
    let month = (b[5] - b'0') * 10 + (b[6] - b'0');
    let day = (b[8] - b'0') * 10 + (b[9] - b'0');
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// "HH:MM", 24-hour clock.
fn is_clock_time(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != 5 || b[2] != b':' {
        return false;
    }
    if ![0, 1, 3, 4].iter().all(|&i| b[i].is_ascii_digit()) {
        return false;
    }
    let hour = (b[0] - b'0') * 10 + (b[1] - b'0');
    let minute = (b[3] - b'0') * 10 + (b[4] - b'0');
    hour < 24 && minute < 60
}

// ---------------------------------------------------------------------------
// Credential form
// ---------------------------------------------------------------------------

/// Whether the credential form is signing in or creating an account.
/// Sign-up additionally requires name and phone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Field selector for [`AuthForm::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Password,
    Name,
    Phone,
}

/// Immutable state of the sign-in / sign-up form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

/// Validated credentials. The password is carried only so the mock flow can
/// accept it; [`crate::Marketplace::sign_in`] discards it.
#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl AuthForm {
    /// Pure reducer: returns a new form with one field replaced.
    pub fn apply(mut self, field: AuthField, value: &str) -> Self {
        let slot = match field {
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::Name => &mut self.name,
            AuthField::Phone => &mut self.phone,
        };
        *slot = value.to_string();
        self
    }

    pub fn with_email(self, email: &str) -> Self {
        self.apply(AuthField::Email, email)
    }

    pub fn with_password(self, password: &str) -> Self {
        self.apply(AuthField::Password, password)
    }

    pub fn with_name(self, name: &str) -> Self {
        self.apply(AuthField::Name, name)
    }

    pub fn with_phone(self, phone: &str) -> Self {
        self.apply(AuthField::Phone, phone)
    }

    /// Validate into [`Credentials`] for the given mode.
    pub fn validate(&self, mode: AuthMode) -> Result<Credentials, FormError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::Missing("Email"));
        }
        if !email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(FormError::Missing("Password"));
        }

        let (name, phone) = match mode {
            AuthMode::SignIn => (None, None),
            AuthMode::SignUp => {
                let name = self.name.trim();
                if name.is_empty() {
                    return Err(FormError::Missing("Full name"));
                }
                let phone = self.phone.trim();
                if phone.is_empty() {
                    return Err(FormError::Missing("Phone number"));
                }
                (Some(name.to_string()), Some(phone.to_string()))
            }
        };

        Ok(Credentials {
            email: email.to_string(),
            password: self.password.clone(),
            name,
            phone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_offer() -> OfferForm {
        OfferForm::default()
            .apply(OfferField::StartLocation, "Austin, TX")
            .apply(OfferField::Destination, "Dallas, TX")
            .apply(OfferField::Date, "2024-03-01")
            .apply(OfferField::Time, "08:30")
            .apply(OfferField::Seats, "3")
            .apply(OfferField::Price, "25.50")
    }

    #[test]
    fn apply_replaces_only_the_named_field() {
        let form = OfferForm::default()
            .apply(OfferField::StartLocation, "Austin, TX")
            .apply(OfferField::Seats, "2");
        assert_eq!(form.start_location, "Austin, TX");
        assert_eq!(form.seats, "2");
        assert_eq!(form.destination, "");
    }

    #[test]
    fn default_is_the_cleared_state() {
        let cleared = OfferForm::default();
        assert!(cleared.start_location.is_empty());
        assert!(cleared.price.is_empty());
        // Submitting resets to exactly this value, independent of prior input.
        assert_eq!(filled_offer().apply(OfferField::Car, "x"), {
            let mut f = filled_offer();
            f.car = "x".to_string();
            f
        });
    }

    #[test]
    fn valid_offer_produces_a_draft() {
        let draft = filled_offer().validate().unwrap();
        assert_eq!(draft.start_location, "Austin, TX");
        assert_eq!(draft.seats, "3");
        assert_eq!(draft.price, "25.50");
    }

    #[test]
    fn offer_requires_route_fields() {
        let err = OfferForm::default().validate().unwrap_err();
        assert_eq!(err, FormError::Missing("Starting location"));

        let err = filled_offer()
            .apply(OfferField::Destination, "  ")
            .validate()
            .unwrap_err();
        assert_eq!(err, FormError::Missing("Destination"));
    }

    #[test]
    fn offer_rejects_malformed_values() {
        assert_eq!(
            filled_offer().apply(OfferField::Seats, "0").validate().unwrap_err(),
            FormError::InvalidSeats
        );
        assert_eq!(
            filled_offer().apply(OfferField::Seats, "many").validate().unwrap_err(),
            FormError::InvalidSeats
        );
        assert_eq!(
            filled_offer().apply(OfferField::Price, "-5").validate().unwrap_err(),
            FormError::InvalidPrice
        );
        assert_eq!(
            filled_offer().apply(OfferField::Date, "01/15/2024").validate().unwrap_err(),
            FormError::InvalidDate
        );
        assert_eq!(
            filled_offer().apply(OfferField::Time, "8am").validate().unwrap_err(),
            FormError::InvalidTime
        );
    }

    #[test]
    fn sign_in_needs_only_email_and_password() {
        let cred = AuthForm::default()
            .with_email("ana@example.com")
            .with_password("pw")
            .validate(AuthMode::SignIn)
            .unwrap();
        assert_eq!(cred.email, "ana@example.com");
        assert!(cred.name.is_none());
    }

    #[test]
    fn sign_up_requires_name_and_phone() {
        let form = AuthForm::default()
            .with_email("ana@example.com")
            .with_password("pw");
        assert_eq!(
            form.clone().validate(AuthMode::SignUp).unwrap_err(),
            FormError::Missing("Full name")
        );
        assert_eq!(
            form.with_name("Ana").validate(AuthMode::SignUp).unwrap_err(),
            FormError::Missing("Phone number")
        );
    }

    #[test]
    fn email_must_contain_an_at_sign() {
        let err = AuthForm::default()
            .with_email("not-an-email")
            .with_password("pw")
            .validate(AuthMode::SignIn)
            .unwrap_err();
        assert_eq!(err, FormError::InvalidEmail);
    }
}
