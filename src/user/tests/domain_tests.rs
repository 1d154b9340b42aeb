//! Domain-focused tests for user directory values.

use crate::user::domain::{EmailAddress, ParseUserRoleError, User, UserDomainError, UserRole};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
#[case("alice@example.com", "alice@example.com")]
#[case("  Bob@Example.COM  ", "bob@example.com")]
fn email_address_normalizes_valid_values(#[case] input: &str, #[case] expected: &str) {
    let email = EmailAddress::new(input).expect("valid email");
    assert_eq!(email.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("no-at-sign")]
#[case("@missing-local.example")]
#[case("missing-domain@")]
#[case("two@signs@example.com")]
#[case("spaced out@example.com")]
#[case("no-dot-domain@example")]
fn email_address_rejects_malformed_values(#[case] input: &str) {
    let result = EmailAddress::new(input);
    assert_eq!(result, Err(UserDomainError::InvalidEmail(input.to_owned())));
}

#[rstest]
fn user_new_trims_name_and_stamps_creation(clock: DefaultClock) {
    let email = EmailAddress::new("alice@example.com").expect("valid email");
    let user = User::new("  Alice Admin  ", email, UserRole::Admin, &clock).expect("valid user");

    assert_eq!(user.name(), "Alice Admin");
    assert_eq!(user.role(), UserRole::Admin);
}

#[rstest]
fn user_new_rejects_empty_name(clock: DefaultClock) {
    let email = EmailAddress::new("alice@example.com").expect("valid email");
    let result = User::new("   ", email, UserRole::Admin, &clock);
    assert_eq!(result, Err(UserDomainError::EmptyName));
}

#[rstest]
#[case(UserRole::Admin, "ADMIN")]
#[case(UserRole::HrPro, "HR_PRO")]
#[case(UserRole::Mentor, "MENTOR")]
fn user_role_round_trips_storage_strings(#[case] role: UserRole, #[case] wire: &str) {
    assert_eq!(role.as_str(), wire);
    assert_eq!(UserRole::try_from(wire), Ok(role));
}

#[rstest]
fn user_role_rejects_unknown_strings() {
    let result = UserRole::try_from("SUPERVISOR");
    assert_eq!(result, Err(ParseUserRoleError("SUPERVISOR".to_owned())));
}
