use crate::{
    error::{key, ErrorSet},
    model::BookingDraft,
};

static FULL_NAME_REQUIRED: &str = "Full Name is required";
static PHONE_INVALID: &str = "Please enter a valid 10-digit phone number";
static DATE_REQUIRED: &str = "Date is required";
static GUEST_SIZE_INVALID: &str = "Please enter a valid guest size";

/// Check every rule against the draft and collect all failures in one pass.
/// The draft is valid iff the returned set is empty.
///
/// `passport_pic` and `used_website` are never validated, and `gender`
/// cannot hold an invalid value, so none of them appear here.
pub fn validate(draft: &BookingDraft) -> ErrorSet {
    let mut errors = ErrorSet::default();
    if draft.full_name.trim().is_empty() {
        errors.insert(key::FULL_NAME, FULL_NAME_REQUIRED);
    }
    if !is_ten_digit_phone(draft.phone.trim()) {
        errors.insert(key::PHONE, PHONE_INVALID);
    }
    if draft.book_at.trim().is_empty() {
        errors.insert(key::BOOK_AT, DATE_REQUIRED);
    }
    if draft.guest_size.is_nan() || draft.guest_size < 1.0 {
        errors.insert(key::GUEST_SIZE, GUEST_SIZE_INVALID);
    }
    errors
}

/// Exactly 10 ASCII digits and nothing else.
fn is_ten_digit_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|byte| byte.is_ascii_digit())
}
