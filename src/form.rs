use crate::{
    error::{key, ErrorSet},
    model::{BookingDraft, Gender, PassportPic, TourInfo, UserIdentity, WebsiteUsage},
    validate::validate,
};

/// Owns the booking draft and its current errors for one booking attempt.
///
/// Text, date, and number edits replace exactly one field and eagerly drop
/// that field's error, whether or not the new value is valid; the full set
/// is only recomputed on [`BookingForm::validate`].
pub struct BookingForm {
    draft: BookingDraft,
    errors: ErrorSet,
}

impl BookingForm {
    /// Seed a fresh draft from the tour being viewed and the signed-in user,
    /// if any.
    pub fn new(tour: &TourInfo, identity: Option<&UserIdentity>) -> Self {
        Self {
            draft: BookingDraft {
                user_id: identity.map(|user| user.id.clone()),
                user_email: identity.map(|user| user.email.clone()),
                tour_name: tour.title.clone(),
                full_name: String::new(),
                phone: String::new(),
                guest_size: 1.0,
                book_at: String::new(),
                gender: Gender::default(),
                used_website: WebsiteUsage::default(),
                passport_pic: None,
            },
            errors: ErrorSet::default(),
        }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn set_full_name(&mut self, full_name: &str) {
        self.draft.full_name = full_name.to_string();
        self.errors.clear(key::FULL_NAME);
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.draft.phone = phone.to_string();
        self.errors.clear(key::PHONE);
    }

    pub fn set_book_at(&mut self, book_at: &str) {
        self.draft.book_at = book_at.to_string();
        self.errors.clear(key::BOOK_AT);
    }

    /// Store the guest entry as typed, coerced to a number. Anything that
    /// does not parse becomes NaN and is rejected at validation.
    pub fn set_guest_size(&mut self, guest_size: &str) {
        self.draft.guest_size = guest_size.trim().parse().unwrap_or(f64::NAN);
        self.errors.clear(key::GUEST_SIZE);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.draft.gender = gender;
    }

    /// Selecting one answer deselects the other two.
    pub fn set_used_website(&mut self, used_website: WebsiteUsage) {
        self.draft.used_website = used_website;
    }

    pub fn set_passport_pic(&mut self, passport_pic: Option<PassportPic>) {
        self.draft.passport_pic = passport_pic;
    }

    /// Recompute the whole error set from the current draft and publish it,
    /// replacing any stale entries. Returns whether the draft is valid.
    pub fn validate(&mut self) -> bool {
        let errors = validate(&self.draft);
        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    /// Replace the published errors wholesale.
    pub fn set_errors(&mut self, errors: ErrorSet) {
        self.errors = errors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_tour() -> TourInfo {
        TourInfo {
            title: "Westminster Walking Tour".to_string(),
            price: 5000.0,
            avg_rating: 4.5,
            review_count: 12,
        }
    }

    fn test_identity() -> UserIdentity {
        UserIdentity {
            id: "64a1".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[test]
    fn new_form_is_seeded_from_tour_and_identity() {
        let form = BookingForm::new(&test_tour(), Some(&test_identity()));
        let draft = form.draft();
        assert_eq!(draft.user_id.as_deref(), Some("64a1"));
        assert_eq!(draft.user_email.as_deref(), Some("jane@example.com"));
        assert_eq!(draft.tour_name, "Westminster Walking Tour");
        assert_eq!(draft.guest_size, 1.0);
        assert_eq!(draft.gender, Gender::Male);
        assert_eq!(draft.used_website, WebsiteUsage::No);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn anonymous_form_has_no_identity_fields() {
        let form = BookingForm::new(&test_tour(), None);
        assert_eq!(form.draft().user_id, None);
        assert_eq!(form.draft().user_email, None);
    }

    #[test]
    fn editing_a_field_clears_only_its_own_error() {
        let mut form = BookingForm::new(&test_tour(), None);
        assert!(!form.validate());
        assert!(form.errors().get(key::FULL_NAME).is_some());
        assert!(form.errors().get(key::PHONE).is_some());

        // still invalid, but the edited field's error goes away immediately
        form.set_full_name(" ");
        assert!(form.errors().get(key::FULL_NAME).is_none());
        assert!(form.errors().get(key::PHONE).is_some());

        // next full pass brings it back
        assert!(!form.validate());
        assert!(form.errors().get(key::FULL_NAME).is_some());
    }

    #[test]
    fn repeated_edits_are_idempotent() {
        let mut form = BookingForm::new(&test_tour(), None);
        form.validate();
        form.set_phone("1234567890");
        let draft = form.draft().clone();
        let errors = form.errors().clone();
        form.set_phone("1234567890");
        assert_eq!(form.draft(), &draft);
        assert_eq!(form.errors(), &errors);
    }

    #[test]
    fn guest_entry_is_coerced() {
        let mut form = BookingForm::new(&test_tour(), None);
        form.set_guest_size("3");
        assert_eq!(form.draft().guest_size, 3.0);
        form.set_guest_size("abc");
        assert!(form.draft().guest_size.is_nan());
    }

    #[test]
    fn website_usage_holds_one_state_at_a_time() {
        let mut form = BookingForm::new(&test_tour(), None);
        form.set_used_website(WebsiteUsage::Yes);
        assert_eq!(form.draft().used_website, WebsiteUsage::Yes);
        form.set_used_website(WebsiteUsage::Other);
        assert_eq!(form.draft().used_website, WebsiteUsage::Other);
    }

    #[test]
    fn passport_pic_can_be_set_and_unset() {
        let mut form = BookingForm::new(&test_tour(), None);
        form.set_passport_pic(Some(PassportPic {
            file_name: "passport.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        }));
        assert!(form.draft().passport_pic.is_some());
        form.set_passport_pic(None);
        assert!(form.draft().passport_pic.is_none());
    }
}
