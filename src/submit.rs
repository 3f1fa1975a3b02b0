use {
    crate::{
        error::{key, Error, ErrorSet},
        form::BookingForm,
        model::{BookingDraft, UserIdentity},
    },
    log::{error, info},
    reqwest::multipart::{Form, Part},
    serde::Deserialize,
};

static SIGN_IN_MESSAGE: &str = "Please sign in";

/// Destination handed to the navigator after a confirmed booking.
pub static SUCCESS_DESTINATION: &str = "/thank-you";

/// Post-submission navigation hook, invoked once with the destination on a
/// confirmed booking.
pub trait Navigate {
    fn redirect(&self, destination: &str);
}

/// Terminal state of one submission attempt. The details live in the form's
/// error set, except for `Success`, which leaves it empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    Unauthenticated,
    Failed,
    Success,
}

#[derive(Debug, Deserialize)]
struct ApiReply {
    #[serde(default)]
    message: String,
}

/// Sends bookings to the reservation backend.
pub struct BookingClient {
    base_url: String,
    http: reqwest::Client,
}

impl BookingClient {
    /// Client against the given backend base URL. Cookies are kept across
    /// requests for session identification.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self::with_client(base_url, http))
    }

    /// Same, but with a caller-configured client (timeouts, proxies).
    pub fn with_client(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Run one submission attempt: validate, gate on the signed-in identity,
    /// then POST the draft and interpret the response. Every failure ends up
    /// in the form's error set; this never returns an error to the caller.
    pub async fn submit(
        &self,
        identity: Option<&UserIdentity>,
        form: &mut BookingForm,
        navigator: &dyn Navigate,
    ) -> SubmitOutcome {
        if !form.validate() {
            return SubmitOutcome::Invalid;
        }
        if identity.is_none() {
            form.set_errors(ErrorSet::single(key::AUTHENTICATION, SIGN_IN_MESSAGE));
            return SubmitOutcome::Unauthenticated;
        }
        info!("Submitting booking for {}", form.draft().tour_name);
        match self.send(form.draft()).await {
            Ok(()) => {
                navigator.redirect(SUCCESS_DESTINATION);
                SubmitOutcome::Success
            }
            Err(err) => {
                error!("Booking failed: {}", err);
                form.set_errors(ErrorSet::single(key::API, err.to_string()));
                SubmitOutcome::Failed
            }
        }
    }

    async fn send(&self, draft: &BookingDraft) -> Result<(), Error> {
        let response = self
            .http
            .post(format!("{}/booking", self.base_url))
            .multipart(booking_parts(draft)?)
            .send()
            .await?;
        let status = response.status();
        // the body is JSON on success and failure alike
        let reply: ApiReply = response.json().await?;
        if !status.is_success() {
            return Err(Error::Rejected(reply.message));
        }
        Ok(())
    }
}

/// One part per draft field, in wire order. The passport picture is only a
/// part when a file was attached.
fn booking_parts(draft: &BookingDraft) -> Result<Form, Error> {
    let mut form = Form::new();
    if let Some(user_id) = &draft.user_id {
        form = form.text("userId", user_id.clone());
    }
    if let Some(user_email) = &draft.user_email {
        form = form.text("userEmail", user_email.clone());
    }
    form = form
        .text("tourName", draft.tour_name.clone())
        .text("fullName", draft.full_name.clone())
        .text("phone", draft.phone.clone())
        .text("guestSize", draft.guest_size.to_string())
        .text("bookAt", draft.book_at.clone())
        .text("gender", draft.gender.as_str())
        .text("usedWebsite", draft.used_website.as_str());
    if let Some(picture) = &draft.passport_pic {
        let part = Part::bytes(picture.bytes.clone())
            .file_name(picture.file_name.clone())
            .mime_str(&picture.content_type)?;
        form = form.part("passportPic", part);
    }
    Ok(form)
}
