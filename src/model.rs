use {
    crate::error::Error,
    std::{fmt, fs, path::Path, str::FromStr},
};

/// Identity supplied by the sign-in provider, read once when the form is
/// created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
}

/// Read-only data about the tour being booked.
#[derive(Debug, Clone, PartialEq)]
pub struct TourInfo {
    pub title: String,
    pub price: f64,
    pub avg_rating: f64,
    pub review_count: u32,
}

impl TourInfo {
    /// Rating text for display, `None` when the tour has no rating yet.
    pub fn rating_label(&self) -> Option<String> {
        if self.avg_rating == 0.0 {
            None
        } else {
            Some(format!("{} ({})", self.avg_rating, self.review_count))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(format!("unknown gender: {}", other)),
        }
    }
}

/// Answer to "have you used this website before?". A single field holds the
/// three mutually exclusive states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WebsiteUsage {
    Yes,
    #[default]
    No,
    Other,
}

impl WebsiteUsage {
    /// Wire value expected by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "true",
            Self::No => "false",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for WebsiteUsage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebsiteUsage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(Self::Yes),
            "false" => Ok(Self::No),
            "other" => Ok(Self::Other),
            unknown => Err(format!("unknown website usage: {}", unknown)),
        }
    }
}

/// Passport picture attached to the booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassportPic {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PassportPic {
    /// Load a picture from disk, guessing the MIME type from the extension.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "passport".to_string());
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}

/// The in-progress booking, mutated field by field until submission.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    pub tour_name: String,
    pub full_name: String,
    pub phone: String,
    /// Raw guest entry coerced to a number; non-numeric input becomes NaN
    /// and stays NaN through pricing.
    pub guest_size: f64,
    pub book_at: String,
    pub gender: Gender,
    pub used_website: WebsiteUsage,
    pub passport_pic: Option<PassportPic>,
}

#[cfg(test)]
mod tests {
    use {super::*, std::io::Write, tempfile::Builder};

    #[test]
    fn gender_round_trip() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("unknown".parse::<Gender>().is_err());
        assert_eq!(Gender::default().as_str(), "male");
    }

    #[test]
    fn website_usage_wire_values() {
        assert_eq!(WebsiteUsage::Yes.as_str(), "true");
        assert_eq!(WebsiteUsage::No.as_str(), "false");
        assert_eq!(WebsiteUsage::Other.as_str(), "other");
        assert_eq!(WebsiteUsage::default(), WebsiteUsage::No);
        assert_eq!("other".parse::<WebsiteUsage>().unwrap(), WebsiteUsage::Other);
        assert!("maybe".parse::<WebsiteUsage>().is_err());
    }

    #[test]
    fn rating_label_hidden_when_unrated() {
        let mut tour = TourInfo {
            title: "City Walk".to_string(),
            price: 5000.0,
            avg_rating: 0.0,
            review_count: 0,
        };
        assert_eq!(tour.rating_label(), None);
        tour.avg_rating = 4.5;
        tour.review_count = 12;
        assert_eq!(tour.rating_label().unwrap(), "4.5 (12)");
    }

    #[test]
    fn passport_pic_from_path() {
        let mut file = Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"not really a png").unwrap();
        let pic = PassportPic::from_path(file.path()).unwrap();
        assert_eq!(pic.bytes, b"not really a png");
        assert_eq!(pic.content_type, "image/png");
        assert!(pic.file_name.ends_with(".png"));
    }

    #[test]
    fn passport_pic_missing_file() {
        assert!(PassportPic::from_path(Path::new("/no/such/passport.png")).is_err());
    }
}
