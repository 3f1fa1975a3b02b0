use {
    clap::Parser,
    log::info,
    std::{path::PathBuf, process},
    tour_booking_client::{
        form::BookingForm,
        model::{Gender, PassportPic, TourInfo, UserIdentity, WebsiteUsage},
        pricing::Breakdown,
        submit::{BookingClient, Navigate, SubmitOutcome},
    },
};

/// Client for booking a tour against the reservations API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL hosting the booking API
    #[arg(short, long, default_value_t = String::from("http://127.0.0.1:8080"))]
    url: String,

    /// Title of the tour to book
    #[arg(long)]
    tour: String,

    /// Price per guest
    #[arg(long)]
    price: f64,

    /// Average review rating shown for the tour
    #[arg(long, default_value_t = 0.0)]
    avg_rating: f64,

    /// Number of reviews behind the rating
    #[arg(long, default_value_t = 0)]
    reviews: u32,

    /// Guest's full name
    #[arg(long)]
    full_name: String,

    /// 10-digit contact phone number
    #[arg(long)]
    phone: String,

    /// Number of guests
    #[arg(long, default_value = "1")]
    guests: String,

    /// Booking date, e.g. 2024-07-01
    #[arg(long)]
    date: String,

    /// Guest's gender (male or female)
    #[arg(long, default_value = "male")]
    gender: Gender,

    /// Used this website before? (true, false, or other)
    #[arg(long, default_value = "false")]
    used_website: WebsiteUsage,

    /// Passport picture to attach
    #[arg(long)]
    passport: Option<PathBuf>,

    /// Signed-in user's id
    #[arg(long, requires = "user_email")]
    user_id: Option<String>,

    /// Signed-in user's email
    #[arg(long, requires = "user_id")]
    user_email: Option<String>,
}

struct CliNavigator;

impl Navigate for CliNavigator {
    fn redirect(&self, destination: &str) {
        println!("Redirecting to {}", destination);
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    std::env::set_var("RUST_LOG", "info");
    env_logger::init();

    let tour = TourInfo {
        title: args.tour.clone(),
        price: args.price,
        avg_rating: args.avg_rating,
        review_count: args.reviews,
    };
    let identity = match (args.user_id, args.user_email) {
        (Some(id), Some(email)) => Some(UserIdentity { id, email }),
        _ => None,
    };

    let mut form = BookingForm::new(&tour, identity.as_ref());
    form.set_full_name(&args.full_name);
    form.set_phone(&args.phone);
    form.set_guest_size(&args.guests);
    form.set_book_at(&args.date);
    form.set_gender(args.gender);
    form.set_used_website(args.used_website);
    if let Some(path) = &args.passport {
        match PassportPic::from_path(path) {
            Ok(picture) => form.set_passport_pic(Some(picture)),
            Err(err) => {
                eprintln!("Could not read passport picture {}: {}", path.display(), err);
                process::exit(1);
            }
        }
    }

    if let Some(rating) = tour.rating_label() {
        println!("{}, rated {}", tour.title, rating);
    }
    let breakdown = Breakdown::new(tour.price, form.draft().guest_size);
    println!(
        "{} per person x {} guest(s)",
        breakdown.unit_price, breakdown.guest_size
    );
    println!("Service charge: {}", breakdown.service_fee);
    println!("Total: {}", breakdown.total);

    let client = BookingClient::new(&args.url).unwrap();
    info!("Booking {} for {}", tour.title, args.full_name);
    let outcome = client
        .submit(identity.as_ref(), &mut form, &CliNavigator)
        .await;
    match outcome {
        SubmitOutcome::Success => println!("Booking confirmed!"),
        _ => {
            eprintln!(
                "Booking not submitted: {}",
                serde_json::to_string(form.errors()).unwrap_or_default()
            );
            process::exit(1);
        }
    }
}
